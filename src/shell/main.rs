use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use attendance_ledger::shared::infrastructure::ledger_store::LedgerStore;
use attendance_ledger::shared::infrastructure::ledger_store::file_system::FileSystemLedgerStore;
use attendance_ledger::shared::infrastructure::ledger_store::in_memory::InMemoryLedgerStore;
use attendance_ledger::shell::config::AppConfig;
use attendance_ledger::shell::graphql::{build_schema, graphiql, graphql};
use attendance_ledger::shell::http::router;
use attendance_ledger::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn LedgerStore> = match &config.data_dir {
        Some(dir) => {
            tracing::info!(data_dir = %dir.display(), "using file system ledger store");
            Arc::new(FileSystemLedgerStore::open(dir.clone()).await?)
        }
        None => {
            tracing::warn!("LEDGER_DATA_DIR not set, ledgers are kept in memory");
            Arc::new(InMemoryLedgerStore::new())
        }
    };

    let state = AppState::new(store, config.ledger);
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
