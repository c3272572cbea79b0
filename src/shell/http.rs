use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::attendance::use_cases::get_ledger::inbound::http as get_ledger_http;
use crate::modules::attendance::use_cases::record_punch::inbound::http as record_punch_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/punches", post(record_punch_http::handle))
        .route("/punches/text", post(record_punch_http::handle_text))
        .route("/ledgers/{employee_id}", get(get_ledger_http::handle))
        .with_state(state)
}
