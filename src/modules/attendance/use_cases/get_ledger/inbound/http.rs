use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::attendance::use_cases::record_punch::inbound::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(employee_id): Path<String>) -> Response {
    match state.get_ledger_handler.handle(&employee_id).await {
        Ok(Some(ledger)) => Json(ledger).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("no ledger for employee {}", employee_id.trim()),
        ),
        Err(e) => e.into_response(),
    }
}
