use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::modules::attendance::use_cases::record_punch::extraction::{
    ExtractedPunch, extract_punch,
};
use crate::modules::attendance::use_cases::record_punch::handler::ApplicationError;
use crate::shared::infrastructure::ledger_store::StorageError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Storage(StorageError::InvalidKey(_)) => StatusCode::BAD_REQUEST,
            ApplicationError::Domain(_) => StatusCode::CONFLICT,
            ApplicationError::Storage(e) => {
                error!(error = %e, "ledger storage failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error_response(status, self.to_string())
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ExtractedPunch>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };
    record(state, body).await
}

pub async fn handle_text(State(state): State<AppState>, body: String) -> Response {
    record(state, extract_punch(&body)).await
}

async fn record(state: AppState, extracted: ExtractedPunch) -> Response {
    let event = match extracted.into_event() {
        Ok(event) => event,
        Err(e) => return ApplicationError::from(e).into_response(),
    };
    match state.record_punch_handler.handle(event).await {
        Ok(ledger) => (StatusCode::OK, Json(ledger)).into_response(),
        Err(e) => e.into_response(),
    }
}
