//! Axum handlers for the record API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use shared::{CreateRecordRequest, DeleteResponse, ErrorResponse};

use crate::domain::RecordService;
use crate::storage::LedgerError;

/// Application state containing the RecordService
#[derive(Clone)]
pub struct AppState {
    pub record_service: RecordService,
}

impl AppState {
    /// Create new application state with the given RecordService
    pub fn new(record_service: RecordService) -> Self {
        Self { record_service }
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Map a ledger error onto the API contract: 404 for a missing
/// position, otherwise 500 with a generic message. The underlying I/O
/// error text never reaches the caller.
fn map_error(err: LedgerError, generic_message: &str) -> Response {
    match err {
        LedgerError::NotFound(position) => {
            info!("No record at position {}", position);
            error_body(StatusCode::NOT_FOUND, "Record not found")
        }
        other => {
            error!("{}: {:?}", generic_message, other);
            error_body(StatusCode::INTERNAL_SERVER_ERROR, generic_message)
        }
    }
}

/// Axum handler function for GET /api/records
pub async fn list_records(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/records");

    match state.record_service.list_records() {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => map_error(e, "Failed to read records"),
    }
}

/// Axum handler function for POST /api/records
pub async fn create_record(
    State(state): State<AppState>,
    Json(request): Json<CreateRecordRequest>,
) -> impl IntoResponse {
    info!("POST /api/records - account type '{}'", request.account_type);

    match state.record_service.create_record(request) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => map_error(e, "Failed to create record"),
    }
}

/// Axum handler function for PUT /api/records/:position
pub async fn update_record(
    State(state): State<AppState>,
    Path(position): Path<usize>,
    Json(request): Json<CreateRecordRequest>,
) -> impl IntoResponse {
    info!("PUT /api/records/{}", position);

    match state.record_service.update_record(position, request) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => map_error(e, "Failed to update record"),
    }
}

/// Axum handler function for DELETE /api/records/:position
pub async fn delete_record(
    State(state): State<AppState>,
    Path(position): Path<usize>,
) -> impl IntoResponse {
    info!("DELETE /api/records/{}", position);

    match state.record_service.delete_record(position) {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                message: "Record deleted".to_string(),
            }),
        )
            .into_response(),
        Err(e) => map_error(e, "Failed to delete record"),
    }
}
