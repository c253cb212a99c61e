//! # Asset Ledger Backend
//!
//! HTTP service for a single-user personal-finance ledger backed by a
//! flat CSV file.
//!
//! The crate follows a layered architecture:
//! ```text
//! REST layer (axum handlers)
//!     ↓
//! Domain layer (record service, valuation rules)
//!     ↓
//! Storage layer (CSV codec + repository)
//! ```
//!
//! Every mutation is a full read-modify-write of the ledger file. There
//! is no locking or caching between requests; concurrent writers are an
//! accepted non-goal for this single-user utility.

pub mod domain;
pub mod rest;
pub mod storage;

use anyhow::Result;
use axum::{
    http::Method,
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::domain::RecordService;
use crate::rest::AppState;
use crate::storage::{CsvConnection, RecordRepository};

/// Build the application state over the given connection.
pub fn initialize_backend(connection: CsvConnection) -> Result<AppState> {
    info!(
        "Setting up record store in {}",
        connection.base_directory().display()
    );
    let repository = RecordRepository::new(connection);
    let record_service = RecordService::new(repository);

    Ok(AppState::new(record_service))
}

/// Create the axum router with all routes configured.
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow a local frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/records",
            get(rest::list_records).post(rest::create_record),
        )
        .route(
            "/records/:position",
            put(rest::update_record).delete(rest::delete_record),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
