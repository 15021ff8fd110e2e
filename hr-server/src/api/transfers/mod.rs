//! Transfer API Module
//!
//! Transfers are created through `POST /api/employees/{id}/transfer`; this
//! module only exposes the records and their approval status.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

/// Transfer router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/transfers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", put(handler::update_status))
}
