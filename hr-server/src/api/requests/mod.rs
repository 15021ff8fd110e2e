//! Request API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Request router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/requests", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/employee/{id}", get(handler::list_by_employee))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
