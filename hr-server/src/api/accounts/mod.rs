//! Account API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Account router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/accounts", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/available", get(handler::list_available))
        .route(
            "/{email}",
            get(handler::get_by_email)
                .put(handler::update)
                .delete(handler::delete),
        )
}
