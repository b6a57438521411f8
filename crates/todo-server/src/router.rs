use axum::routing::{get, post};
use axum::Router;

use crate::handler::{self, SharedService};

/// Build the axum router with all entry endpoints.
pub fn build_router(service: SharedService) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .route("/api/entry", post(handler::create_entry))
        .route(
            "/api/entry/:id",
            get(handler::get_entry)
                .patch(handler::update_entry)
                .delete(handler::delete_entry),
        )
        .with_state(service)
}
