// src/routes/mod.rs
pub mod chat;
pub mod debug;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, health_handler};
use debug::{flows_handler, test_flow_handler};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    // Debug routes carry no auth of their own; authorization is the
    // upstream credential check.
    let debug_routes = Router::new()
        .route("/flows", get(flows_handler))
        .route("/test-flow", post(test_flow_handler));

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .nest("/debug", debug_routes)
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
