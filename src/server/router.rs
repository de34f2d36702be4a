use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::engine::AnalysisEngine;
use crate::server::handler;

/// Build the axum router over a shared engine.
pub fn build_router(engine: Arc<AnalysisEngine>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods([
        Method::GET,
        Method::HEAD,
        Method::PUT,
        Method::PATCH,
        Method::POST,
        Method::DELETE,
    ]);

    Router::new()
        .route(
            "/strings",
            get(handler::list_strings).post(handler::create_string),
        )
        // Static segment wins over the `:value` capture.
        .route(
            "/strings/filter-by-natural-language",
            get(handler::filter_by_natural_language),
        )
        .route(
            "/strings/:value",
            get(handler::get_string).delete(handler::delete_string),
        )
        .with_state(engine)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
