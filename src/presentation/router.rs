use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    courses_handler, create_assessment_handler, download_assessment_handler,
    get_assessment_handler, health_handler, list_assessments_handler, user_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/user", get(user_handler))
        .route("/api/v1/courses", get(courses_handler))
        .route(
            "/api/v1/assessments",
            get(list_assessments_handler).post(create_assessment_handler),
        )
        .route("/api/v1/assessments/{assessment_id}", get(get_assessment_handler))
        .route(
            "/api/v1/assessments/{assessment_id}/download",
            get(download_assessment_handler),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
