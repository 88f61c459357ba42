use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::AssessmentId;
use crate::presentation::state::AppState;

use super::AssessmentResponse;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn get_assessment_handler(
    State(state): State<AppState>,
    Path(assessment_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match Uuid::parse_str(&assessment_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid assessment ID: {}", assessment_id),
                }),
            )
                .into_response();
        }
    };

    match state
        .repository
        .get_by_id(AssessmentId::from_uuid(uuid))
        .await
    {
        Ok(Some(assessment)) => {
            (StatusCode::OK, Json(AssessmentResponse::from(&assessment))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Assessment not found: {}", assessment_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch assessment");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch assessment: {}", e),
                }),
            )
                .into_response()
        }
    }
}
