use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::AssessmentId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Redirects to the generated artifact. Jobs that have not completed carry no
/// download location, so the caller gets an unavailability notice instead of
/// a redirect.
#[tracing::instrument(skip(state))]
pub async fn download_assessment_handler(
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
        Ok(Some(assessment)) => match assessment.download_url() {
            Some(url) => Redirect::to(url).into_response(),
            None => (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: format!(
                        "Download not available: assessment is {}",
                        assessment.status
                    ),
                }),
            )
                .into_response(),
        },
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Assessment not found: {}", assessment_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch assessment for download");
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
