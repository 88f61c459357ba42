use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::SubmissionError;
use crate::domain::AssessmentDraft;
use crate::presentation::state::AppState;

use super::AssessmentResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub batch_name: String,
    #[serde(default)]
    pub test_case: String,
    pub question_format: Option<String>,
    pub question_tone: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty_level: u8,
    pub output_format: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub selected_modules: Vec<String>,
    #[serde(default)]
    pub consolidated_output: bool,
}

fn default_difficulty() -> u8 {
    5
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl CreateAssessmentRequest {
    /// Translates the wire payload into a draft. Enum-valued fields are
    /// parsed here; anything unparseable is a bad request before the draft
    /// ever reaches the service.
    fn into_draft(self) -> Result<AssessmentDraft, String> {
        Ok(AssessmentDraft {
            name: self.name,
            batch_name: self.batch_name,
            test_case: self.test_case,
            question_format: self.question_format.as_deref().map(str::parse).transpose()?,
            question_tone: self.question_tone.as_deref().map(str::parse).transpose()?,
            difficulty_level: self.difficulty_level,
            output_format: self.output_format.as_deref().map(str::parse).transpose()?,
            language: self.language.as_deref().map(str::parse).transpose()?,
            course_id: self.course_id,
            selected_modules: self.selected_modules,
            consolidated_output: self.consolidated_output,
        })
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn create_assessment_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateAssessmentRequest>,
) -> impl IntoResponse {
    let draft = match request.into_draft() {
        Ok(draft) => draft,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response();
        }
    };

    match state.assessment_service.submit(&draft).await {
        Ok(assessment) => (
            StatusCode::CREATED,
            Json(AssessmentResponse::from(&assessment)),
        )
            .into_response(),
        Err(e @ SubmissionError::Invalid(_))
        | Err(e @ SubmissionError::UnknownCourse(_))
        | Err(e @ SubmissionError::UnknownModule(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(SubmissionError::QueueUnavailable) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Assessment generation is currently unavailable".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create assessment");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to create assessment: {}", e),
                }),
            )
                .into_response()
        }
    }
}
