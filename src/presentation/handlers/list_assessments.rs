use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::presentation::state::AppState;

use super::AssessmentResponse;

#[derive(Debug, Deserialize)]
pub struct ListAssessmentsParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedAssessmentsResponse {
    pub assessments: Vec<AssessmentResponse>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_assessments: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn list_assessments_handler(
    State(state): State<AppState>,
    Query(params): Query<ListAssessmentsParams>,
) -> impl IntoResponse {
    let page = params.page.unwrap_or(1);
    let limit = params
        .limit
        .unwrap_or(state.settings.pagination.default_page_size);

    if page == 0 || limit == 0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "page and limit must be at least 1".to_string(),
            }),
        )
            .into_response();
    }

    match state.repository.list_page(page, limit).await {
        Ok(page) => {
            let response = PagedAssessmentsResponse {
                assessments: page
                    .assessments
                    .iter()
                    .map(AssessmentResponse::from)
                    .collect(),
                current_page: page.current_page,
                total_pages: page.total_pages,
                total_assessments: page.total_assessments,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch assessments");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch assessments: {}", e),
                }),
            )
                .into_response()
        }
    }
}
