use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::Course;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    pub modules: Vec<CourseModuleResponse>,
}

#[derive(Serialize)]
pub struct CourseModuleResponse {
    pub id: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            modules: course
                .modules
                .into_iter()
                .map(|m| CourseModuleResponse {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn courses_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog.list_courses().await {
        Ok(courses) => {
            let response: Vec<CourseResponse> =
                courses.into_iter().map(CourseResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch course catalog");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch courses: {}", e),
                }),
            )
                .into_response()
        }
    }
}
