use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UserResponse {
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn user_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.user_directory.current_user().await {
        Ok(profile) => (
            StatusCode::OK,
            Json(UserResponse {
                name: profile.name,
                email: profile.email,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch user profile");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch user: {}", e),
                }),
            )
                .into_response()
        }
    }
}
