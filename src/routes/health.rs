use axum::{extract::State, Json};

use crate::dto::question_dto::{HealthResponse, MessageResponse};
use crate::AppState;

pub const WELCOME_MESSAGE: &str = "AI Interview Coach API is running 🚀";

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = MessageResponse))
)]
#[axum::debug_handler]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Liveness and bank status", body = HealthResponse))
)]
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        questions_loaded: state.store.is_loaded(),
    })
}
