pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::services::question_store::QuestionStore;

#[derive(Clone)]
pub struct AppState {
    pub store: QuestionStore,
}

impl AppState {
    pub fn new(store: QuestionStore) -> Self {
        Self { store }
    }
}

pub fn app(state: AppState) -> Router {
    let base_routes = Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health))
        .route("/api-docs/openapi.json", get(routes::docs::openapi_json));

    let public_api = Router::new()
        .route("/questions/hr", get(routes::questions::list_hr_questions))
        .route(
            "/questions/technical/:topic",
            get(routes::questions::list_topic_questions),
        )
        .route(
            "/random-question/:category",
            get(routes::questions::random_question),
        )
        .route("/search", get(routes::questions::search_questions))
        .route("/categories", get(routes::questions::list_categories))
        .route("/submit-answer", post(routes::answers::submit_answer));

    base_routes
        .merge(public_api)
        .with_state(state)
        .layer(middleware::cors::open_cors())
        .layer(TraceLayer::new_for_http())
}
