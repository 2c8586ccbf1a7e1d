use axum::Json;
use utoipa::OpenApi;

use crate::dto::{
    answer_dto::SubmitAnswerRequest,
    question_dto::{
        CategoriesResponse, HealthResponse, MessageResponse, QuestionListResponse, SearchResponse,
    },
};
use crate::models::{
    question::{QuestionItem, SearchResult},
    score::{Clarity, ScoreResult},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::root,
        crate::routes::health::health,
        crate::routes::questions::list_hr_questions,
        crate::routes::questions::list_topic_questions,
        crate::routes::questions::random_question,
        crate::routes::questions::search_questions,
        crate::routes::questions::list_categories,
        crate::routes::answers::submit_answer,
    ),
    components(schemas(
        MessageResponse,
        HealthResponse,
        QuestionListResponse,
        CategoriesResponse,
        SearchResponse,
        QuestionItem,
        SearchResult,
        SubmitAnswerRequest,
        ScoreResult,
        Clarity,
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
