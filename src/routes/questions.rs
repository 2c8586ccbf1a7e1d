use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    dto::question_dto::{CategoriesResponse, QuestionListResponse, SearchQuery, SearchResponse},
    error::Result,
    models::question::{QuestionItem, HR_CATEGORY},
    services::{lookup_service::LookupService, random_picker},
    AppState,
};

#[utoipa::path(
    get,
    path = "/questions/hr",
    responses(
        (status = 200, description = "All hr questions", body = QuestionListResponse),
        (status = 500, description = "Question data unavailable or corrupt")
    )
)]
#[axum::debug_handler]
pub async fn list_hr_questions(State(state): State<AppState>) -> Result<Json<QuestionListResponse>> {
    let bank = state.store.bank()?;
    let questions = LookupService::get_by_category(bank, HR_CATEGORY)?.to_vec();
    Ok(Json(QuestionListResponse { questions }))
}

#[utoipa::path(
    get,
    path = "/questions/technical/{topic}",
    params(("topic" = String, Path, description = "Technical topic, e.g. python or dsa")),
    responses(
        (status = 200, description = "Questions for the topic", body = QuestionListResponse),
        (status = 404, description = "Topic not found"),
        (status = 500, description = "Question data unavailable or corrupt")
    )
)]
#[axum::debug_handler]
pub async fn list_topic_questions(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> Result<Json<QuestionListResponse>> {
    let bank = state.store.bank()?;
    let questions = LookupService::get_topic(bank, &topic)?.to_vec();
    Ok(Json(QuestionListResponse { questions }))
}

#[utoipa::path(
    get,
    path = "/random-question/{category}",
    params(("category" = String, Path, description = "hr or a technical topic")),
    responses(
        (status = 200, description = "One random question with its reference answer", body = QuestionItem),
        (status = 404, description = "No questions found"),
        (status = 500, description = "Question data unavailable or corrupt")
    )
)]
#[axum::debug_handler]
pub async fn random_question(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<QuestionItem>> {
    let bank = state.store.bank()?;
    let pool = LookupService::random_pool(bank, &category)?;
    let picked = random_picker::pick_random(pool)?;
    tracing::debug!(category = %category, pool = pool.len(), "Picked random question");
    Ok(Json(picked.clone()))
}

#[utoipa::path(
    get,
    path = "/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching questions, possibly none", body = SearchResponse),
        (status = 500, description = "Question data unavailable or corrupt")
    )
)]
#[axum::debug_handler]
pub async fn search_questions(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    let bank = state.store.bank()?;
    let results = LookupService::search(bank, &query.q);
    tracing::debug!(query = %query.q, hits = results.len(), "Searched questions");
    Ok(Json(SearchResponse { results }))
}

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "hr followed by technical topics", body = CategoriesResponse),
        (status = 500, description = "Question data unavailable or corrupt")
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoriesResponse>> {
    let bank = state.store.bank()?;
    Ok(Json(CategoriesResponse {
        categories: bank.categories(),
    }))
}
