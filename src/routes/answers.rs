use axum::Json;
use validator::Validate;

use crate::{
    dto::answer_dto::SubmitAnswerRequest, error::Result, models::score::ScoreResult,
    services::scoring_service::ScoringService,
};

#[utoipa::path(
    post,
    path = "/submit-answer",
    request_body = SubmitAnswerRequest,
    responses(
        (status = 200, description = "Heuristic feedback for the answer", body = ScoreResult),
        (status = 400, description = "Payload too large to score"),
        (status = 422, description = "Malformed payload")
    )
)]
#[axum::debug_handler]
pub async fn submit_answer(Json(payload): Json<SubmitAnswerRequest>) -> Result<Json<ScoreResult>> {
    payload.validate()?;
    let result = ScoringService::score(&payload.question, &payload.answer);
    tracing::info!(
        score = result.score,
        clarity = ?result.clarity,
        has_similarity = result.similarity_score_percent.is_some(),
        "Answer scored"
    );
    Ok(Json(result))
}
