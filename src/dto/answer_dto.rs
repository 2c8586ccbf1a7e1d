use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const MAX_TEXT_LEN: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitAnswerRequest {
    #[validate(length(max = MAX_TEXT_LEN))]
    pub question: String,
    #[validate(length(max = MAX_TEXT_LEN))]
    pub answer: String,
}
