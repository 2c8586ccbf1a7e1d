use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Clarity {
    Low,
    Medium,
    High,
}

impl Clarity {
    pub fn from_word_count(words: usize) -> Self {
        if words < 10 {
            Clarity::Low
        } else if words < 30 {
            Clarity::Medium
        } else {
            Clarity::High
        }
    }

    pub fn feedback(&self) -> &'static str {
        match self {
            Clarity::Low => "Your answer is too short. Try to explain more.",
            Clarity::Medium => "Your answer is fairly clear, but you can add more details.",
            Clarity::High => "Great clarity! Well explained.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreResult {
    /// 1..=10, derived from keyword matches.
    pub score: u8,
    pub clarity: Clarity,
    pub clarity_feedback: String,
    pub keywords_matched: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score_percent: Option<f64>,
}
