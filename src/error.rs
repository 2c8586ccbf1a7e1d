use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::services::question_store::LoadError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Question data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Question data corrupt: {0}")]
    DataCorrupt(String),

    #[error("Topic not found: {0}")]
    TopicNotFound(String),

    #[error("No questions found for category: {0}")]
    NoQuestionsFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

}

impl Error {
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::DataUnavailable(_) => "data_unavailable",
            Error::DataCorrupt(_) => "data_corrupt",
            Error::TopicNotFound(_) => "topic_not_found",
            Error::NoQuestionsFound(_) => "no_questions_found",
            Error::Validation(_) => "validation",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::TopicNotFound(_) | Error::NoQuestionsFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::DataUnavailable(_) | Error::DataCorrupt(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(json!({ "error": self.to_string(), "kind": self.kind() }));
        (status, body).into_response()
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Missing { .. } => Error::DataUnavailable(err.to_string()),
            LoadError::Unreadable { .. } => Error::DataUnavailable(err.to_string()),
            LoadError::Malformed { .. } => Error::DataCorrupt(err.to_string()),
        }
    }
}
