use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Text is empty")]
    EmptyText,

    #[error("Text too large: {len} characters, max {max} allowed")]
    TextTooLarge { len: usize, max: usize },

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] retext::PipelineError),

    #[error("Similarity error: {0}")]
    Similarity(#[from] retext::SimilarityError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) | ServerError::EmptyText => StatusCode::BAD_REQUEST,
            ServerError::TextTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Pipeline(_) | ServerError::Similarity(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::EmptyText => "EMPTY_TEXT",
            ServerError::TextTooLarge { .. } => "TEXT_TOO_LARGE",
            ServerError::Pipeline(_) => "PIPELINE_ERROR",
            ServerError::Similarity(_) => "SIMILARITY_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request_failed");
        }

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::Internal(format!("JSON encode error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(ServerError::EmptyText.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ServerError::TextTooLarge { len: 10, max: 5 }.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        let invalid = retext::PipelineError::InvalidConfig("mode".into());
        assert_eq!(
            ServerError::from(invalid).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
