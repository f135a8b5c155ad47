use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::model::GenerationError;
use crate::portfolio;
use crate::web::models::ErrorBody;

pub type Result<T, E = ChatError> = std::result::Result<T, E>;

/// Failures surfaced by the chat endpoint, mapped to status codes at the boundary.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Query is required")]
    MissingQuery,

    #[error("Query too long (max {0} characters)")]
    QueryTooLong(usize),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("API key not configured")]
    MissingApiKey,

    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl ResponseError for ChatError {
    fn status_code(&self) -> StatusCode {
        match self {
            ChatError::MissingQuery | ChatError::QueryTooLong(_) | ChatError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ChatError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ChatError::MissingApiKey | ChatError::Generation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            // Upstream detail stays in the logs; visitors get the apology.
            ChatError::Generation(_) => ErrorBody {
                error: portfolio::apology(),
                fallback: true,
            },
            ChatError::MissingApiKey => ErrorBody {
                error: self.to_string(),
                fallback: true,
            },
            _ => ErrorBody {
                error: self.to_string(),
                fallback: false,
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        assert_eq!(ChatError::MissingQuery.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ChatError::QueryTooLong(500).to_string(),
            "Query too long (max 500 characters)"
        );
        assert_eq!(
            ChatError::InvalidBody("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn configuration_and_upstream_errors_are_server_errors() {
        assert_eq!(
            ChatError::MissingApiKey.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ChatError::from(GenerationError::EmptyReply).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ChatError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
