use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::api_response::ApiResponse;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CustomError {
    #[error("Invalid amount: {0}")]
    InvalidAmountError(String),

    #[error("Invalid decimals: {0}")]
    InvalidDecimalsError(String),

    #[error("Invalid recipient address: {0}")]
    InvalidRecipientError(String),

    #[error("No tokens selected for transfer")]
    NoTransfersSelectedError,

    #[error("Token not found: {0}")]
    TokenNotFoundError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    ValidationError(String),
}

// Error payload carried inside the response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomError::InvalidAmountError(_)
            | CustomError::InvalidDecimalsError(_)
            | CustomError::InvalidRecipientError(_)
            | CustomError::NoTransfersSelectedError
            | CustomError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CustomError::TokenNotFoundError(_) => StatusCode::NOT_FOUND,
            CustomError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let api_error = ApiError {
            code: status.as_u16(),
            message: self.to_string(),
        };

        HttpResponse::build(status).json(ApiResponse::<()>::failure(api_error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_kinds_map_to_bad_request() {
        assert_eq!(
            CustomError::NoTransfersSelectedError.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CustomError::InvalidDecimalsError("-1".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CustomError::TokenNotFoundError("persistence1xyz".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            CustomError::InvalidAmountError("1.2.3".into()).to_string(),
            "Invalid amount: 1.2.3"
        );
        assert_eq!(
            CustomError::NoTransfersSelectedError.to_string(),
            "No tokens selected for transfer"
        );
    }
}
