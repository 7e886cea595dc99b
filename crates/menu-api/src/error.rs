use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use menu_core::error::DomainError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Duplicate record: {0}")]
    DuplicateRecord(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::DuplicateRecord(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::WrongIdType | DomainError::WrongIdTypes => {
                ApiError::Unprocessable(message)
            }
            DomainError::Validation(msg) => ApiError::Unprocessable(msg),
            DomainError::NotFound(_) => ApiError::NotFound(message),
            DomainError::ParentNotRegistered(_) | DomainError::TitleAlreadyRegistered(_) => {
                ApiError::BadRequest(message)
            }
            DomainError::DuplicateRecord => ApiError::DuplicateRecord(message),
            DomainError::Database(_) => ApiError::InternalError(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                ("NOT_FOUND", msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                ("BAD_REQUEST", msg)
            }
            ApiError::Unprocessable(msg) => {
                tracing::warn!("Unprocessable: {}", msg);
                ("UNPROCESSABLE_ENTITY", msg)
            }
            ApiError::DuplicateRecord(msg) => {
                tracing::error!("Duplicate record: {}", msg);
                ("DUPLICATE_RECORD", msg)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                ("INTERNAL_ERROR", "Internal server error".to_string())
            }
        };

        (status, Json(ApiResponse::error(code, &message))).into_response()
    }
}
