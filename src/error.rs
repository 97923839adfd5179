use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bakery_service::{ValidationError, sea_orm::DbErr};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything a handler can fail with
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),
    /// No record with the requested id; carries the entity name
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Known path, unsupported method
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// The store rejected the operation
    #[error(transparent)]
    Persistence(#[from] DbErr),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// JSON error envelope, `{"error": ...}`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Persistence(err) => tracing::error!(error = %err, "store operation failed"),
            other => tracing::debug!(status = status.as_u16(), "{other}"),
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
