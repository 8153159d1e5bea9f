use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use operacoes_core::ErrorDetail;
use thiserror::Error;

use crate::domain::OperationError;

/// Errors surfaced at the HTTP boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The operation refused its arguments.
    #[error(transparent)]
    InvalidArgument(OperationError),
    /// The operands were valid but the result has no finite `f64` value.
    #[error(transparent)]
    UnrepresentableResult(OperationError),
    /// The query string could not be decoded into two finite numbers.
    #[error("{0}")]
    MalformedInput(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::UnrepresentableResult(_) | ApiError::MalformedInput(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl From<OperationError> for ApiError {
    fn from(error: OperationError) -> Self {
        match error {
            OperationError::DivisionByZero => ApiError::InvalidArgument(error),
            OperationError::NonFiniteResult => ApiError::UnrepresentableResult(error),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorDetail::new(self.to_string()))).into_response()
    }
}
