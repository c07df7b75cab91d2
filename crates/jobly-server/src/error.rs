//! HTTP error mapping.
//!
//! Every failure leaves the service as `{"error": {"message", "status"}}`.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jobly::JoblyError;
use serde_json::{Value, json};
use thiserror::Error;

use crate::validate::ValidationErrors;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Data(#[from] JoblyError),
    #[error("invalid payload: {}", .0.messages().join("; "))]
    Invalid(ValidationErrors),
    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Data(err) => match err {
                JoblyError::Validation(_)
                | JoblyError::ForeignKeyViolation(_)
                | JoblyError::CheckViolation(_) => StatusCode::BAD_REQUEST,
                JoblyError::Conflict(_) => StatusCode::CONFLICT,
                JoblyError::NotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Invalid(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// The client-facing message. Storage failures are not echoed back.
    fn message(&self) -> Value {
        match self {
            ApiError::Data(err) => match err {
                JoblyError::Validation(msg)
                | JoblyError::Conflict(msg)
                | JoblyError::NotFound(msg)
                | JoblyError::ForeignKeyViolation(msg)
                | JoblyError::CheckViolation(msg) => json!(msg),
                _ => json!("Internal Server Error"),
            },
            ApiError::Invalid(errs) => json!(errs.messages()),
            ApiError::BadRequest(msg) => json!(msg),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errs: ValidationErrors) -> Self {
        Self::Invalid(errs)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = json!({
            "error": {
                "message": self.message(),
                "status": status.as_u16(),
            }
        });
        (status, Json(body)).into_response()
    }
}
