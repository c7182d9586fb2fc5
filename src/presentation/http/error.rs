// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError, validation::FieldError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    details: Option<Vec<FieldError>>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::InvalidInput(errors) => Self {
                status: StatusCode::BAD_REQUEST,
                message: errors.to_string(),
                details: Some(errors.into_fields()),
            },
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Unavailable(msg) => {
                Self::new(StatusCode::SERVICE_UNAVAILABLE, msg)
            }
            ApplicationError::Infrastructure(msg) => Self::internal(&msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::Conflict(msg) | DomainError::DuplicateSlug(msg) => {
                Self::new(StatusCode::CONFLICT, msg)
            }
            exhausted @ DomainError::SlugExhausted { .. } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("{exhausted}; try a different name"),
            ),
            DomainError::Unavailable(msg) => Self::new(StatusCode::SERVICE_UNAVAILABLE, msg),
            DomainError::Persistence(msg) => Self::internal(&msg),
        }
    }

    fn internal(cause: &str) -> Self {
        tracing::error!(error = %cause, "request failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "unexpected server error".into(),
        )
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status;
        let payload = ErrorResponse {
            error: status.canonical_reason().unwrap_or("error").to_string(),
            message: self.message,
            details: self.details,
        };
        let mut response = (status, Json(payload)).into_response();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from_static("1"));
        }
        response
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Reason phrase of the status code, e.g. `Bad Request`.
    pub error: String,
    pub message: String,
    /// Present on validation failures, one entry per rejected field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
