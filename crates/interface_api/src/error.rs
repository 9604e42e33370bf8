//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::PortError;
use domain_artists::ArtistError;
use domain_catalog::CatalogError;
use domain_contacts::{ContactsError, ValidationFailure};
use domain_reference::ReferenceError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        details: Vec<ValidationFailure>,
    },

    /// The submitted record failed validation; `record` carries its
    /// normalized form when there is one to redisplay
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<ValidationFailure>,
        record: Option<serde_json::Value>,
    },

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationFailure>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,
}

impl ApiError {
    /// Builds an error whose details are record-level messages
    fn with_messages(messages: Vec<String>, conflict: bool) -> Self {
        let message = messages.join(" ");
        let details = messages.into_iter().map(ValidationFailure::record).collect();
        if conflict {
            ApiError::Conflict { message, details }
        } else {
            ApiError::Validation {
                message,
                details,
                record: None,
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details, record) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None, None),
            ApiError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, Some(details), None)
            }
            ApiError::Validation { message, details, record } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
                Some(details),
                record,
            ),
            ApiError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg, None, None)
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None, None)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
            record,
        };

        (status, Json(body)).into_response()
    }
}

/// Transient store failures map to 503
impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        if err.is_transient() {
            return ApiError::ServiceUnavailable(err.base_message());
        }
        match err {
            PortError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PortError::Conflict { message } => ApiError::Conflict {
                message,
                details: Vec::new(),
            },
            PortError::Validation { message, .. } => ApiError::with_messages(vec![message], false),
            other => ApiError::Internal(other.base_message()),
        }
    }
}

impl From<ReferenceError> for ApiError {
    fn from(err: ReferenceError) -> Self {
        match err {
            ReferenceError::CountryNotFound(_)
            | ReferenceError::ProvinceNotFound(_)
            | ReferenceError::NoCountrySelected => ApiError::NotFound(err.to_string()),
            ReferenceError::Duplicate(messages) => ApiError::with_messages(messages, true),
            ReferenceError::ValidationFailed(messages) => ApiError::with_messages(messages, false),
            ReferenceError::Port(e) => e.into(),
        }
    }
}

impl From<ContactsError> for ApiError {
    fn from(err: ContactsError) -> Self {
        match err {
            ContactsError::Invalid { record, failures } => ApiError::Validation {
                message: "The name & address record is not valid".to_string(),
                details: failures,
                record: serde_json::to_value(&*record).ok(),
            },
            ContactsError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ContactsError::Store(e) => e.into(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InstrumentNotFound(_) | CatalogError::StyleNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            CatalogError::Duplicate(messages) => ApiError::with_messages(messages, true),
            CatalogError::ValidationFailed(messages) => ApiError::with_messages(messages, false),
            CatalogError::Port(e) => e.into(),
        }
    }
}

impl From<ArtistError> for ApiError {
    fn from(err: ArtistError) -> Self {
        match err {
            ArtistError::ArtistNotFound(_) | ArtistError::MemberNotFound { .. } => {
                ApiError::NotFound(err.to_string())
            }
            ArtistError::ValidationFailed(messages) => ApiError::with_messages(messages, false),
            ArtistError::Conflict(message) => ApiError::with_messages(vec![message], true),
            ArtistError::Port(e) => e.into(),
        }
    }
}
