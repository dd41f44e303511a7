//! Error handling module
//!
//! Centralized error types and conversion to the structured wire error
//! shape: `{"errors": [{id, code, status, title, detail, source?}]}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::repository::StoreError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Stable machine-readable error codes
const VALIDATION_ERROR: &str = "validation_error";
const BAD_REQUEST: &str = "bad_request";
const NOT_FOUND: &str = "not_found";
const INTERNAL_ERROR: &str = "internal_error";

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// One or more request fields failed validation. Carries the complete
    /// set of field failures, never just the first.
    #[error("{title}")]
    Validation {
        title: &'static str,
        errors: Vec<FieldError>,
    },

    /// The derived identifier already exists; a replay of an already
    /// processed request.
    #[error("duplicate request received")]
    Duplicate { title: &'static str },

    /// A transaction referenced an account that does not exist.
    #[error("account not found for account_uuid: '{0}'")]
    UnknownAccount(Uuid),

    /// A transaction referenced an operation type that does not exist.
    #[error("invalid operation type: {0}")]
    UnknownOperationType(i32),

    /// A read target is absent.
    #[error("account not found")]
    AccountNotFound { detail: String },

    /// The request body could not be decoded.
    #[error("failed to decode request body")]
    Decode(#[from] JsonRejection),

    // Server errors (5xx)
    #[error("{title}")]
    Storage {
        title: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wrap an unexpected storage failure under the given operation title.
    pub fn storage(title: &'static str, source: StoreError) -> Self {
        Self::Storage { title, source }
    }

    /// Map this error to its HTTP status and structured response body.
    fn describe(self) -> (StatusCode, ErrorResponse) {
        match self {
            AppError::Validation { title, errors } => {
                let errors = errors
                    .into_iter()
                    .map(|source| {
                        ErrorDescription::new(
                            VALIDATION_ERROR,
                            StatusCode::BAD_REQUEST,
                            title,
                            "failed to validate request body".to_string(),
                        )
                        .with_source(source)
                    })
                    .collect();

                (StatusCode::BAD_REQUEST, ErrorResponse { errors })
            }

            AppError::Duplicate { title } => single(
                StatusCode::BAD_REQUEST,
                BAD_REQUEST,
                title,
                "duplicate request received".to_string(),
            ),

            AppError::UnknownAccount(account_uuid) => single(
                StatusCode::BAD_REQUEST,
                BAD_REQUEST,
                "failed to validate account",
                format!("account not found for account_uuid: '{}'", account_uuid),
            ),

            AppError::UnknownOperationType(id) => single(
                StatusCode::BAD_REQUEST,
                BAD_REQUEST,
                "failed to validate operation_type_id",
                format!("invalid operation type: {}", id),
            ),

            AppError::AccountNotFound { detail } => single(
                StatusCode::NOT_FOUND,
                NOT_FOUND,
                "account not found",
                detail,
            ),

            AppError::Decode(rejection) => single(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR,
                "failed to decode request body",
                rejection.body_text(),
            ),

            AppError::Storage { title, source } => {
                // The cause is logged here and never leaked to the client.
                tracing::error!(error = ?source, "storage failure: {}", title);
                single(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR,
                    title,
                    "unexpected storage failure".to_string(),
                )
            }
        }
    }
}

fn single(
    status: StatusCode,
    code: &'static str,
    title: &'static str,
    detail: String,
) -> (StatusCode, ErrorResponse) {
    (
        status,
        ErrorResponse {
            errors: vec![ErrorDescription::new(code, status, title, detail)],
        },
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.describe();
        (status, Json(body)).into_response()
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorDescription>,
}

/// A single structured error entry
#[derive(Debug, Serialize)]
pub struct ErrorDescription {
    pub id: Uuid,
    pub code: &'static str,
    pub status: u16,
    pub title: &'static str,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<FieldError>,
}

impl ErrorDescription {
    fn new(code: &'static str, status: StatusCode, title: &'static str, detail: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            status: status.as_u16(),
            title,
            detail,
            source: None,
        }
    }

    fn with_source(mut self, source: FieldError) -> Self {
        self.source = Some(source);
        self
    }
}

/// Describes an error for a specific field, usually provided upon the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}
