//! Account model
//!
//! Account entity and creation request validation. Accounts are immutable
//! after creation; there is no update or delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FieldError;

/// Request body for account creation.
///
/// Fields default to empty so that missing JSON keys reach validation
/// instead of failing deserialization; validation then reports every
/// missing field.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(default)]
    pub document_number: String,
    #[serde(default)]
    pub idempotency_key: String,
}

impl CreateAccountRequest {
    /// Validate the request shape. Returns the complete set of field
    /// failures, not just the first.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.idempotency_key.is_empty() {
            errors.push(FieldError {
                field: "idempotency_key",
                message: "field is required".to_string(),
            });
        }
        if self.document_number.is_empty() {
            errors.push(FieldError {
                field: "document_number",
                message: "field is required".to_string(),
            });
        }

        errors
    }
}

/// A persisted account
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub uuid: Uuid,
    pub document_number: String,
    pub created_at: DateTime<Utc>,
}
