//! Transaction model
//!
//! Transaction entity, creation request validation, and amount-sign
//! resolution against the operation type classification.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FieldError;

/// Request body for transaction creation.
///
/// Clients submit the amount as a non-negative magnitude; the stored sign
/// is resolved from the operation type at creation time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(default)]
    pub account_uuid: String,
    #[serde(default)]
    pub operation_type_id: i32,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub idempotency_key: String,
}

impl CreateTransactionRequest {
    /// Parsed form of `account_uuid`. Existence is checked later against
    /// the account store, not here.
    pub fn account_uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.account_uuid).ok()
    }

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
        if self.account_uuid().is_none() {
            errors.push(FieldError {
                field: "account_uuid",
                message: format!("invalid uuid: '{}'", self.account_uuid),
            });
        }
        if self.operation_type_id <= 0 {
            errors.push(FieldError {
                field: "operation_type_id",
                message: format!(
                    "field is required and non-negative: {}",
                    self.operation_type_id
                ),
            });
        }
        if self.amount < Decimal::ZERO {
            errors.push(FieldError {
                field: "amount",
                message: format!("field should be non-negative: {:.2}", self.amount),
            });
        }

        errors
    }
}

/// A persisted transaction. The stored amount is signed: positive for
/// credit operation types, negative for debit.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub uuid: Uuid,
    pub account_uuid: Uuid,
    pub operation_type_id: i32,
    pub amount: Decimal,
    pub event_date: DateTime<Utc>,
}

/// Operation type reference data. Read-only; owned by the seed migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationType {
    pub operation_type_id: i32,
    pub is_credit: bool,
}

/// Returns a negative amount for debit operation types, else positive.
pub fn resolve_amount(amount: Decimal, is_credit: bool) -> Decimal {
    if is_credit {
        amount
    } else {
        -amount
    }
}
