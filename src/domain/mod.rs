//! Domain model
//!
//! Entities, request validation, and identifier derivation.

mod account;
mod idempotency;
mod transaction;

pub use account::{Account, CreateAccountRequest};
pub use idempotency::derive_resource_id;
pub use transaction::{resolve_amount, CreateTransactionRequest, OperationType, Transaction};
