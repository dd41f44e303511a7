//! Storage layer
//!
//! Capability traits for the account, transaction, and operation type
//! stores, plus the Postgres implementations used in production. The
//! handlers depend only on these contracts; any backing store that
//! satisfies them (the tests use in-memory ones) can be injected.

mod account;
mod error;
mod operation_type;
mod transaction;

pub use account::PgAccountStore;
pub use error::StoreError;
pub use operation_type::PgOperationTypeStore;
pub use transaction::PgTransactionStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Account, OperationType, Transaction};

/// Account persistence contract
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert an account. Silently no-ops when a row with the same
    /// identifier already exists (conflict-ignore insert).
    async fn create(&self, account: &Account) -> Result<(), StoreError>;

    /// Fetch an account by identifier.
    async fn get(&self, uuid: Uuid) -> Result<Account, StoreError>;

    /// Report whether a row with this derived identifier already exists.
    async fn exists_by_idempotency(&self, uuid: Uuid) -> Result<bool, StoreError>;
}

/// Transaction persistence contract
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Insert a transaction. Silently no-ops when a row with the same
    /// identifier already exists (conflict-ignore insert).
    async fn create(&self, transaction: &Transaction) -> Result<(), StoreError>;

    /// Report whether a row with this derived identifier already exists.
    async fn exists_by_idempotency(&self, uuid: Uuid) -> Result<bool, StoreError>;
}

/// Operation type lookup contract
#[async_trait]
pub trait OperationTypeStore: Send + Sync {
    /// Fetch an operation type by its integer identifier.
    async fn get(&self, id: i32) -> Result<OperationType, StoreError>;
}
