//! Common test utilities
//!
//! In-memory stores satisfying the repository contracts, and a fully wired
//! router for driving the HTTP surface without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{middleware, Router};
use uuid::Uuid;

use ledger_api::api::{self, AppState};
use ledger_api::domain::{Account, OperationType, Transaction};
use ledger_api::repository::{AccountStore, OperationTypeStore, StoreError, TransactionStore};

/// In-memory account store
#[derive(Default)]
pub struct MemoryAccountStore {
    rows: Mutex<HashMap<Uuid, Account>>,
}

impl MemoryAccountStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, account: &Account) -> Result<(), StoreError> {
        // Mirrors the conflict-ignore insert: an existing row wins.
        self.rows
            .lock()
            .unwrap()
            .entry(account.uuid)
            .or_insert_with(|| account.clone());
        Ok(())
    }

    async fn get(&self, uuid: Uuid) -> Result<Account, StoreError> {
        self.rows
            .lock()
            .unwrap()
            .get(&uuid)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn exists_by_idempotency(&self, uuid: Uuid) -> Result<bool, StoreError> {
        Ok(self.rows.lock().unwrap().contains_key(&uuid))
    }
}

/// In-memory transaction store
#[derive(Default)]
pub struct MemoryTransactionStore {
    rows: Mutex<HashMap<Uuid, Transaction>>,
}

impl MemoryTransactionStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, uuid: Uuid) -> Option<Transaction> {
        self.rows.lock().unwrap().get(&uuid).cloned()
    }
}

#[async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn create(&self, transaction: &Transaction) -> Result<(), StoreError> {
        self.rows
            .lock()
            .unwrap()
            .entry(transaction.uuid)
            .or_insert_with(|| transaction.clone());
        Ok(())
    }

    async fn exists_by_idempotency(&self, uuid: Uuid) -> Result<bool, StoreError> {
        Ok(self.rows.lock().unwrap().contains_key(&uuid))
    }
}

/// In-memory operation type store seeded with the reference data from the
/// migrations: 1-3 are debits, 4 is a credit.
pub struct MemoryOperationTypeStore {
    rows: HashMap<i32, OperationType>,
}

impl MemoryOperationTypeStore {
    pub fn with_reference_data() -> Self {
        let rows = [(1, false), (2, false), (3, false), (4, true)]
            .into_iter()
            .map(|(operation_type_id, is_credit)| {
                (
                    operation_type_id,
                    OperationType {
                        operation_type_id,
                        is_credit,
                    },
                )
            })
            .collect();
        Self { rows }
    }
}

#[async_trait]
impl OperationTypeStore for MemoryOperationTypeStore {
    async fn get(&self, id: i32) -> Result<OperationType, StoreError> {
        self.rows.get(&id).copied().ok_or(StoreError::NotFound)
    }
}

/// Build the application router against fresh in-memory stores, returning
/// the store handles for state assertions.
pub fn test_app() -> (Router, Arc<MemoryAccountStore>, Arc<MemoryTransactionStore>) {
    let accounts = Arc::new(MemoryAccountStore::default());
    let transactions = Arc::new(MemoryTransactionStore::default());

    let state = AppState {
        accounts: accounts.clone(),
        transactions: transactions.clone(),
        operation_types: Arc::new(MemoryOperationTypeStore::with_reference_data()),
    };

    let api_router =
        api::create_router().layer(middleware::from_fn(api::middleware::logging_middleware));

    let app = Router::new().nest("/v1", api_router).with_state(state);

    (app, accounts, transactions)
}
