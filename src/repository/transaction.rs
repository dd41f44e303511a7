//! Transaction store
//!
//! Postgres-backed transaction persistence.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::Transaction;

use super::{StoreError, TransactionStore};

/// Postgres implementation of [`TransactionStore`]
#[derive(Debug, Clone)]
pub struct PgTransactionStore {
    pool: PgPool,
}

impl PgTransactionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn create(&self, transaction: &Transaction) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO transactions (uuid, account_uuid, operation_type_id, amount, event_date)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (uuid) DO NOTHING
            "#,
        )
        .bind(transaction.uuid)
        .bind(transaction.account_uuid)
        .bind(transaction.operation_type_id)
        .bind(transaction.amount)
        .bind(transaction.event_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn exists_by_idempotency(&self, uuid: Uuid) -> Result<bool, StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM transactions WHERE uuid = $1)")
                .bind(uuid)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
