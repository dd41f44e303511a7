//! Account store
//!
//! Postgres-backed account persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::Account;

use super::{AccountStore, StoreError};

/// Postgres implementation of [`AccountStore`]
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, account: &Account) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (uuid, document_number, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (uuid) DO NOTHING
            "#,
        )
        .bind(account.uuid)
        .bind(&account.document_number)
        .bind(account.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, uuid: Uuid) -> Result<Account, StoreError> {
        let row: Option<(Uuid, String, DateTime<Utc>)> = sqlx::query_as(
            r#"
            SELECT uuid, document_number, created_at
            FROM accounts
            WHERE uuid = $1
            "#,
        )
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await?;

        let (uuid, document_number, created_at) = row.ok_or(StoreError::NotFound)?;

        Ok(Account {
            uuid,
            document_number,
            created_at,
        })
    }

    async fn exists_by_idempotency(&self, uuid: Uuid) -> Result<bool, StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM accounts WHERE uuid = $1)")
                .bind(uuid)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
