//! Operation type store
//!
//! Read-only lookup of the operation type reference data seeded by the
//! migrations.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::OperationType;

use super::{OperationTypeStore, StoreError};

/// Postgres implementation of [`OperationTypeStore`]
#[derive(Debug, Clone)]
pub struct PgOperationTypeStore {
    pool: PgPool,
}

impl PgOperationTypeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OperationTypeStore for PgOperationTypeStore {
    async fn get(&self, id: i32) -> Result<OperationType, StoreError> {
        let row: Option<(i32, bool)> = sqlx::query_as(
            r#"
            SELECT operation_type_id, is_credit
            FROM operation_types
            WHERE operation_type_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let (operation_type_id, is_credit) = row.ok_or(StoreError::NotFound)?;

        Ok(OperationType {
            operation_type_id,
            is_credit,
        })
    }
}
