//! Database module
//!
//! Database connection and schema verification utilities.

use sqlx::PgPool;

/// Note: migrations are raw SQL files in the migrations/ directory.
/// This function can be used to verify database connectivity.
pub async fn verify_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(())
}

/// Check if required tables exist
pub async fn check_schema(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let required_tables = vec!["accounts", "operation_types", "transactions"];

    for table in required_tables {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = 'public' AND table_name = $1
            )
            "#,
        )
        .bind(table)
        .fetch_one(pool)
        .await?;

        if !exists {
            tracing::error!("Required table '{}' does not exist", table);
            return Ok(false);
        }
    }

    // Transactions cannot be created without the reference data.
    if !check_operation_types(pool).await? {
        return Ok(false);
    }

    Ok(true)
}

/// Check that the operation type reference data is seeded
async fn check_operation_types(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM operation_types")
        .fetch_one(pool)
        .await?;

    if count == 0 {
        tracing::error!("Operation type reference data is missing. Please run database seed.");
        return Ok(false);
    }

    Ok(true)
}
