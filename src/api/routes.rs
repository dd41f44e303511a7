//! API Routes
//!
//! HTTP endpoint definitions.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Account, CreateAccountRequest, CreateTransactionRequest};
use crate::error::AppError;
use crate::handlers::{CreateAccountHandler, CreateTransactionHandler};
use crate::repository::{
    AccountStore, OperationTypeStore, PgAccountStore, PgOperationTypeStore, PgTransactionStore,
    StoreError, TransactionStore,
};

// =========================================================================
// Shared state
// =========================================================================

/// Stores injected into every route handler. Constructed once at startup;
/// never a process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountStore>,
    pub transactions: Arc<dyn TransactionStore>,
    pub operation_types: Arc<dyn OperationTypeStore>,
}

impl AppState {
    /// Production wiring: every store backed by the same Postgres pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            accounts: Arc::new(PgAccountStore::new(pool.clone())),
            transactions: Arc::new(PgTransactionStore::new(pool.clone())),
            operation_types: Arc::new(PgOperationTypeStore::new(pool)),
        }
    }
}

// =========================================================================
// Response types
// =========================================================================

/// Response body for successful resource creation
#[derive(Debug, Serialize)]
pub struct ResourceCreatedResponse {
    pub uuid: Uuid,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(create_account))
        .route("/accounts/:uuid", get(get_account))
        .route("/transactions", post(create_transaction))
}

// =========================================================================
// POST /accounts
// =========================================================================

/// Create an account
async fn create_account(
    State(state): State<AppState>,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ResourceCreatedResponse>), AppError> {
    let Json(request) = body?;

    let handler = CreateAccountHandler::new(state.accounts.clone());
    let uuid = handler.execute(request).await?;

    Ok((StatusCode::CREATED, Json(ResourceCreatedResponse { uuid })))
}

// =========================================================================
// GET /accounts/:uuid
// =========================================================================

/// Get an account by UUID
async fn get_account(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<Account>, AppError> {
    // Any identifier that cannot name an existing account is a 404.
    let uuid = Uuid::parse_str(&uuid).map_err(|_| AppError::AccountNotFound {
        detail: format!("invalid uuid: '{}'", uuid),
    })?;

    let account = state.accounts.get(uuid).await.map_err(|err| match err {
        StoreError::NotFound => AppError::AccountNotFound {
            detail: err.to_string(),
        },
        err => AppError::storage("failed to get account", err),
    })?;

    Ok(Json(account))
}

// =========================================================================
// POST /transactions
// =========================================================================

/// Create a transaction
async fn create_transaction(
    State(state): State<AppState>,
    body: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ResourceCreatedResponse>), AppError> {
    let Json(request) = body?;

    let handler = CreateTransactionHandler::new(
        state.transactions.clone(),
        state.accounts.clone(),
        state.operation_types.clone(),
    );
    let uuid = handler.execute(request).await?;

    Ok((StatusCode::CREATED, Json(ResourceCreatedResponse { uuid })))
}
