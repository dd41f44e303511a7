//! Account creation handler

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{derive_resource_id, Account, CreateAccountRequest};
use crate::error::{AppError, AppResult};
use crate::repository::AccountStore;

use super::FAILED_TO_CREATE_ACCOUNT;

/// Handler for account creation
pub struct CreateAccountHandler {
    accounts: Arc<dyn AccountStore>,
}

impl CreateAccountHandler {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    /// Execute the creation protocol. Returns the derived identifier,
    /// which doubles as the account's public ID.
    pub async fn execute(&self, request: CreateAccountRequest) -> AppResult<Uuid> {
        let errors = request.validate();
        if !errors.is_empty() {
            return Err(AppError::Validation {
                title: FAILED_TO_CREATE_ACCOUNT,
                errors,
            });
        }

        let account_uuid = derive_resource_id(&request.idempotency_key);

        // Fast-path duplicate detection. Not atomic against concurrent
        // submissions of the same key; the conflict-ignore insert below is
        // the actual safety net.
        if self
            .accounts
            .exists_by_idempotency(account_uuid)
            .await
            .map_err(|err| AppError::storage(FAILED_TO_CREATE_ACCOUNT, err))?
        {
            return Err(AppError::Duplicate {
                title: FAILED_TO_CREATE_ACCOUNT,
            });
        }

        let account = Account {
            uuid: account_uuid,
            document_number: request.document_number,
            created_at: Utc::now(),
        };

        self.accounts
            .create(&account)
            .await
            .map_err(|err| AppError::storage(FAILED_TO_CREATE_ACCOUNT, err))?;

        Ok(account_uuid)
    }
}
