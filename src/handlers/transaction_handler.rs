//! Transaction creation handler

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    derive_resource_id, resolve_amount, CreateTransactionRequest, Transaction,
};
use crate::error::{AppError, AppResult};
use crate::repository::{AccountStore, OperationTypeStore, StoreError, TransactionStore};

use super::FAILED_TO_CREATE_TRANSACTION;

/// Handler for transaction creation
pub struct CreateTransactionHandler {
    transactions: Arc<dyn TransactionStore>,
    accounts: Arc<dyn AccountStore>,
    operation_types: Arc<dyn OperationTypeStore>,
}

impl CreateTransactionHandler {
    pub fn new(
        transactions: Arc<dyn TransactionStore>,
        accounts: Arc<dyn AccountStore>,
        operation_types: Arc<dyn OperationTypeStore>,
    ) -> Self {
        Self {
            transactions,
            accounts,
            operation_types,
        }
    }

    /// Execute the creation protocol. Returns the derived identifier,
    /// which doubles as the transaction's public ID.
    pub async fn execute(&self, request: CreateTransactionRequest) -> AppResult<Uuid> {
        let errors = request.validate();
        if !errors.is_empty() {
            return Err(AppError::Validation {
                title: FAILED_TO_CREATE_TRANSACTION,
                errors,
            });
        }

        let transaction_uuid = derive_resource_id(&request.idempotency_key);

        // Fast-path duplicate detection; the conflict-ignore insert below
        // is the actual safety net under concurrency.
        if self
            .transactions
            .exists_by_idempotency(transaction_uuid)
            .await
            .map_err(|err| AppError::storage(FAILED_TO_CREATE_TRANSACTION, err))?
        {
            return Err(AppError::Duplicate {
                title: FAILED_TO_CREATE_TRANSACTION,
            });
        }

        // validate() already rejected unparseable values
        let Some(account_uuid) = request.account_uuid() else {
            return Err(AppError::Validation {
                title: FAILED_TO_CREATE_TRANSACTION,
                errors: request.validate(),
            });
        };

        // The referenced account must exist at creation time.
        if let Err(err) = self.accounts.get(account_uuid).await {
            return Err(match err {
                StoreError::NotFound => AppError::UnknownAccount(account_uuid),
                err => AppError::storage(FAILED_TO_CREATE_TRANSACTION, err),
            });
        }

        let operation_type = match self.operation_types.get(request.operation_type_id).await {
            Ok(operation_type) => operation_type,
            Err(StoreError::NotFound) => {
                return Err(AppError::UnknownOperationType(request.operation_type_id))
            }
            Err(err) => return Err(AppError::storage(FAILED_TO_CREATE_TRANSACTION, err)),
        };

        let transaction = Transaction {
            uuid: transaction_uuid,
            account_uuid,
            operation_type_id: request.operation_type_id,
            amount: resolve_amount(request.amount, operation_type.is_credit),
            event_date: Utc::now(),
        };

        self.transactions
            .create(&transaction)
            .await
            .map_err(|err| AppError::storage(FAILED_TO_CREATE_TRANSACTION, err))?;

        Ok(transaction_uuid)
    }
}
