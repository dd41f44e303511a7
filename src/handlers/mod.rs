//! Creation handlers
//!
//! Orchestrate the idempotent creation protocol for each resource type:
//! validate, derive the identifier, run the idempotency guard, check
//! cross-resource references, persist.

mod account_handler;
mod transaction_handler;


pub use account_handler::CreateAccountHandler;
pub use transaction_handler::CreateTransactionHandler;

pub(crate) const FAILED_TO_CREATE_ACCOUNT: &str = "failed to create account";
pub(crate) const FAILED_TO_CREATE_TRANSACTION: &str = "failed to create transaction";
