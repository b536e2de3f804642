//! Collaborator seams consumed by the delegation flow.
//!
//! Transaction building, signing, broadcasting and validator discovery live
//! outside this crate; the wizard only talks to them through these traits.

use crate::account::{Account, Currency, Operation};
use crate::error::{Result, StakingError};
use crate::transaction::{TransactionDraft, TransactionPatch, TransactionStatus};
use crate::validators::Validator;

/// Translates generic account/transaction operations into chain-specific drafts.
pub trait AccountBridge: Send + Sync {
    fn create_transaction(&self, account: &Account) -> TransactionDraft;

    fn update_transaction(&self, tx: &TransactionDraft, patch: TransactionPatch)
        -> TransactionDraft;

    /// Field-level problems land in the status; `Err` means the draft could
    /// not be prepared at all.
    fn transaction_status(&self, account: &Account, tx: &TransactionDraft)
        -> Result<TransactionStatus>;
}

/// Applies a pure transformation to a stored account.
pub trait AccountUpdater {
    fn update_account(&mut self, id: &str, f: &dyn Fn(&Account) -> Account) -> Result<()>;
}

/// Read-only validator directory for a currency.
pub trait ValidatorSource: Send + Sync {
    fn validators(&self, currency: &Currency) -> Vec<Validator>;
}

/// Submits a signed draft and returns the optimistic (pending) operation.
pub trait Broadcaster: Send + Sync {
    fn broadcast(&self, account: &Account, tx: &TransactionDraft) -> Result<Operation>;
}

/// Fire-and-forget analytics events.
pub trait Analytics: Send + Sync {
    fn track(&self, event: &str, properties: serde_json::Value);
}

/// Sink for errors that must not go unnoticed.
pub trait ErrorReporter: Send + Sync {
    fn critical(&self, error: &StakingError);
}
