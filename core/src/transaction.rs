//! Staking transaction draft and its validation status.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegate {
    pub vote_account: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StakeModel {
    #[serde(rename = "stake.createAccount")]
    CreateAccount { delegate: Delegate },
}

impl Default for StakeModel {
    fn default() -> Self {
        Self::CreateAccount {
            delegate: Delegate::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub family: String,
    pub amount: u64,
    pub use_all_amount: bool,
    pub model: StakeModel,
    pub fees: Option<u64>,
}

impl TransactionDraft {
    /// Vote account the stake is delegated to; empty until a validator is chosen.
    pub fn vote_account(&self) -> &str {
        match &self.model {
            StakeModel::CreateAccount { delegate } => &delegate.vote_account,
        }
    }
}

/// Partial update applied through the bridge. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub amount: Option<u64>,
    pub use_all_amount: Option<bool>,
    pub vote_account: Option<String>,
}

impl TransactionPatch {
    pub fn vote_account(address: &str) -> Self {
        Self {
            vote_account: Some(address.to_string()),
            ..Default::default()
        }
    }

    pub fn amount(amount: u64) -> Self {
        Self {
            amount: Some(amount),
            use_all_amount: Some(false),
            ..Default::default()
        }
    }

    pub fn use_all_amount(enabled: bool) -> Self {
        Self {
            use_all_amount: Some(enabled),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusField {
    Validator,
    Amount,
    Fees,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionStatus {
    pub errors: BTreeMap<StatusField, String>,
    pub warnings: BTreeMap<StatusField, String>,
    pub estimated_fees: u64,
    pub amount: u64,
    pub total_spent: u64,
}

impl TransactionStatus {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error(&self, field: StatusField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}
