//! Local bridge: keeps the staking draft and validates its fields.
//!
//! It never builds or signs a chain transaction; the fee is the configured
//! estimate rather than a dry-run result.

use crate::account::Account;
use crate::error::{Result, StakingError};
use crate::ports::AccountBridge;
use crate::transaction::{
    Delegate, StakeModel, StatusField, TransactionDraft, TransactionPatch, TransactionStatus,
};

pub struct LocalStakeBridge {
    estimated_fee: u64,
}

impl LocalStakeBridge {
    pub fn new(estimated_fee: u64) -> Self {
        Self { estimated_fee }
    }
}

impl AccountBridge for LocalStakeBridge {
    fn create_transaction(&self, _account: &Account) -> TransactionDraft {
        TransactionDraft {
            family: "stake".into(),
            amount: 0,
            use_all_amount: false,
            model: StakeModel::default(),
            fees: Some(self.estimated_fee),
        }
    }

    fn update_transaction(
        &self,
        tx: &TransactionDraft,
        patch: TransactionPatch,
    ) -> TransactionDraft {
        let mut next = tx.clone();
        if let Some(amount) = patch.amount {
            next.amount = amount;
        }
        if let Some(all) = patch.use_all_amount {
            next.use_all_amount = all;
        }
        if let Some(vote_account) = patch.vote_account {
            next.model = StakeModel::CreateAccount {
                delegate: Delegate { vote_account },
            };
        }
        next
    }

    fn transaction_status(
        &self,
        account: &Account,
        tx: &TransactionDraft,
    ) -> Result<TransactionStatus> {
        let vote_account = tx.vote_account();
        if !vote_account.is_empty() && !is_hex_address(vote_account) {
            return Err(StakingError::Bridge(format!(
                "Invalid validator address '{vote_account}'"
            )));
        }

        let mut status = TransactionStatus::default();
        let fees = tx.fees.unwrap_or(self.estimated_fee);
        let spendable = account.spendable_balance();
        status.estimated_fees = fees;

        if vote_account.is_empty() {
            status
                .errors
                .insert(StatusField::Validator, "Select a validator".into());
        }

        let amount = if tx.use_all_amount {
            spendable.saturating_sub(fees)
        } else {
            tx.amount
        };
        status.amount = amount;
        status.total_spent = amount.saturating_add(fees);

        if spendable < fees {
            status
                .errors
                .insert(StatusField::Fees, "Not enough balance to pay network fees".into());
        }
        if amount == 0 {
            status
                .errors
                .insert(StatusField::Amount, "Amount is required".into());
        } else if status.total_spent > spendable {
            status
                .errors
                .insert(StatusField::Amount, "Not enough balance".into());
        }
        if tx.use_all_amount && amount > 0 {
            status.warnings.insert(
                StatusField::Amount,
                "The whole spendable balance will be staked".into(),
            );
        }
        Ok(status)
    }
}

/// `0x` followed by 1 to 64 hex digits.
fn is_hex_address(s: &str) -> bool {
    s.strip_prefix("0x")
        .is_some_and(|hex| !hex.is_empty() && hex.len() <= 64 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
