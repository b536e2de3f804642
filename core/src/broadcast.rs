use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::account::{Account, Operation, OperationKind};
use crate::error::{Result, StakingError};
use crate::ports::Broadcaster;
use crate::transaction::TransactionDraft;

/// Records the signed draft as an optimistic operation without reaching a node.
///
/// The digest is local and unique per process; the operation stays pending
/// until a real sync replaces it.
#[derive(Debug, Default)]
pub struct OfflineBroadcaster {
    sequence: AtomicU64,
}

impl OfflineBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_digest(&self) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("0x{nanos:016x}{seq:08x}")
    }
}

impl Broadcaster for OfflineBroadcaster {
    fn broadcast(&self, account: &Account, tx: &TransactionDraft) -> Result<Operation> {
        let vote_account = tx.vote_account();
        if vote_account.is_empty() {
            return Err(StakingError::Broadcast("No validator selected".into()));
        }
        let fee = tx.fees.unwrap_or(0);
        let value = if tx.use_all_amount {
            account.spendable_balance().saturating_sub(fee)
        } else {
            tx.amount
        };
        if value == 0 {
            return Err(StakingError::Broadcast("Nothing to delegate".into()));
        }

        let hash = self.next_digest();
        let date = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        tracing::info!(account = %account.id, validator = vote_account, value, "delegation broadcast");

        Ok(Operation {
            id: format!("{}-{hash}-DELEGATE", account.id),
            hash,
            account_id: account.id.clone(),
            kind: OperationKind::Delegate,
            value,
            fee,
            senders: vec![account.address.clone()],
            recipients: vec![vote_account.to_string()],
            date,
            block_height: None,
        })
    }
}
