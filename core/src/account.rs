//! Account records and their operation history.

use serde::{Deserialize, Serialize};

use crate::explorer::Network;
use crate::units::Unit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub unit: Unit,
    #[serde(default)]
    pub network: Network,
}

impl Currency {
    pub fn iota(network: Network) -> Self {
        Self {
            id: "iota".into(),
            name: "IOTA".into(),
            ticker: "IOTA".into(),
            unit: Unit::iota(),
            network,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StakeState {
    Active,
    Activating,
    Deactivating,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeSummary {
    pub stake_account: String,
    pub vote_account: String,
    pub amount: u64,
    pub state: StakeState,
}

/// Staking extension data. Accounts without it cannot open the delegation flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingResources {
    #[serde(default)]
    pub stakes: Vec<StakeSummary>,
    /// Balance held back to cover future unstake fees.
    #[serde(default)]
    pub unstake_reserve: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationKind {
    In,
    Out,
    Delegate,
    Undelegate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub id: String,
    pub hash: String,
    pub account_id: String,
    pub kind: OperationKind,
    pub value: u64,
    pub fee: u64,
    #[serde(default)]
    pub senders: Vec<String>,
    #[serde(default)]
    pub recipients: Vec<String>,
    /// Unix seconds.
    pub date: i64,
    /// `None` until the operation is confirmed on-chain.
    #[serde(default)]
    pub block_height: Option<u64>,
}

impl Operation {
    pub fn is_pending(&self) -> bool {
        self.block_height.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub address: String,
    pub currency: Currency,
    pub balance: u64,
    #[serde(default)]
    pub staking: Option<StakingResources>,
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub pending_operations: Vec<Operation>,
}

impl Account {
    pub fn unit(&self) -> &Unit {
        &self.currency.unit
    }

    /// Balance available for new stakes.
    pub fn spendable_balance(&self) -> u64 {
        let reserve = self.staking.as_ref().map_or(0, |s| s.unstake_reserve);
        self.balance.saturating_sub(reserve)
    }

    /// Total amount currently delegated across all stake accounts.
    pub fn delegated_balance(&self) -> u64 {
        self.staking
            .as_ref()
            .map(|s| s.stakes.iter().fold(0u64, |acc, st| acc.saturating_add(st.amount)))
            .unwrap_or(0)
    }
}

/// Return a copy of `account` with `operation` recorded as pending.
///
/// The newest pending operation comes first. A pending operation with the
/// same hash is replaced rather than duplicated.
#[must_use]
pub fn add_pending_operation(account: &Account, operation: Operation) -> Account {
    let mut next = account.clone();
    next.pending_operations
        .retain(|op| op.hash != operation.hash);
    next.pending_operations.insert(0, operation);
    next
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub(crate) fn staking_account() -> Account {
        Account {
            id: "iota:0".into(),
            name: "Main".into(),
            address: "0xacc0".into(),
            currency: Currency::iota(Network::Testnet),
            balance: 10_000_000_000,
            staking: Some(StakingResources {
                stakes: Vec::new(),
                unstake_reserve: 1_000_000,
            }),
            operations: Vec::new(),
            pending_operations: Vec::new(),
        }
    }

    pub(crate) fn operation(hash: &str) -> Operation {
        Operation {
            id: format!("iota:0-{hash}-DELEGATE"),
            hash: hash.into(),
            account_id: "iota:0".into(),
            kind: OperationKind::Delegate,
            value: 1_000_000_000,
            fee: 2_000_000,
            senders: vec!["0xacc0".into()],
            recipients: vec!["0xval1".into()],
            date: 1_700_000_000,
            block_height: None,
        }
    }
}
