use std::path::PathBuf;

use anyhow::Context;

use crate::account::Account;
use crate::error::{Result, StakingError};
use crate::ports::AccountUpdater;

/// Account records stored as unencrypted JSON.
///
/// Path: `data_dir()/accounts.json`
pub struct AccountStore {
    path: PathBuf,
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Open (or create) the store at the default data directory.
    pub fn open() -> Result<Self> {
        let path = crate::data_dir()?.join("accounts.json");
        Self::open_at(path)
    }

    /// Open (or create) the store at a specific path.
    pub fn open_at(path: PathBuf) -> Result<Self> {
        let accounts = if path.exists() {
            let data = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&data)
                .map_err(|e| StakingError::Storage(format!("Invalid accounts file: {e}")))?
        } else {
            Vec::new()
        };
        Ok(Self { path, accounts })
    }

    pub fn list(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create data directory")?;
        }
        let json = serde_json::to_string_pretty(&self.accounts)
            .map_err(|e| StakingError::Storage(format!("Failed to serialize accounts: {e}")))?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

impl AccountUpdater for AccountStore {
    fn update_account(&mut self, id: &str, f: &dyn Fn(&Account) -> Account) -> Result<()> {
        let slot = self
            .accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StakingError::AccountNotFound(id.to_string()))?;
        let next = f(slot);
        *slot = next;
        tracing::debug!(account = id, "account updated");
        self.save()
    }
}
