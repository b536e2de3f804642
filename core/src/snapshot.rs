use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::account::Currency;
use crate::error::{Result, StakingError};
use crate::ports::ValidatorSource;
use crate::provider::{ExchangeRate, ProviderStatus};
use crate::validators::{featured_first, Validator};

/// Locally cached market data: validator directory plus the latest swap quote.
///
/// Path: `data_dir()/market.json`. A missing file is an empty snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Currency id the validator list belongs to.
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub featured_validator: Option<String>,
    #[serde(default)]
    pub exchange_rate: Option<ExchangeRate>,
    #[serde(default)]
    pub kyc_status: Option<ProviderStatus>,
}

fn default_currency() -> String {
    "iota".into()
}

impl Default for MarketSnapshot {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            validators: Vec::new(),
            featured_validator: None,
            exchange_rate: None,
            kyc_status: None,
        }
    }
}

impl MarketSnapshot {
    pub fn default_path() -> Result<PathBuf> {
        Ok(crate::data_dir()?.join("market.json"))
    }

    pub fn open() -> Result<Self> {
        Self::open_at(&Self::default_path()?)
    }

    pub fn open_at(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no market snapshot, starting empty");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let snapshot: Self = serde_json::from_str(&data)
            .map_err(|e| StakingError::Storage(format!("Invalid market snapshot: {e}")))?;
        tracing::info!(validators = snapshot.validators.len(), "market snapshot loaded");
        Ok(snapshot)
    }

    /// Prefer the configured featured validator over the one in the file.
    pub fn with_featured(mut self, featured: Option<String>) -> Self {
        if featured.is_some() {
            self.featured_validator = featured;
        }
        self
    }
}

impl ValidatorSource for MarketSnapshot {
    fn validators(&self, currency: &Currency) -> Vec<Validator> {
        if currency.id != self.currency {
            return Vec::new();
        }
        featured_first(self.validators.clone(), self.featured_validator.as_deref())
    }
}
