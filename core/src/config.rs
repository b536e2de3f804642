use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StakingError};
use crate::explorer::Network;
use crate::validators::PAGE_SIZE;

/// Fee estimate used by the local bridge, in nanos.
pub const DEFAULT_ESTIMATED_FEE: u64 = 2_000_000;

/// User settings, stored as JSON at `data_dir()/staking.json`.
///
/// Every field has a default so a partial (or absent) file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub network: Network,
    /// Explorer base URL override (custom networks).
    pub explorer_url: Option<String>,
    /// Validator pinned to the top of the selection list.
    pub featured_validator: Option<String>,
    pub estimated_fee: u64,
    pub page_size: usize,
    pub locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            network: Network::Testnet,
            explorer_url: None,
            featured_validator: None,
            estimated_fee: DEFAULT_ESTIMATED_FEE,
            page_size: PAGE_SIZE,
            locale: "en".into(),
        }
    }
}

impl Settings {
    pub fn default_path() -> Result<PathBuf> {
        Ok(crate::data_dir()?.join("staking.json"))
    }

    pub fn load() -> Result<Self> {
        Self::load_or_init(&Self::default_path()?)
    }

    /// Load `path`, writing the defaults there first if it does not exist yet.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let settings = Self::default();
        settings.save_to(path)?;
        tracing::info!(path = %path.display(), "wrote default settings");
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut settings: Self = serde_json::from_str(&data)
            .map_err(|e| StakingError::Storage(format!("Invalid settings file: {e}")))?;
        if settings.page_size == 0 {
            settings.page_size = PAGE_SIZE;
        }
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create data directory")?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StakingError::Storage(format!("Failed to serialize settings: {e}")))?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Apply command-line flags (`--mainnet`, `--devnet`, `--testnet`).
    pub fn apply_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            match arg.as_ref() {
                "--mainnet" => self.network = Network::Mainnet,
                "--devnet" => self.network = Network::Devnet,
                "--testnet" => self.network = Network::Testnet,
                _ => {}
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("staking.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.page_size, 20);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staking.json");
        std::fs::write(&path, r#"{"network":"mainnet","featured_validator":"0xfeed"}"#).unwrap();
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.network, Network::Mainnet);
        assert_eq!(settings.featured_validator.as_deref(), Some("0xfeed"));
        assert_eq!(settings.estimated_fee, DEFAULT_ESTIMATED_FEE);
    }

    #[test]
    fn zero_page_size_is_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staking.json");
        std::fs::write(&path, r#"{"page_size":0}"#).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap().page_size, PAGE_SIZE);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("staking.json");
        let settings = Settings {
            network: Network::Devnet,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("staking.json");
        let settings = Settings::load_or_init(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());

        let mut edited = settings.clone();
        edited.network = Network::Mainnet;
        edited.save_to(&path).unwrap();
        assert_eq!(Settings::load_or_init(&path).unwrap().network, Network::Mainnet);
    }

    #[test]
    fn last_network_flag_wins() {
        let settings = Settings::default().apply_args(["jota-staking", "--mainnet", "--devnet"]);
        assert_eq!(settings.network, Network::Devnet);
    }
}
