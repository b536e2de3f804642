use serde::{Deserialize, Serialize};

/// Network the account lives on; selects the explorer query suffix.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Testnet,
    Mainnet,
    Devnet,
    Custom,
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Testnet => write!(f, "testnet"),
            Network::Mainnet => write!(f, "mainnet"),
            Network::Devnet => write!(f, "devnet"),
            Network::Custom => write!(f, "custom"),
        }
    }
}

const EXPLORER_BASE: &str = "https://explorer.iota.org";

/// Block explorer URL builder for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerView {
    base: String,
    query: &'static str,
}

impl ExplorerView {
    pub fn for_network(network: Network) -> Self {
        let query = match network {
            Network::Mainnet => "",
            Network::Testnet | Network::Custom => "?network=testnet",
            Network::Devnet => "?network=devnet",
        };
        Self {
            base: EXPLORER_BASE.to_string(),
            query,
        }
    }

    /// Point at a self-hosted explorer instead of the public one.
    pub fn with_base(mut self, base: &str) -> Self {
        self.base = base.trim_end_matches('/').to_string();
        self
    }

    /// Address page URL, or `None` for an empty address.
    pub fn address_url(&self, address: &str) -> Option<String> {
        if address.is_empty() {
            return None;
        }
        Some(format!("{}/address/{address}{}", self.base, self.query))
    }

    /// Transaction page URL, or `None` for an empty digest.
    pub fn transaction_url(&self, digest: &str) -> Option<String> {
        if digest.is_empty() {
            return None;
        }
        Some(format!("{}/txblock/{digest}{}", self.base, self.query))
    }
}
