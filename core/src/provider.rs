//! Swap provider summary: which provider quoted the rate and where the
//! user stands with its KYC check.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::icons::Glyph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeMethod {
    Fixed,
    Float,
}

/// Quote from a swap provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub provider: String,
    pub rate: f64,
    pub from_ticker: String,
    pub to_ticker: String,
    pub trade_method: TradeMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        })
    }
}

impl ProviderStatus {
    /// Catalogue key of the badge label.
    pub fn label_key(self) -> String {
        format!("swap2.form.providers.kyc.status.{self}")
    }
}

/// Semantic colours; the view layer maps them to its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Warning,
    MarketUp,
    AlertRed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTheme {
    pub color: ThemeColor,
    pub icon: Glyph,
}

pub fn status_theme(status: ProviderStatus) -> StatusTheme {
    match status {
        ProviderStatus::Pending => StatusTheme {
            color: ThemeColor::Warning,
            icon: Glyph::Clock,
        },
        ProviderStatus::Approved => StatusTheme {
            color: ThemeColor::MarketUp,
            icon: Glyph::CheckCircle,
        },
        ProviderStatus::Rejected => StatusTheme {
            color: ThemeColor::AlertRed,
            icon: Glyph::ExclamationCircle,
        },
    }
}

/// Known provider logos, keyed by lowercase provider id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderIcon {
    Changelly,
    Wyre,
    Ftx,
}

impl ProviderIcon {
    pub fn for_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "changelly" => Some(Self::Changelly),
            "wyre" => Some(Self::Wyre),
            "ftx" => Some(Self::Ftx),
            _ => None,
        }
    }

    /// Short mark drawn inside the logo tile.
    pub fn mark(self) -> &'static str {
        match self {
            Self::Changelly => "C",
            Self::Wyre => "W",
            Self::Ftx => "FTX",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub status: ProviderStatus,
    pub theme: StatusTheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSummary {
    /// No quote yet; rendered as a dash.
    Placeholder,
    Provider {
        /// Provider name with its first letter capitalised.
        name: String,
        icon: Option<ProviderIcon>,
        badge: Option<StatusBadge>,
    },
}

impl ProviderSummary {
    pub fn derive(rate: Option<&ExchangeRate>, status: Option<ProviderStatus>) -> Self {
        let Some(rate) = rate else {
            return Self::Placeholder;
        };
        Self::Provider {
            name: capitalize(&rate.provider),
            icon: ProviderIcon::for_name(&rate.provider),
            badge: status.map(|status| StatusBadge {
                status,
                theme: status_theme(status),
            }),
        }
    }

    pub fn badge(&self) -> Option<&StatusBadge> {
        match self {
            Self::Placeholder => None,
            Self::Provider { badge, .. } => badge.as_ref(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
