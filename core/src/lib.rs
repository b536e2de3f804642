use std::path::PathBuf;

use anyhow::Context;

pub mod account;
pub mod analytics;
pub mod bridge;
pub mod broadcast;
pub mod config;
pub mod error;
pub mod explorer;
pub mod i18n;
pub mod icons;
pub mod ports;
pub mod provider;
pub mod snapshot;
pub mod store;
pub mod transaction;
pub mod units;
pub mod validators;
pub mod wizard;

pub use account::{add_pending_operation, Account, Currency, Operation, OperationKind};
pub use analytics::{TracingAnalytics, TracingReporter};
pub use bridge::LocalStakeBridge;
pub use broadcast::OfflineBroadcaster;
pub use config::Settings;
pub use error::StakingError;
pub use explorer::{ExplorerView, Network};
pub use i18n::Catalog;
pub use icons::{render_svg, Glyph, IconColor, IconProps};
pub use ports::{AccountBridge, AccountUpdater, Analytics, Broadcaster, ErrorReporter, ValidatorSource};
pub use provider::{ExchangeRate, ProviderStatus, ProviderSummary};
pub use snapshot::MarketSnapshot;
pub use store::AccountStore;
pub use transaction::{TransactionDraft, TransactionPatch, TransactionStatus};
pub use units::Unit;
pub use validators::{Validator, ValidatorRow};
pub use wizard::{DelegationWizard, Effect, StepId, Transition, WizardDeps, WizardEvent};

/// XDG-compliant data directory for account, market and settings files.
/// Linux: `~/.local/share/jota/`, macOS: `~/Library/Application Support/jota/`
pub fn data_dir() -> anyhow::Result<PathBuf> {
    let dir = dirs::data_dir()
        .context("Cannot determine data directory")?
        .join("jota");
    Ok(dir)
}
