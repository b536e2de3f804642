//! Domain error type for the delegation flow.

use thiserror::Error;

/// Typed error enum for staking operations, allowing the wizard to tell a
/// benign device refusal apart from failures that need to be reported.
#[derive(Debug, Error)]
pub enum StakingError {
    /// The account carries no staking extension data.
    #[error("Account has no staking resources")]
    MissingStakingResources,

    /// Transaction preparation or validation failure raised by the bridge.
    #[error("{0}")]
    Bridge(String),

    /// The user rejected the operation on the signing device.
    #[error("Operation rejected on device")]
    UserRefusedOnDevice,

    /// Signing device communication error.
    #[error("{0}")]
    Device(String),

    /// Transaction broadcast failure.
    #[error("{0}")]
    Broadcast(String),

    /// Account or snapshot store error (file I/O, JSON).
    #[error("{0}")]
    Storage(String),

    /// No account with the given id exists in the store.
    #[error("Account '{0}' not found")]
    AccountNotFound(String),

    /// Invalid amount input.
    #[error("{0}")]
    InvalidAmount(String),

    /// The wizard received an event its current step cannot handle.
    #[error("Cannot apply '{event}' on step '{from}'")]
    InvalidTransition { from: String, event: String },

    /// Unexpected error from internal subsystems.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StakingError {
    /// User cancellation on the device is expected and never logged as critical.
    pub fn is_user_refusal(&self) -> bool {
        matches!(self, Self::UserRefusedOnDevice)
    }
}

/// Alias for `std::result::Result<T, StakingError>`.
pub type Result<T> = std::result::Result<T, StakingError>;
