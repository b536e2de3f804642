use jota_staking::{Account, MarketSnapshot, Operation, StepId};

// -- Messages --

#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Market data (validators, swap quote)
    RefreshMarket,
    MarketLoaded(Result<MarketSnapshot, String>),

    // Delegation modal
    OpenDelegation(String),
    CloseDelegation,
    Continue,
    Back,
    GoToStep(StepId),

    // Validator step
    SearchChanged(String),
    ValidatorsScrolled(f32),
    SelectValidator(String),
    OpenValidatorLink(String),

    // Amount step
    AmountChanged(String),
    UseMaxToggled(bool),

    // Device step
    ApproveOnDevice,
    RejectOnDevice,
    BroadcastCompleted(Result<Operation, String>),
    PendingOperationSaved(Result<Account, String>),

    // Confirmation step
    Retry,
    OpenExplorer(String),
    CopyHash(String),
}
