//! Delegation wizard: a four-step state machine over a staking draft.
//!
//! The wizard owns the transient flow state (active step, draft, errors,
//! signed flag, optimistic operation). Side effects on the account store are
//! handed back to the caller as [`Effect`]s.

use std::fmt;
use std::sync::Arc;

use crate::account::{add_pending_operation, Account, Operation};
use crate::error::{Result, StakingError};
use crate::ports::{AccountBridge, AccountUpdater, Analytics, ErrorReporter};
use crate::transaction::{StatusField, TransactionDraft, TransactionPatch, TransactionStatus};
use crate::validators::Validator;

pub const CLOSE_EVENT: &str = "CloseModalDelegation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    Validator,
    Amount,
    ConnectDevice,
    Confirmation,
}

impl StepId {
    pub const ALL: [StepId; 4] = [
        StepId::Validator,
        StepId::Amount,
        StepId::ConnectDevice,
        StepId::Confirmation,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Validator => 0,
            Self::Amount => 1,
            Self::ConnectDevice => 2,
            Self::Confirmation => 3,
        }
    }

    /// Catalogue key of the breadcrumb label.
    pub fn title_key(self) -> &'static str {
        match self {
            Self::Validator => "delegation.flow.steps.validator.title",
            Self::Amount => "delegation.flow.steps.amount.title",
            Self::ConnectDevice => "common.connectDevice.title",
            Self::Confirmation => "common.confirmation.title",
        }
    }

    /// Target of the footer "back" button.
    pub fn back(self) -> Option<StepId> {
        match self {
            Self::Amount => Some(Self::Validator),
            Self::ConnectDevice => Some(Self::Amount),
            Self::Validator | Self::Confirmation => None,
        }
    }

    /// Steps that manage their own scrolling (the validator list, the amount form).
    pub fn no_scroll(self) -> bool {
        matches!(self, Self::Validator | Self::Amount)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validator => write!(f, "validator"),
            Self::Amount => write!(f, "amount"),
            Self::ConnectDevice => write!(f, "connectDevice"),
            Self::Confirmation => write!(f, "confirmation"),
        }
    }
}

#[derive(Debug)]
pub enum WizardEvent {
    /// Footer "continue" on the current step.
    Continue,
    /// Footer "back" on the current step.
    Back,
    /// Breadcrumb jump to an earlier step.
    GoTo(StepId),
    /// The signer approved the draft.
    DeviceSigned,
    OperationBroadcasted(Operation),
    TransactionFailed(StakingError),
    Retry,
    Close,
}

impl WizardEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Back => "back",
            Self::GoTo(_) => "goTo",
            Self::DeviceSigned => "deviceSigned",
            Self::OperationBroadcasted(_) => "operationBroadcasted",
            Self::TransactionFailed(_) => "transactionFailed",
            Self::Retry => "retry",
            Self::Close => "close",
        }
    }
}

/// Work the caller must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    AddPendingOperation {
        account_id: String,
        operation: Operation,
    },
    CloseModal,
}

impl Effect {
    /// Apply a store-side effect. `CloseModal` is left to the view layer.
    pub fn apply(&self, store: &mut dyn AccountUpdater) -> Result<()> {
        match self {
            Self::AddPendingOperation {
                account_id,
                operation,
            } => store.update_account(account_id, &|account: &Account| {
                add_pending_operation(account, operation.clone())
            }),
            Self::CloseModal => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: StepId,
    pub to: StepId,
    pub effect: Option<Effect>,
}

/// Collaborators the wizard calls into.
#[derive(Clone)]
pub struct WizardDeps {
    pub bridge: Arc<dyn AccountBridge>,
    pub analytics: Arc<dyn Analytics>,
    pub reporter: Arc<dyn ErrorReporter>,
}

pub struct DelegationWizard {
    deps: WizardDeps,
    account: Account,
    step: StepId,
    transaction: TransactionDraft,
    status: TransactionStatus,
    bridge_error: Option<StakingError>,
    transaction_error: Option<StakingError>,
    signed: bool,
    optimistic_operation: Option<Operation>,
    closed: bool,
}

impl fmt::Debug for DelegationWizard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegationWizard")
            .field("account", &self.account.id)
            .field("step", &self.step)
            .field("signed", &self.signed)
            .finish_non_exhaustive()
    }
}

impl DelegationWizard {
    /// Open the flow for `account`, seeding an empty delegation draft.
    ///
    /// Fails with [`StakingError::MissingStakingResources`] when the account
    /// carries no staking extension data.
    pub fn open(account: Account, deps: WizardDeps) -> Result<Self> {
        if account.staking.is_none() {
            return Err(StakingError::MissingStakingResources);
        }

        let bridge = deps.bridge.clone();
        let transaction = bridge.update_transaction(
            &bridge.create_transaction(&account),
            TransactionPatch::vote_account(""),
        );

        let mut wizard = Self {
            deps,
            account,
            step: StepId::Validator,
            transaction,
            status: TransactionStatus::default(),
            bridge_error: None,
            transaction_error: None,
            signed: false,
            optimistic_operation: None,
            closed: false,
        };
        wizard.refresh_status();
        tracing::debug!(account = %wizard.account.id, "delegation flow opened");
        Ok(wizard)
    }

    pub fn step(&self) -> StepId {
        self.step
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn transaction(&self) -> &TransactionDraft {
        &self.transaction
    }

    pub fn status(&self) -> &TransactionStatus {
        &self.status
    }

    pub fn signed(&self) -> bool {
        self.signed
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn optimistic_operation(&self) -> Option<&Operation> {
        self.optimistic_operation.as_ref()
    }

    pub fn transaction_error(&self) -> Option<&StakingError> {
        self.transaction_error.as_ref()
    }

    pub fn bridge_error(&self) -> Option<&StakingError> {
        self.bridge_error.as_ref()
    }

    /// Transaction errors take precedence over bridge errors.
    pub fn error(&self) -> Option<&StakingError> {
        self.transaction_error.as_ref().or(self.bridge_error.as_ref())
    }

    /// Steps to flag in the breadcrumb.
    pub fn error_steps(&self) -> Vec<StepId> {
        if self.transaction_error.is_some() {
            vec![StepId::ConnectDevice]
        } else if self.bridge_error.is_some() {
            vec![StepId::Validator]
        } else {
            Vec::new()
        }
    }

    pub fn hide_breadcrumb(&self) -> bool {
        self.error().is_some() && self.step == StepId::Validator
    }

    /// Vote account of the chosen validator, if any.
    pub fn chosen_validator(&self) -> Option<&str> {
        Some(self.transaction.vote_account()).filter(|a| !a.is_empty())
    }

    /// Whether the footer "continue" button is enabled on the current step.
    pub fn can_continue(&self) -> bool {
        match self.step {
            StepId::Validator => {
                self.chosen_validator().is_some()
                    && self.bridge_error.is_none()
                    && self.status.error(StatusField::Validator).is_none()
            }
            StepId::Amount => self.bridge_error.is_none() && !self.status.has_errors(),
            StepId::ConnectDevice | StepId::Confirmation => false,
        }
    }

    /// Whether the draft may be handed to the signer: a validator is chosen
    /// and neither the bridge nor the status reports a problem.
    pub fn can_sign(&self) -> bool {
        self.chosen_validator().is_some()
            && self.bridge_error.is_none()
            && !self.status.has_errors()
    }

    pub fn select_validator(&mut self, validator: &Validator) -> Result<()> {
        self.require_step(StepId::Validator, "selectValidator")?;
        self.patch(TransactionPatch::vote_account(&validator.vote_account));
        Ok(())
    }

    pub fn set_amount(&mut self, amount: u64) -> Result<()> {
        self.require_step(StepId::Amount, "setAmount")?;
        self.patch(TransactionPatch::amount(amount));
        Ok(())
    }

    pub fn set_use_all_amount(&mut self, enabled: bool) -> Result<()> {
        self.require_step(StepId::Amount, "useAllAmount")?;
        self.patch(TransactionPatch::use_all_amount(enabled));
        Ok(())
    }

    /// Drive the state machine. Illegal events leave the state untouched.
    pub fn handle(&mut self, event: WizardEvent) -> Result<Transition> {
        let from = self.step;
        if self.closed {
            return Err(self.invalid(event.name()));
        }

        let mut effect = None;
        match event {
            WizardEvent::Continue => {
                if !self.can_continue() {
                    return Err(self.invalid("continue"));
                }
                self.step = match from {
                    StepId::Validator => StepId::Amount,
                    _ => StepId::ConnectDevice,
                };
            }
            WizardEvent::Back => {
                let target = from.back().ok_or_else(|| self.invalid("back"))?;
                self.step = target;
            }
            WizardEvent::GoTo(target) => {
                if from == StepId::Confirmation || target.index() >= from.index() {
                    return Err(self.invalid("goTo"));
                }
                self.step = target;
            }
            WizardEvent::DeviceSigned => {
                self.require_step(StepId::ConnectDevice, "deviceSigned")?;
                if !self.can_sign() {
                    return Err(self.invalid("deviceSigned"));
                }
                self.signed = true;
            }
            WizardEvent::OperationBroadcasted(operation) => {
                if from != StepId::ConnectDevice
                    || !self.signed
                    || self.optimistic_operation.is_some()
                {
                    return Err(self.invalid("operationBroadcasted"));
                }
                self.account = add_pending_operation(&self.account, operation.clone());
                effect = Some(Effect::AddPendingOperation {
                    account_id: self.account.id.clone(),
                    operation: operation.clone(),
                });
                self.optimistic_operation = Some(operation);
                self.transaction_error = None;
                self.step = StepId::Confirmation;
            }
            WizardEvent::TransactionFailed(error) => {
                self.require_step(StepId::ConnectDevice, "transactionFailed")?;
                if !error.is_user_refusal() {
                    self.deps.reporter.critical(&error);
                }
                self.transaction_error = Some(error);
                self.step = StepId::Confirmation;
            }
            WizardEvent::Retry => {
                if self.error().is_none() {
                    return Err(self.invalid("retry"));
                }
                self.transaction_error = None;
                self.signed = false;
                self.step = StepId::ConnectDevice;
            }
            WizardEvent::Close => {
                self.emit_close();
                effect = Some(Effect::CloseModal);
            }
        }

        tracing::debug!(from = %from, to = %self.step, "delegation step transition");
        Ok(Transition {
            from,
            to: self.step,
            effect,
        })
    }

    fn patch(&mut self, patch: TransactionPatch) {
        self.transaction = self.deps.bridge.update_transaction(&self.transaction, patch);
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        match self
            .deps
            .bridge
            .transaction_status(&self.account, &self.transaction)
        {
            Ok(status) => {
                self.status = status;
                self.bridge_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "bridge failed to prepare delegation");
                self.status = TransactionStatus::default();
                self.bridge_error = Some(e);
            }
        }
    }

    fn require_step(&self, expected: StepId, event: &str) -> Result<()> {
        if self.closed || self.step != expected {
            return Err(self.invalid(event));
        }
        Ok(())
    }

    fn invalid(&self, event: &str) -> StakingError {
        StakingError::InvalidTransition {
            from: self.step.to_string(),
            event: event.to_string(),
        }
    }

    fn emit_close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.deps
            .analytics
            .track(CLOSE_EVENT, serde_json::json!({ "step": self.step.to_string() }));
    }
}

impl Drop for DelegationWizard {
    fn drop(&mut self) {
        self.emit_close();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::account::fixtures::{operation, staking_account};
    use crate::bridge::LocalStakeBridge;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
        critical: Mutex<Vec<String>>,
    }

    impl Analytics for Recorder {
        fn track(&self, event: &str, _properties: serde_json::Value) {
            self.events.lock().unwrap().push(event.to_string());
        }
    }

    impl ErrorReporter for Recorder {
        fn critical(&self, error: &StakingError) {
            self.critical.lock().unwrap().push(error.to_string());
        }
    }

    fn deps(recorder: &Arc<Recorder>) -> WizardDeps {
        WizardDeps {
            bridge: Arc::new(LocalStakeBridge::new(2_000_000)),
            analytics: recorder.clone(),
            reporter: recorder.clone(),
        }
    }

    fn validator(addr: &str) -> Validator {
        Validator {
            vote_account: addr.into(),
            name: None,
            active_stake: 0,
            commission: 5,
            avatar_url: None,
            www_url: None,
        }
    }

    fn at_device_step(recorder: &Arc<Recorder>) -> DelegationWizard {
        let mut wizard = DelegationWizard::open(staking_account(), deps(recorder)).unwrap();
        wizard.select_validator(&validator("0xbeef")).unwrap();
        wizard.handle(WizardEvent::Continue).unwrap();
        wizard.set_amount(1_000_000_000).unwrap();
        wizard.handle(WizardEvent::Continue).unwrap();
        assert_eq!(wizard.step(), StepId::ConnectDevice);
        wizard
    }

    #[test]
    fn step_table() {
        let ids: Vec<String> = StepId::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(ids, ["validator", "amount", "connectDevice", "confirmation"]);
        assert_eq!(StepId::Amount.back(), Some(StepId::Validator));
        assert_eq!(StepId::ConnectDevice.back(), Some(StepId::Amount));
        assert_eq!(StepId::Confirmation.back(), None);
        assert!(StepId::Validator.no_scroll());
        assert!(!StepId::ConnectDevice.no_scroll());
    }

    #[test]
    fn open_requires_staking_resources() {
        let recorder = Arc::new(Recorder::default());
        let mut account = staking_account();
        account.staking = None;
        let err = DelegationWizard::open(account, deps(&recorder)).unwrap_err();
        assert!(matches!(err, StakingError::MissingStakingResources));
    }

    #[test]
    fn open_seeds_empty_delegation() {
        let recorder = Arc::new(Recorder::default());
        let wizard = DelegationWizard::open(staking_account(), deps(&recorder)).unwrap();
        assert_eq!(wizard.step(), StepId::Validator);
        assert_eq!(wizard.transaction().vote_account(), "");
        assert!(wizard.chosen_validator().is_none());
        assert!(!wizard.can_continue());
        assert!(wizard.error().is_none());
    }

    #[test]
    fn continue_without_validator_is_rejected() {
        let recorder = Arc::new(Recorder::default());
        let mut wizard = DelegationWizard::open(staking_account(), deps(&recorder)).unwrap();
        let err = wizard.handle(WizardEvent::Continue).unwrap_err();
        assert!(matches!(err, StakingError::InvalidTransition { .. }));
        assert_eq!(wizard.step(), StepId::Validator);
    }

    #[test]
    fn selection_survives_back_and_forward() {
        let recorder = Arc::new(Recorder::default());
        let mut wizard = DelegationWizard::open(staking_account(), deps(&recorder)).unwrap();
        wizard.select_validator(&validator("0xbeef")).unwrap();
        wizard.handle(WizardEvent::Continue).unwrap();
        wizard.handle(WizardEvent::Back).unwrap();
        assert_eq!(wizard.step(), StepId::Validator);
        assert_eq!(wizard.chosen_validator(), Some("0xbeef"));
        wizard.handle(WizardEvent::Continue).unwrap();
        assert_eq!(wizard.step(), StepId::Amount);
        assert_eq!(wizard.chosen_validator(), Some("0xbeef"));
    }

    #[test]
    fn malformed_validator_raises_bridge_error_on_first_step() {
        let recorder = Arc::new(Recorder::default());
        let mut wizard = DelegationWizard::open(staking_account(), deps(&recorder)).unwrap();
        wizard.select_validator(&validator("not-an-address")).unwrap();
        assert!(wizard.bridge_error().is_some());
        assert_eq!(wizard.error_steps(), vec![StepId::Validator]);
        assert!(wizard.hide_breadcrumb());
        assert!(!wizard.can_continue());

        // Picking a valid validator clears it
        wizard.select_validator(&validator("0xbeef")).unwrap();
        assert!(wizard.bridge_error().is_none());
        assert!(wizard.can_continue());
    }

    #[test]
    fn amount_errors_block_continue() {
        let recorder = Arc::new(Recorder::default());
        let mut wizard = DelegationWizard::open(staking_account(), deps(&recorder)).unwrap();
        wizard.select_validator(&validator("0xbeef")).unwrap();
        wizard.handle(WizardEvent::Continue).unwrap();
        assert!(!wizard.can_continue());
        wizard.set_amount(u64::MAX).unwrap();
        assert!(!wizard.can_continue());
        wizard.set_use_all_amount(true).unwrap();
        assert!(wizard.can_continue());
    }

    #[test]
    fn breadcrumb_only_jumps_backwards() {
        let recorder = Arc::new(Recorder::default());
        let mut wizard = at_device_step(&recorder);
        assert!(wizard.handle(WizardEvent::GoTo(StepId::Confirmation)).is_err());
        let t = wizard.handle(WizardEvent::GoTo(StepId::Validator)).unwrap();
        assert_eq!((t.from, t.to), (StepId::ConnectDevice, StepId::Validator));
    }

    #[test]
    fn broadcast_reaches_confirmation_once() {
        let recorder = Arc::new(Recorder::default());
        let mut wizard = at_device_step(&recorder);
        wizard.handle(WizardEvent::DeviceSigned).unwrap();
        assert!(wizard.signed());

        let t = wizard
            .handle(WizardEvent::OperationBroadcasted(operation("h1")))
            .unwrap();
        assert_eq!(t.to, StepId::Confirmation);
        assert!(matches!(t.effect, Some(Effect::AddPendingOperation { .. })));
        assert_eq!(wizard.account().pending_operations.len(), 1);
        assert_eq!(wizard.optimistic_operation().map(|o| o.hash.as_str()), Some("h1"));

        let again = wizard.handle(WizardEvent::OperationBroadcasted(operation("h2")));
        assert!(again.is_err());
        assert_eq!(wizard.account().pending_operations.len(), 1);
    }

    #[test]
    fn device_refusal_is_not_reported() {
        let recorder = Arc::new(Recorder::default());
        let mut wizard = at_device_step(&recorder);
        wizard
            .handle(WizardEvent::TransactionFailed(StakingError::UserRefusedOnDevice))
            .unwrap();
        assert_eq!(wizard.step(), StepId::Confirmation);
        assert!(wizard.error().is_some_and(StakingError::is_user_refusal));
        assert_eq!(wizard.error_steps(), vec![StepId::ConnectDevice]);
        assert!(recorder.critical.lock().unwrap().is_empty());
    }

    #[test]
    fn other_signing_errors_are_reported() {
        let recorder = Arc::new(Recorder::default());
        let mut wizard = at_device_step(&recorder);
        wizard
            .handle(WizardEvent::TransactionFailed(StakingError::Broadcast(
                "node unreachable".into(),
            )))
            .unwrap();
        assert_eq!(
            *recorder.critical.lock().unwrap(),
            vec!["node unreachable".to_string()]
        );
    }

    #[test]
    fn retry_returns_to_device_step() {
        let recorder = Arc::new(Recorder::default());
        let mut wizard = at_device_step(&recorder);
        wizard.handle(WizardEvent::DeviceSigned).unwrap();
        wizard
            .handle(WizardEvent::TransactionFailed(StakingError::Device("locked".into())))
            .unwrap();
        let t = wizard.handle(WizardEvent::Retry).unwrap();
        assert_eq!(t.to, StepId::ConnectDevice);
        assert!(wizard.error().is_none());
        assert!(!wizard.signed());
    }

    #[test]
    fn signing_is_refused_while_bridge_rejects_draft() {
        let recorder = Arc::new(Recorder::default());
        let mut wizard = DelegationWizard::open(staking_account(), deps(&recorder)).unwrap();
        wizard.select_validator(&validator("0xbeef")).unwrap();
        wizard.handle(WizardEvent::Continue).unwrap();
        wizard.handle(WizardEvent::Back).unwrap();
        wizard.select_validator(&validator("not-an-address")).unwrap();
        assert!(wizard.bridge_error().is_some());

        let t = wizard.handle(WizardEvent::Retry).unwrap();
        assert_eq!(t.to, StepId::ConnectDevice);
        assert!(!wizard.can_sign());

        let err = wizard.handle(WizardEvent::DeviceSigned).unwrap_err();
        assert!(matches!(err, StakingError::InvalidTransition { .. }));
        assert!(!wizard.signed());

        let err = wizard
            .handle(WizardEvent::OperationBroadcasted(operation("h1")))
            .unwrap_err();
        assert!(matches!(err, StakingError::InvalidTransition { .. }));
        assert!(wizard.account().pending_operations.is_empty());
        assert_eq!(wizard.step(), StepId::ConnectDevice);
    }

    #[test]
    fn broadcast_requires_signature() {
        let recorder = Arc::new(Recorder::default());
        let mut wizard = at_device_step(&recorder);
        assert!(wizard.can_sign());
        let err = wizard
            .handle(WizardEvent::OperationBroadcasted(operation("h1")))
            .unwrap_err();
        assert!(matches!(err, StakingError::InvalidTransition { .. }));
        assert!(wizard.account().pending_operations.is_empty());
    }

    #[test]
    fn retry_without_error_is_rejected() {
        let recorder = Arc::new(Recorder::default());
        let mut wizard = at_device_step(&recorder);
        assert!(wizard.handle(WizardEvent::Retry).is_err());
    }

    #[test]
    fn close_tracks_once_including_drop() {
        let recorder = Arc::new(Recorder::default());
        {
            let mut wizard =
                DelegationWizard::open(staking_account(), deps(&recorder)).unwrap();
            let t = wizard.handle(WizardEvent::Close).unwrap();
            assert_eq!(t.effect, Some(Effect::CloseModal));
            assert!(wizard.handle(WizardEvent::Continue).is_err());
        }
        assert_eq!(*recorder.events.lock().unwrap(), vec![CLOSE_EVENT.to_string()]);
    }

    #[test]
    fn drop_tracks_close() {
        let recorder = Arc::new(Recorder::default());
        drop(DelegationWizard::open(staking_account(), deps(&recorder)).unwrap());
        assert_eq!(recorder.events.lock().unwrap().len(), 1);
    }
}
