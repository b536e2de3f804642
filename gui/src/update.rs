use iced::Task;
use jota_staking::units::parse_amount;
use jota_staking::validators::{external_link, filter_validators};
use jota_staking::{
    Account, Broadcaster, DelegationWizard, Effect, MarketSnapshot, Operation, StakingError,
    StepId, ValidatorSource, WizardEvent,
};

use crate::messages::Message;
use crate::state::{Delegation, SEARCH_INPUT_ID};
use crate::App;

impl App {
    // -- Update --

    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RefreshMarket => self.load_market(),

            Message::MarketLoaded(result) => {
                self.loading = self.loading.saturating_sub(1);
                match result {
                    Ok(snapshot) => {
                        self.market =
                            snapshot.with_featured(self.settings.featured_validator.clone());
                    }
                    Err(e) => self.error_message = Some(e),
                }
                Task::none()
            }

            // -- Delegation modal --
            Message::OpenDelegation(account_id) => {
                let Some(account) = self.accounts.iter().find(|a| a.id == account_id).cloned()
                else {
                    return Task::none();
                };
                match DelegationWizard::open(account, self.deps.clone()) {
                    Ok(wizard) => {
                        let validators = self.market.validators(&wizard.account().currency);
                        self.delegation =
                            Some(Delegation::new(wizard, validators, self.settings.page_size));
                        self.error_message = None;
                        self.status_message = None;
                        focus_search()
                    }
                    Err(e) => {
                        self.error_message = Some(e.to_string());
                        Task::none()
                    }
                }
            }

            Message::CloseDelegation => {
                if self.delegation.as_ref().is_some_and(|d| d.broadcasting || d.saving) {
                    return Task::none();
                }
                self.drive(WizardEvent::Close)
            }

            Message::Continue => self.drive(WizardEvent::Continue),
            Message::Back => self.drive(WizardEvent::Back),
            Message::GoToStep(step) => self.drive(WizardEvent::GoTo(step)),

            // -- Validator step --
            Message::SearchChanged(search) => {
                if let Some(d) = &mut self.delegation {
                    d.search = search;
                    d.window.reset();
                }
                Task::none()
            }

            Message::ValidatorsScrolled(offset) => {
                if let Some(d) = &mut self.delegation {
                    let total = filter_validators(&d.validators, &d.search).len();
                    d.window.on_scroll(offset, total);
                }
                Task::none()
            }

            Message::SelectValidator(address) => {
                if let Some(d) = &mut self.delegation {
                    if let Some(validator) = d.validators.iter().find(|v| v.vote_account == address) {
                        if let Err(e) = d.wizard.select_validator(validator) {
                            tracing::warn!(error = %e, "validator selection ignored");
                        }
                    }
                }
                Task::none()
            }

            Message::OpenValidatorLink(address) => {
                let validators = self
                    .delegation
                    .as_ref()
                    .map(|d| d.validators.as_slice())
                    .unwrap_or_default();
                if let Some(url) = external_link(&address, validators, Some(&self.explorer)) {
                    if let Err(e) = open::that(&url) {
                        tracing::warn!(error = %e, %url, "failed to open link");
                    }
                }
                Task::none()
            }

            // -- Amount step --
            Message::AmountChanged(input) => {
                let Some(d) = &mut self.delegation else {
                    return Task::none();
                };
                let parsed = if input.trim().is_empty() {
                    Ok(0)
                } else {
                    parse_amount(d.wizard.account().unit(), &input)
                };
                d.amount_input = input;
                let amount = match parsed {
                    Ok(amount) => {
                        d.amount_error = None;
                        amount
                    }
                    Err(e) => {
                        d.amount_error = Some(e.to_string());
                        0
                    }
                };
                if let Err(e) = d.wizard.set_amount(amount) {
                    tracing::warn!(error = %e, "amount change ignored");
                }
                Task::none()
            }

            Message::UseMaxToggled(enabled) => {
                if let Some(d) = &mut self.delegation {
                    if let Err(e) = d.wizard.set_use_all_amount(enabled) {
                        tracing::warn!(error = %e, "use max toggle ignored");
                    }
                    if enabled {
                        d.amount_error = None;
                    }
                }
                Task::none()
            }

            // -- Device step --
            Message::ApproveOnDevice => {
                let Some(d) = &mut self.delegation else {
                    return Task::none();
                };
                if d.broadcasting {
                    return Task::none();
                }
                if let Err(e) = d.wizard.handle(WizardEvent::DeviceSigned) {
                    tracing::warn!(error = %e, "approval ignored");
                    return Task::none();
                }
                d.broadcasting = true;

                let account = d.wizard.account().clone();
                let tx = d.wizard.transaction().clone();
                let broadcaster = self.broadcaster.clone();

                Task::perform(
                    async move {
                        let operation = tokio::task::spawn_blocking(move || {
                            broadcaster.broadcast(&account, &tx)
                        })
                        .await
                        .map_err(|e| anyhow::anyhow!("Task failed: {e}"))??;
                        Ok(operation)
                    },
                    |r: Result<Operation, anyhow::Error>| {
                        Message::BroadcastCompleted(r.map_err(|e| e.to_string()))
                    },
                )
            }

            Message::RejectOnDevice => {
                self.drive(WizardEvent::TransactionFailed(StakingError::UserRefusedOnDevice))
            }

            Message::BroadcastCompleted(result) => {
                if let Some(d) = &mut self.delegation {
                    d.broadcasting = false;
                }
                let event = match result {
                    Ok(operation) => WizardEvent::OperationBroadcasted(operation),
                    Err(e) => WizardEvent::TransactionFailed(StakingError::Broadcast(e)),
                };
                self.drive(event)
            }

            Message::PendingOperationSaved(result) => {
                if let Some(d) = &mut self.delegation {
                    d.saving = false;
                }
                match result {
                    Ok(account) => {
                        match self.accounts.iter_mut().find(|a| a.id == account.id) {
                            Some(slot) => *slot = account,
                            None => self.accounts.push(account),
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to record pending operation");
                        self.error_message = Some(e);
                    }
                }
                Task::none()
            }

            // -- Confirmation step --
            Message::Retry => self.drive(WizardEvent::Retry),

            Message::OpenExplorer(digest) => {
                if let Some(url) = self.explorer.transaction_url(&digest) {
                    if let Err(e) = open::that(&url) {
                        tracing::warn!(error = %e, %url, "failed to open explorer");
                    }
                }
                Task::none()
            }

            Message::CopyHash(hash) => {
                if let Some(cb) = &mut self.clipboard {
                    match cb.set_text(&hash) {
                        Ok(_) => self.status_message = Some(self.catalog.t("common.copied").into()),
                        Err(e) => self.error_message = Some(format!("Copy failed: {e}")),
                    }
                } else {
                    self.error_message = Some("Clipboard not available".into());
                }
                Task::none()
            }
        }
    }

    // -- Helpers --

    /// Feed an event to the open wizard and carry out the resulting effect.
    fn drive(&mut self, event: WizardEvent) -> Task<Message> {
        let Some(d) = &mut self.delegation else {
            return Task::none();
        };
        let transition = match d.wizard.handle(event) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(error = %e, "delegation event ignored");
                return Task::none();
            }
        };
        if matches!(transition.effect, Some(Effect::AddPendingOperation { .. })) {
            d.saving = true;
        }

        let mut tasks = Vec::new();
        if transition.to == StepId::Validator && transition.from != StepId::Validator {
            tasks.push(focus_search());
        }
        match transition.effect {
            Some(Effect::CloseModal) => self.delegation = None,
            Some(effect) => tasks.push(self.save_effect(effect)),
            None => {}
        }
        Task::batch(tasks)
    }

    /// Apply a store effect off the UI thread and report the updated account.
    fn save_effect(&self, effect: Effect) -> Task<Message> {
        let Effect::AddPendingOperation { account_id, .. } = &effect else {
            return Task::none();
        };
        let account_id = account_id.clone();
        let Some(store) = self.store.clone() else {
            return Task::done(Message::PendingOperationSaved(Err(
                "Account store unavailable".into(),
            )));
        };

        Task::perform(
            async move {
                let account = tokio::task::spawn_blocking(move || -> anyhow::Result<Account> {
                    let mut store = store
                        .lock()
                        .map_err(|_| anyhow::anyhow!("Account store lock poisoned"))?;
                    effect.apply(&mut *store)?;
                    store
                        .get(&account_id)
                        .cloned()
                        .ok_or_else(|| anyhow::anyhow!("Account '{account_id}' not found"))
                })
                .await
                .map_err(|e| anyhow::anyhow!("Task failed: {e}"))??;
                Ok(account)
            },
            |r: Result<Account, anyhow::Error>| {
                Message::PendingOperationSaved(r.map_err(|e| e.to_string()))
            },
        )
    }

    pub(crate) fn load_market(&mut self) -> Task<Message> {
        self.loading += 1;
        Task::perform(
            async move {
                let snapshot = tokio::task::spawn_blocking(MarketSnapshot::open)
                    .await
                    .map_err(|e| anyhow::anyhow!("Task failed: {e}"))??;
                Ok(snapshot)
            },
            |r: Result<MarketSnapshot, anyhow::Error>| {
                Message::MarketLoaded(r.map_err(|e| e.to_string()))
            },
        )
    }
}

fn focus_search() -> Task<Message> {
    iced::widget::operation::focus(iced::widget::Id::new(SEARCH_INPUT_ID))
}
