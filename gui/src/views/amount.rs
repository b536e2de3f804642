use iced::widget::{button, column, row, text, text_input, Space};
use iced::{Element, Fill};
use jota_staking::transaction::StatusField;

use crate::helpers::{amount_label, detail_row};
use crate::messages::Message;
use crate::state::Delegation;
use crate::{styles, App, MUTED};

impl App {
    pub(crate) fn view_amount_step<'a>(&'a self, d: &'a Delegation) -> Element<'a, Message> {
        let wizard = &d.wizard;
        let account = wizard.account();
        let unit = account.unit();
        let status = wizard.status();
        let use_all = wizard.transaction().use_all_amount;

        let input = if use_all {
            // Read-only while the whole balance is selected.
            text_input("0", &amount_label(unit, status.amount)).padding(10)
        } else {
            text_input("0", &d.amount_input)
                .on_input(Message::AmountChanged)
                .padding(10)
        };

        let max = button(text(self.t("delegation.flow.steps.amount.useMax")).size(12))
            .padding([8, 12])
            .style(styles::toggle_btn(use_all))
            .on_press(Message::UseMaxToggled(!use_all));

        let mut col = column![
            row![
                text(self.t("delegation.flow.steps.amount.label")).size(12).color(MUTED),
                Space::new().width(Fill),
                text(format!(
                    "{} {}",
                    self.t("delegation.flow.steps.amount.spendable"),
                    amount_label(unit, account.spendable_balance())
                ))
                .size(12)
                .color(MUTED),
            ],
            row![input, max].spacing(8).align_y(iced::Alignment::Center),
        ]
        .spacing(8);

        // Parse errors win over bridge validation for the same field.
        let amount_error = match d.amount_error.as_deref() {
            Some(err) => Some(err),
            None if use_all || !d.amount_input.is_empty() => status.error(StatusField::Amount),
            None => None,
        };
        if let Some(err) = amount_error {
            col = col.push(text(err.to_string()).size(12).color(styles::DANGER));
        }
        if let Some(err) = status.error(StatusField::Fees) {
            col = col.push(text(err.to_string()).size(12).color(styles::DANGER));
        }
        if let Some(warning) = status.warnings.get(&StatusField::Amount) {
            col = col.push(text(warning.clone()).size(12).color(styles::WARNING));
        }
        if let Some(err) = wizard.bridge_error() {
            col = col.push(text(err.to_string()).size(12).color(styles::DANGER));
        }

        col = col
            .push(Space::new().height(8))
            .push(styles::separator())
            .push(detail_row(
                self.t("delegation.flow.steps.amount.fees"),
                amount_label(unit, status.estimated_fees),
            ))
            .push(detail_row(
                self.t("delegation.flow.steps.amount.total"),
                amount_label(unit, status.total_spent),
            ));

        col.into()
    }
}
