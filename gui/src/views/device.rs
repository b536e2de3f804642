use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Fill};

use crate::helpers::{amount_label, detail_row, short_address};
use crate::messages::Message;
use crate::state::Delegation;
use crate::{styles, App, MUTED};

impl App {
    pub(crate) fn view_device_step<'a>(&'a self, d: &'a Delegation) -> Element<'a, Message> {
        let wizard = &d.wizard;
        let account = wizard.account();
        let unit = account.unit();
        let status = wizard.status();

        let vote_account = wizard.transaction().vote_account();
        let validator = d
            .validators
            .iter()
            .find(|v| v.vote_account == vote_account)
            .and_then(|v| v.name.clone())
            .unwrap_or_else(|| short_address(vote_account));

        let summary = column![
            detail_row("Account", account.name.clone()),
            detail_row("Validator", validator),
            detail_row(self.t("delegation.flow.steps.amount.label"), amount_label(unit, status.amount)),
            detail_row(self.t("delegation.flow.steps.amount.fees"), amount_label(unit, status.estimated_fees)),
            detail_row(self.t("delegation.flow.steps.amount.total"), amount_label(unit, status.total_spent)),
        ]
        .spacing(8);

        let mut col = column![
            container(summary).padding(16).width(Fill).style(styles::card),
            text(self.t("delegation.flow.steps.connectDevice.prompt"))
                .size(14)
                .color(MUTED),
        ]
        .spacing(16);

        if d.broadcasting {
            col = col.push(
                text(self.t("delegation.flow.steps.connectDevice.broadcasting"))
                    .size(13)
                    .color(MUTED),
            );
        } else {
            let reject = button(text(self.t("delegation.flow.steps.connectDevice.reject")).size(14))
                .padding([10, 24])
                .style(styles::btn_ghost)
                .on_press(Message::RejectOnDevice);
            let approve = button(text(self.t("delegation.flow.steps.connectDevice.approve")).size(14))
                .padding([10, 24])
                .style(styles::btn_primary)
                .on_press_maybe(wizard.can_sign().then_some(Message::ApproveOnDevice));
            if let Some(err) = wizard.error() {
                col = col.push(text(err.to_string()).size(13).color(styles::DANGER));
            }
            col = col.push(
                row![reject, Space::new().width(Fill), approve]
                    .spacing(12)
                    .align_y(iced::Alignment::Center),
            );
        }

        col.into()
    }
}
