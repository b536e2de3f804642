use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Fill};
use jota_staking::Account;

use crate::helpers::{amount_label, short_address};
use crate::messages::Message;
use crate::{styles, App, MUTED};

impl App {
    pub(crate) fn view_accounts(&self) -> Element<'_, Message> {
        let mut col = column![text("Accounts").size(24)].spacing(16);

        if self.loading > 0 {
            col = col.push(text("Loading...").size(13).color(MUTED));
        }
        if self.delegation.is_none() {
            if let Some(msg) = &self.status_message {
                col = col.push(text(msg.as_str()).size(13).color(styles::ACCENT));
            }
            if let Some(err) = &self.error_message {
                col = col.push(text(err.as_str()).size(13).color(styles::DANGER));
            }
        }

        if self.accounts.is_empty() {
            col = col.push(text("No accounts found.").size(14).color(MUTED));
        }
        for account in &self.accounts {
            col = col.push(self.view_account_card(account));
        }
        col.into()
    }

    fn view_account_card<'a>(&'a self, account: &'a Account) -> Element<'a, Message> {
        let unit = account.unit();

        let mut delegate = button(text(self.t("delegation.flow.title")).size(13))
            .padding([8, 16])
            .style(styles::btn_primary);
        if account.staking.is_some() && self.delegation.is_none() {
            delegate = delegate.on_press(Message::OpenDelegation(account.id.clone()));
        }

        let header = row![
            column![
                text(account.name.as_str()).size(16).font(styles::BOLD),
                text(short_address(&account.address)).size(12).color(MUTED),
            ]
            .spacing(2),
            Space::new().width(Fill),
            delegate,
        ]
        .align_y(iced::Alignment::Center);

        let mut details = column![
            text(amount_label(unit, account.balance)).size(22),
        ]
        .spacing(4);

        if account.staking.is_some() {
            details = details.push(
                text(format!("Delegated: {}", amount_label(unit, account.delegated_balance())))
                    .size(12)
                    .color(MUTED),
            );
        } else {
            details = details.push(text("Staking not available").size(12).color(MUTED));
        }

        let pending = account.pending_operations.len();
        if pending > 0 {
            details = details.push(
                text(format!("{pending} pending operation(s)"))
                    .size(12)
                    .color(styles::WARNING),
            );
        }

        container(column![header, styles::separator(), details].spacing(12))
            .padding(20)
            .width(Fill)
            .style(styles::card)
            .into()
    }
}
