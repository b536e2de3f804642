use iced::widget::{button, column, row, text, Space};
use iced::{Element, Fill, Font};
use jota_staking::Glyph;

use super::icon::icon;
use crate::helpers::short_address;
use crate::messages::Message;
use crate::state::Delegation;
use crate::{styles, App, MUTED};

impl App {
    pub(crate) fn view_confirmation_step<'a>(&'a self, d: &'a Delegation) -> Element<'a, Message> {
        let wizard = &d.wizard;

        let close = button(text(self.t("common.close")).size(14))
            .padding([10, 20])
            .style(styles::btn_secondary);
        let close = if d.saving {
            close
        } else {
            close.on_press(Message::CloseDelegation)
        };

        let mut col = column![].spacing(12).align_x(iced::Alignment::Center);

        if let Some(err) = wizard.error() {
            let (glyph, color, title) = if err.is_user_refusal() {
                (
                    Glyph::CircledCrossRegular,
                    MUTED,
                    "delegation.flow.steps.confirmation.refused.title",
                )
            } else {
                (
                    Glyph::ExclamationCircle,
                    styles::DANGER,
                    "delegation.flow.steps.confirmation.error.title",
                )
            };
            col = col
                .push(icon(glyph, 48.0, color))
                .push(text(self.t(title)).size(18).font(styles::BOLD))
                .push(text(err.to_string()).size(13).color(color))
                .push(Space::new().height(8))
                .push(
                    row![
                        close,
                        button(text(self.t("common.retry")).size(14))
                            .padding([10, 24])
                            .style(styles::btn_primary)
                            .on_press(Message::Retry),
                    ]
                    .spacing(12),
                );
            return col.into();
        }

        let Some(operation) = wizard.optimistic_operation() else {
            return col.push(close).into();
        };

        col = col
            .push(icon(Glyph::CheckCircle, 48.0, styles::ACCENT))
            .push(
                text(self.t("delegation.flow.steps.confirmation.success.title"))
                    .size(18)
                    .font(styles::BOLD),
            )
            .push(
                text(self.t("delegation.flow.steps.confirmation.success.text"))
                    .size(13)
                    .color(MUTED),
            )
            .push(
                row![
                    text(short_address(&operation.hash)).size(12).font(Font::MONOSPACE),
                    button(text(self.t("common.copy")).size(11))
                        .padding([4, 10])
                        .style(styles::btn_secondary)
                        .on_press(Message::CopyHash(operation.hash.clone())),
                ]
                .spacing(8)
                .align_y(iced::Alignment::Center),
            );

        if let Some(msg) = &self.status_message {
            col = col.push(text(msg.as_str()).size(12).color(styles::ACCENT));
        }
        if let Some(err) = &self.error_message {
            col = col.push(text(err.as_str()).size(12).color(styles::DANGER));
        }

        col.push(Space::new().height(8))
            .push(
                row![
                    button(text(self.t("common.viewDetails")).size(14))
                        .padding([10, 20])
                        .style(styles::btn_secondary)
                        .on_press(Message::OpenExplorer(operation.hash.clone())),
                    Space::new().width(Fill),
                    close,
                ]
                .spacing(12),
            )
            .into()
    }
}
