use iced::widget::{column, container, row, text, Space};
use iced::{Color, Element, Fill, Length};
use jota_staking::provider::{ProviderIcon, StatusBadge};
use jota_staking::ProviderSummary;

use super::icon::icon;
use crate::messages::Message;
use crate::{styles, App, MUTED};

impl App {
    /// Swap provider panel: provider identity plus its KYC badge.
    pub(crate) fn view_provider_section(&self) -> Element<'_, Message> {
        let summary =
            ProviderSummary::derive(self.market.exchange_rate.as_ref(), self.market.kyc_status);

        let value: Element<Message> = match &summary {
            ProviderSummary::Placeholder => text("-").size(14).into(),
            ProviderSummary::Provider { name, icon, badge } => {
                let mut r = row![provider_logo(*icon), text(name.clone()).size(14)]
                    .spacing(8)
                    .align_y(iced::Alignment::Center);
                if let Some(badge) = badge {
                    r = r.push(Space::new().width(Fill));
                    r = r.push(self.view_status_badge(badge));
                }
                r.into()
            }
        };

        let content = column![
            text(self.t("swap2.form.providers.title")).size(12).color(MUTED),
            value,
        ]
        .spacing(8);

        container(content)
            .padding(20)
            .width(Fill)
            .style(styles::card)
            .into()
    }

    fn view_status_badge(&self, badge: &StatusBadge) -> Element<'_, Message> {
        let color = styles::theme_color(badge.theme.color);
        let label = self.catalog.t(&badge.status.label_key()).to_string();
        container(
            row![icon(badge.theme.icon, 14.0, color), text(label).size(12).color(color)]
                .spacing(4)
                .align_y(iced::Alignment::Center),
        )
        .padding([4, 10])
        .style(styles::badge(color))
        .into()
    }
}

fn provider_logo<'a>(logo: Option<ProviderIcon>) -> Element<'a, Message> {
    let mark = logo.map_or("?", ProviderIcon::mark);
    container(text(mark).size(11).font(styles::BOLD).color(Color::WHITE))
        .center_x(Length::Fixed(32.0))
        .center_y(Length::Fixed(32.0))
        .style(styles::avatar)
        .into()
}
