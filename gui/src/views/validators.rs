use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Color, Element, Fill, Length};
use jota_staking::validators::{filter_validators, ValidatorIcon};
use jota_staking::ValidatorRow;

use crate::helpers::labelled;
use crate::messages::Message;
use crate::state::{Delegation, SEARCH_INPUT_ID};
use crate::{styles, App, MUTED};

impl App {
    pub(crate) fn view_validator_step<'a>(&'a self, d: &'a Delegation) -> Element<'a, Message> {
        let wizard = &d.wizard;

        let search = text_input(
            self.t("delegation.flow.steps.validator.searchPlaceholder"),
            &d.search,
        )
        .id(iced::widget::Id::new(SEARCH_INPUT_ID))
        .on_input(Message::SearchChanged)
        .padding(10);

        let mut col = column![search].spacing(12);

        if let Some(err) = wizard.error() {
            col = col.push(text(err.to_string()).size(13).color(styles::DANGER));
        }

        let matches = filter_validators(&d.validators, &d.search);
        if matches.is_empty() {
            let msg = if d.search.is_empty() {
                "No validators available.".to_string()
            } else {
                self.catalog
                    .t_with(
                        "delegation.flow.steps.validator.noResult",
                        &[("search", d.search.as_str())],
                    )
                    .into_owned()
            };
            col = col.push(text(msg).size(14).color(MUTED));
            return col.into();
        }

        let unit = wizard.account().unit();
        let featured = self.market.featured_validator.as_deref();
        let shown = d.window.visible(matches.len());
        let mut rows = Column::new().spacing(4);
        for validator in matches.iter().take(shown) {
            let row_data = ValidatorRow::derive(validator, wizard.chosen_validator(), unit);
            let is_featured = featured == Some(validator.vote_account.as_str());
            rows = rows.push(self.view_validator_row(row_data, is_featured));
        }
        if d.window.has_more(matches.len()) {
            rows = rows.push(text("…").size(13).color(MUTED));
        }

        col = col.push(
            scrollable(rows)
                .on_scroll(|viewport| Message::ValidatorsScrolled(viewport.relative_offset().y))
                .height(Fill),
        );
        col.into()
    }

    fn view_validator_row(&self, r: ValidatorRow, featured: bool) -> Element<'_, Message> {
        let letter = match &r.icon {
            ValidatorIcon::Initial(c) => *c,
            // Remote avatars are not fetched; use the name's monogram.
            ValidatorIcon::Avatar(_) => r
                .title
                .chars()
                .find(|c| c.is_alphanumeric())
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('?'),
        };
        let avatar = container(text(letter.to_string()).size(13).font(styles::BOLD).color(Color::WHITE))
            .center_x(Length::Fixed(32.0))
            .center_y(Length::Fixed(32.0))
            .style(styles::avatar);

        let mut title = row![text(r.title.clone()).size(14)]
            .spacing(6)
            .align_y(iced::Alignment::Center);
        if featured {
            title = title.push(
                container(
                    text(self.t("delegation.flow.steps.validator.featured")).size(10),
                )
                .padding([2, 6])
                .style(styles::badge(styles::ACCENT)),
            );
        }

        let link = button(text("↗").size(13))
            .padding([4, 8])
            .style(styles::btn_ghost)
            .on_press(Message::OpenValidatorLink(r.address.clone()));

        let content = row![
            avatar,
            column![
                title,
                text(labelled(
                    self.t("delegation.flow.steps.validator.totalStake"),
                    &r.total_stake,
                ))
                .size(12)
                .color(MUTED),
            ]
            .spacing(2),
            Space::new().width(Fill),
            column![
                text(r.commission.clone()).size(13),
                text(self.t("delegation.flow.steps.validator.commission"))
                    .size(11)
                    .color(MUTED),
            ]
            .align_x(iced::Alignment::End),
            link,
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center);

        button(content)
            .width(Fill)
            .padding([8, 10])
            .style(styles::list_row(r.active))
            .on_press(Message::SelectValidator(r.address))
            .into()
    }
}
