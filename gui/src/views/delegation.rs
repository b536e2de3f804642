use iced::widget::{button, center, column, container, row, scrollable, text, Space};
use iced::{Element, Fill, Length};
use jota_staking::{DelegationWizard, Glyph, StepId};

use super::icon::icon;
use crate::messages::Message;
use crate::state::Delegation;
use crate::{styles, App, MUTED};

impl App {
    /// Delegation wizard overlay, present while a flow is open.
    pub(crate) fn view_delegation_modal(&self) -> Option<Element<'_, Message>> {
        let d = self.delegation.as_ref()?;
        let wizard = &d.wizard;
        let step = wizard.step();

        let mut close = button(icon(Glyph::CircledCrossRegular, 20.0, MUTED))
            .padding(4)
            .style(styles::btn_ghost);
        if !d.broadcasting && !d.saving {
            close = close.on_press(Message::CloseDelegation);
        }
        let header = row![
            text(self.t("delegation.flow.title")).size(18).font(styles::BOLD),
            Space::new().width(Fill),
            close,
        ]
        .align_y(iced::Alignment::Center);

        let mut col = column![header].spacing(12);
        if !wizard.hide_breadcrumb() {
            col = col.push(self.view_breadcrumb(wizard));
        }
        col = col.push(styles::separator());

        let body = match step {
            StepId::Validator => self.view_validator_step(d),
            StepId::Amount => self.view_amount_step(d),
            StepId::ConnectDevice => self.view_device_step(d),
            StepId::Confirmation => self.view_confirmation_step(d),
        };
        // The validator list and amount form size themselves to the modal.
        let body: Element<Message> = if step.no_scroll() {
            container(body).height(Fill).into()
        } else {
            scrollable(body).height(Fill).into()
        };
        col = col.push(body);

        if let Some(footer) = self.view_footer(d) {
            col = col.push(styles::separator());
            col = col.push(footer);
        }

        let card = container(col)
            .padding(24)
            .width(Length::Fixed(560.0))
            .height(Length::Fixed(640.0))
            .style(styles::card);

        Some(center(card).style(styles::backdrop).into())
    }

    fn view_breadcrumb(&self, wizard: &DelegationWizard) -> Element<'_, Message> {
        let current = wizard.step();
        let flagged = wizard.error_steps();

        let mut crumbs = row![].spacing(4).align_y(iced::Alignment::Center);
        for (i, step) in StepId::ALL.into_iter().enumerate() {
            if i > 0 {
                crumbs = crumbs.push(text("›").size(13).color(MUTED));
            }
            let mut crumb = button(text(self.t(step.title_key())).size(13))
                .padding([4, 8])
                .style(styles::crumb(step == current, flagged.contains(&step)));
            if current != StepId::Confirmation && step.index() < current.index() {
                crumb = crumb.on_press(Message::GoToStep(step));
            }
            crumbs = crumbs.push(crumb);
        }
        crumbs.into()
    }

    fn view_footer(&self, d: &Delegation) -> Option<Element<'_, Message>> {
        let wizard = &d.wizard;
        let step = wizard.step();
        if step == StepId::Confirmation {
            return None;
        }

        let mut back = button(text(self.t("common.back")).size(14))
            .padding([10, 20])
            .style(styles::btn_secondary);
        if step.back().is_some() && !d.broadcasting {
            back = back.on_press(Message::Back);
        }

        let mut footer = row![].spacing(12).align_y(iced::Alignment::Center);
        if step.back().is_some() {
            footer = footer.push(back);
        }
        footer = footer.push(Space::new().width(Fill));

        if step != StepId::ConnectDevice {
            let mut next = button(text(self.t("common.continue")).size(14))
                .padding([10, 24])
                .style(styles::btn_primary);
            if wizard.can_continue() {
                next = next.on_press(Message::Continue);
            }
            footer = footer.push(next);
        }
        Some(footer.into())
    }
}
