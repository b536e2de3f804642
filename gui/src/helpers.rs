use iced::widget::{row, text};
use iced::{Element, Length};
use jota_staking::units::{format_currency_unit, FormatOptions};
use jota_staking::Unit;

use crate::messages::Message;
use crate::MUTED;

/// `0x1234567890...90abcdef` for long addresses and digests.
pub(crate) fn short_address(addr: &str) -> String {
    if addr.is_ascii() && addr.len() > 20 {
        format!("{}...{}", &addr[..10], &addr[addr.len() - 8..])
    } else {
        addr.to_string()
    }
}

/// Amount with the unit code, trailing zeros trimmed.
pub(crate) fn amount_label(unit: &Unit, amount: u64) -> String {
    format_currency_unit(
        unit,
        amount,
        FormatOptions {
            show_code: true,
            ..Default::default()
        },
    )
}

/// "Label: value" for single-line captions.
pub(crate) fn labelled(label: &str, value: &str) -> String {
    format!("{label}: {value}")
}

/// Muted label on the left, value on the right.
pub(crate) fn detail_row<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).size(12).color(MUTED).width(Length::Fixed(120.0)),
        text(value).size(13),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_addresses_are_kept() {
        assert_eq!(short_address("0xabc"), "0xabc");
    }

    #[test]
    fn long_addresses_are_elided() {
        let addr = format!("0x{}", "ab".repeat(32));
        assert_eq!(short_address(&addr), "0xabababab...abababab");
    }

    #[test]
    fn stake_caption_is_labelled() {
        let catalog = jota_staking::Catalog::english();
        assert_eq!(
            labelled(catalog.t("delegation.flow.steps.validator.totalStake"), "1 IOTA"),
            "Total stake: 1 IOTA"
        );
    }

    #[test]
    fn amount_has_code() {
        assert_eq!(amount_label(&Unit::iota(), 1_500_000_000), "1.5 IOTA");
    }
}
