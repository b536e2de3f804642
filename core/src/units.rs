//! Amount formatting in account units.
//!
//! Amounts are integers in the smallest denomination; a `Unit` carries the
//! number of decimal places (`magnitude`) and the display code.

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, StakingError};

/// Largest number of decimal places whose scale still fits in a `u64`.
pub const MAX_MAGNITUDE: u32 = 19;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub code: String,
    #[serde(deserialize_with = "bounded_magnitude")]
    pub magnitude: u32,
}

fn bounded_magnitude<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let magnitude = u32::deserialize(deserializer)?;
    if magnitude > MAX_MAGNITUDE {
        return Err(serde::de::Error::custom(format!(
            "unit magnitude {magnitude} exceeds {MAX_MAGNITUDE}"
        )));
    }
    Ok(magnitude)
}

impl Unit {
    pub fn iota() -> Self {
        Self {
            name: "IOTA".into(),
            code: "IOTA".into(),
            magnitude: 9,
        }
    }

    /// Decimal places, capped for units built in code rather than loaded.
    fn decimals(&self) -> u32 {
        self.magnitude.min(MAX_MAGNITUDE)
    }

    fn scale(&self) -> u64 {
        10u64.checked_pow(self.decimals()).unwrap_or(u64::MAX)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Append the unit code.
    pub show_code: bool,
    /// Print every decimal instead of trimming trailing zeros.
    pub show_all_digits: bool,
}

/// Format an amount for display, grouping thousands in the whole part.
/// Examples with the IOTA unit: 1_500_000_000 -> "1.5", 12_000_000_000_000 -> "12,000"
#[must_use]
pub fn format_currency_unit(unit: &Unit, amount: u64, opts: FormatOptions) -> String {
    let scale = unit.scale();
    let whole = (amount / scale).to_formatted_string(&Locale::en);
    let frac = amount % scale;

    let mut out = whole;
    if unit.decimals() > 0 {
        let digits = format!("{frac:0width$}", width = unit.decimals() as usize);
        let digits = if opts.show_all_digits {
            digits.as_str()
        } else {
            digits.trim_end_matches('0')
        };
        if !digits.is_empty() {
            out.push('.');
            out.push_str(digits);
        }
    }
    if opts.show_code {
        out.push(' ');
        out.push_str(&unit.code);
    }
    out
}

/// Parse a human-readable amount into the smallest denomination.
/// Accepts: "1.5" -> 1_500_000_000, "1" -> 1_000_000_000 (IOTA unit)
pub fn parse_amount(unit: &Unit, input: &str) -> Result<u64> {
    let input = input.trim().replace(',', "");

    if input.is_empty() {
        return Err(StakingError::InvalidAmount("Amount cannot be empty".into()));
    }
    if input.starts_with('-') {
        return Err(StakingError::InvalidAmount("Amount must be positive".into()));
    }

    let (whole_str, frac_str) = match input.split_once('.') {
        Some((w, f)) => (w, f),
        None => (input.as_str(), ""),
    };
    if !whole_str.chars().chain(frac_str.chars()).all(|c| c.is_ascii_digit()) {
        return Err(StakingError::InvalidAmount(format!(
            "Invalid amount '{input}'"
        )));
    }

    let whole: u64 = if whole_str.is_empty() {
        0
    } else {
        whole_str
            .parse()
            .map_err(|_| StakingError::InvalidAmount(format!("Invalid amount '{input}'")))?
    };

    let magnitude = unit.decimals() as usize;
    if frac_str.len() > magnitude {
        return Err(StakingError::InvalidAmount(format!(
            "Too many decimal places. {} supports up to {magnitude}.",
            unit.code
        )));
    }
    let frac: u64 = if frac_str.is_empty() {
        0
    } else {
        format!("{frac_str:0<magnitude$}")
            .parse()
            .map_err(|_| StakingError::InvalidAmount(format!("Invalid amount '{input}'")))?
    };

    whole
        .checked_mul(unit.scale())
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(|| StakingError::InvalidAmount("Amount too large".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code() -> FormatOptions {
        FormatOptions {
            show_code: true,
            ..Default::default()
        }
    }

    #[test]
    fn format_zero() {
        assert_eq!(format_currency_unit(&Unit::iota(), 0, code()), "0 IOTA");
    }

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(
            format_currency_unit(&Unit::iota(), 1_500_000_000, code()),
            "1.5 IOTA"
        );
    }

    #[test]
    fn format_groups_thousands() {
        assert_eq!(
            format_currency_unit(&Unit::iota(), 12_345_000_000_000, FormatOptions::default()),
            "12,345"
        );
    }

    #[test]
    fn format_all_digits() {
        let opts = FormatOptions {
            show_all_digits: true,
            ..Default::default()
        };
        assert_eq!(
            format_currency_unit(&Unit::iota(), 1, opts),
            "0.000000001"
        );
    }

    #[test]
    fn parse_whole_and_decimal() {
        let unit = Unit::iota();
        assert_eq!(parse_amount(&unit, "1").unwrap(), 1_000_000_000);
        assert_eq!(parse_amount(&unit, "1.5").unwrap(), 1_500_000_000);
        assert_eq!(parse_amount(&unit, ".25").unwrap(), 250_000_000);
        assert_eq!(parse_amount(&unit, "1,000").unwrap(), 1_000_000_000_000);
    }

    #[test]
    fn parse_trailing_dot() {
        assert_eq!(parse_amount(&Unit::iota(), "2.").unwrap(), 2_000_000_000);
    }

    #[test]
    fn parse_rejects_bad_input() {
        let unit = Unit::iota();
        assert!(parse_amount(&unit, "").is_err());
        assert!(parse_amount(&unit, "-1").is_err());
        assert!(parse_amount(&unit, "abc").is_err());
        assert!(parse_amount(&unit, "1.2.3").is_err());
        assert!(parse_amount(&unit, "1.1234567890").is_err());
    }

    #[test]
    fn parse_rejects_signs_inside_digits() {
        let unit = Unit::iota();
        assert!(parse_amount(&unit, "+1").is_err());
        assert!(parse_amount(&unit, "1.+5").is_err());
        assert!(parse_amount(&unit, "1 5").is_err());
    }

    #[test]
    fn oversized_magnitude_is_rejected_on_load() {
        let err = serde_json::from_str::<Unit>(r#"{"name":"X","code":"X","magnitude":20}"#);
        assert!(err.is_err());
        let unit: Unit =
            serde_json::from_str(r#"{"name":"X","code":"X","magnitude":19}"#).unwrap();
        assert_eq!(
            format_currency_unit(&unit, u64::MAX, FormatOptions::default()),
            "1.8446744073709551615"
        );
    }

    #[test]
    fn oversized_magnitude_in_code_does_not_panic() {
        let unit = Unit {
            name: "X".into(),
            code: "X".into(),
            magnitude: 40,
        };
        assert_eq!(
            format_currency_unit(&unit, 5, FormatOptions::default()),
            "0.0000000000000000005"
        );
        assert_eq!(parse_amount(&unit, "1").unwrap(), 10_000_000_000_000_000_000);
    }

    #[test]
    fn parse_overflow() {
        assert!(parse_amount(&Unit::iota(), "99999999999999999999").is_err());
    }
}
