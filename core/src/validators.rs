//! Validator directory entries and the list model behind the selection step.

use serde::{Deserialize, Serialize};

use crate::explorer::ExplorerView;
use crate::units::{format_currency_unit, FormatOptions, Unit};

pub const PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub vote_account: String,
    #[serde(default)]
    pub name: Option<String>,
    pub active_stake: u64,
    /// Commission in percent.
    pub commission: u8,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub www_url: Option<String>,
}

/// Featured validator first, the rest by active stake (largest first).
pub fn featured_first(mut validators: Vec<Validator>, featured: Option<&str>) -> Vec<Validator> {
    validators.sort_by(|a, b| {
        let a_featured = Some(a.vote_account.as_str()) == featured;
        let b_featured = Some(b.vote_account.as_str()) == featured;
        b_featured
            .cmp(&a_featured)
            .then(b.active_stake.cmp(&a.active_stake))
            .then(a.vote_account.cmp(&b.vote_account))
    });
    validators
}

/// Entries whose name or vote account contains `search`, ignoring case.
pub fn filter_validators<'a>(validators: &'a [Validator], search: &str) -> Vec<&'a Validator> {
    let needle = search.to_lowercase();
    if needle.is_empty() {
        return validators.iter().collect();
    }
    validators
        .iter()
        .filter(|v| {
            v.name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&needle))
                || v.vote_account.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Website of the validator if known, else its explorer address page.
pub fn external_link(
    address: &str,
    validators: &[Validator],
    explorer: Option<&ExplorerView>,
) -> Option<String> {
    let website = validators
        .iter()
        .find(|v| v.vote_account == address)
        .and_then(|v| v.www_url.clone())
        .filter(|url| !url.is_empty());
    website.or_else(|| explorer.and_then(|e| e.address_url(address)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorIcon {
    Avatar(String),
    Initial(char),
}

/// Display fields for one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorRow {
    pub address: String,
    pub title: String,
    pub total_stake: String,
    pub commission: String,
    pub icon: ValidatorIcon,
    pub active: bool,
}

impl ValidatorRow {
    pub fn derive(validator: &Validator, chosen: Option<&str>, unit: &Unit) -> Self {
        let title = validator
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| validator.vote_account.clone());
        let icon = match &validator.avatar_url {
            Some(url) => ValidatorIcon::Avatar(url.clone()),
            None => ValidatorIcon::Initial(first_letter(&validator.vote_account)),
        };
        Self {
            address: validator.vote_account.clone(),
            title,
            total_stake: format_currency_unit(
                unit,
                validator.active_stake,
                FormatOptions {
                    show_code: true,
                    ..Default::default()
                },
            ),
            commission: format!("{} %", validator.commission),
            icon,
            active: chosen == Some(validator.vote_account.as_str()),
        }
    }
}

/// First alphanumeric character after an optional `0x` prefix, uppercased.
fn first_letter(label: &str) -> char {
    let stripped = label.strip_prefix("0x").unwrap_or(label);
    stripped
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

/// Incremental loading window over a long list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    visible: usize,
    page_size: usize,
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl ScrollWindow {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            visible: page_size,
            page_size,
        }
    }

    /// Number of rows to render out of `total`.
    pub fn visible(&self, total: usize) -> usize {
        self.visible.min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Grow by one page once the relative scroll offset passes 90%.
    /// Returns `true` if more rows became visible.
    pub fn on_scroll(&mut self, relative_offset: f32, total: usize) -> bool {
        if relative_offset < 0.9 || !self.has_more(total) {
            return false;
        }
        self.visible = self.visible.saturating_add(self.page_size).min(total);
        true
    }

    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::Network;

    fn validator(addr: &str, name: Option<&str>, stake: u64) -> Validator {
        Validator {
            vote_account: addr.into(),
            name: name.map(Into::into),
            active_stake: stake,
            commission: 7,
            avatar_url: None,
            www_url: None,
        }
    }

    fn directory() -> Vec<Validator> {
        vec![
            validator("0xAA11", Some("Ledger by Figment"), 100),
            validator("0xbb22", Some("Chorus One"), 300),
            validator("0xcc33", None, 200),
        ]
    }

    #[test]
    fn empty_search_returns_everything() {
        let all = directory();
        assert_eq!(filter_validators(&all, "").len(), 3);
    }

    #[test]
    fn search_matches_name_ignoring_case() {
        let all = directory();
        let hits = filter_validators(&all, "CHORUS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].vote_account, "0xbb22");
    }

    #[test]
    fn search_matches_address_ignoring_case() {
        let all = directory();
        let hits = filter_validators(&all, "aa1");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].vote_account, "0xAA11");
    }

    #[test]
    fn search_matches_unnamed_by_address_only() {
        let all = directory();
        let hits = filter_validators(&all, "cc3");
        assert_eq!(hits.len(), 1);
        assert!(filter_validators(&all, "nothing here").is_empty());
    }

    #[test]
    fn search_on_every_substring_of_names() {
        let all = directory();
        for v in &all {
            let name = v.name.clone().unwrap_or_default();
            for start in 0..name.len() {
                let needle = &name[start..];
                let hits = filter_validators(&all, needle);
                assert!(hits.iter().any(|h| h.vote_account == v.vote_account));
                for h in hits {
                    let hay = format!(
                        "{} {}",
                        h.name.as_deref().unwrap_or("").to_lowercase(),
                        h.vote_account.to_lowercase()
                    );
                    assert!(hay.contains(&needle.to_lowercase()));
                }
            }
        }
    }

    #[test]
    fn featured_validator_leads() {
        let sorted = featured_first(directory(), Some("0xAA11"));
        let order: Vec<&str> = sorted.iter().map(|v| v.vote_account.as_str()).collect();
        assert_eq!(order, vec!["0xAA11", "0xbb22", "0xcc33"]);
    }

    #[test]
    fn without_featured_sorted_by_stake() {
        let sorted = featured_first(directory(), None);
        let order: Vec<&str> = sorted.iter().map(|v| v.vote_account.as_str()).collect();
        assert_eq!(order, vec!["0xbb22", "0xcc33", "0xAA11"]);
    }

    #[test]
    fn row_uses_name_or_address() {
        let unit = Unit::iota();
        let named = ValidatorRow::derive(&directory()[1], None, &unit);
        assert_eq!(named.title, "Chorus One");
        let unnamed = ValidatorRow::derive(&directory()[2], None, &unit);
        assert_eq!(unnamed.title, "0xcc33");
        assert_eq!(unnamed.icon, ValidatorIcon::Initial('C'));
        assert_eq!(unnamed.commission, "7 %");
    }

    #[test]
    fn row_marks_chosen_validator_active() {
        let unit = Unit::iota();
        let all = directory();
        let row = ValidatorRow::derive(&all[0], Some("0xAA11"), &unit);
        assert!(row.active);
        let other = ValidatorRow::derive(&all[1], Some("0xAA11"), &unit);
        assert!(!other.active);
    }

    #[test]
    fn row_prefers_avatar() {
        let mut v = validator("0x01", Some("A"), 1_000_000_000);
        v.avatar_url = Some("https://img/a.png".into());
        let row = ValidatorRow::derive(&v, None, &Unit::iota());
        assert_eq!(row.icon, ValidatorIcon::Avatar("https://img/a.png".into()));
        assert_eq!(row.total_stake, "1 IOTA");
    }

    #[test]
    fn external_link_prefers_website() {
        let mut all = directory();
        all[0].www_url = Some("https://figment.io".into());
        let explorer = ExplorerView::for_network(Network::Mainnet);
        assert_eq!(
            external_link("0xAA11", &all, Some(&explorer)).as_deref(),
            Some("https://figment.io")
        );
        assert_eq!(
            external_link("0xbb22", &all, Some(&explorer)).as_deref(),
            Some("https://explorer.iota.org/address/0xbb22")
        );
    }

    #[test]
    fn external_link_without_explorer_is_noop() {
        let all = directory();
        assert!(external_link("0xbb22", &all, None).is_none());
    }

    #[test]
    fn scroll_window_grows_near_bottom() {
        let mut window = ScrollWindow::new(20);
        assert_eq!(window.visible(55), 20);
        assert!(!window.on_scroll(0.5, 55));
        assert!(window.on_scroll(0.95, 55));
        assert_eq!(window.visible(55), 40);
        assert!(window.on_scroll(1.0, 55));
        assert_eq!(window.visible(55), 55);
        assert!(!window.on_scroll(1.0, 55));
        window.reset();
        assert_eq!(window.visible(55), 20);
    }
}
