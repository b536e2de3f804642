//! Flat key to string catalogue.
//!
//! Only English ships today. A missing key renders as the key itself so a gap
//! in the catalogue is visible rather than blank.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::{Result, StakingError};

const EN: &str = include_str!("../locales/en.json");

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    strings: HashMap<String, String>,
}

impl Catalog {
    pub fn english() -> Self {
        Self::from_json(EN).unwrap_or_default()
    }

    /// Catalogue for `locale`; unknown locales fall back to English.
    pub fn for_locale(locale: &str) -> Self {
        if !locale.starts_with("en") {
            tracing::warn!(locale, "no catalogue for locale, using English");
        }
        Self::english()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let strings = serde_json::from_str(json)
            .map_err(|e| StakingError::Storage(format!("Invalid catalogue: {e}")))?;
        Ok(Self { strings })
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Translate and substitute `{name}` placeholders.
    pub fn t_with<'a>(&'a self, key: &'a str, args: &[(&str, &str)]) -> Cow<'a, str> {
        let text = self.t(key);
        if args.is_empty() {
            return Cow::Borrowed(text);
        }
        let mut out = text.to_string();
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        Cow::Owned(out)
    }
}
