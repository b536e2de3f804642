use jota_staking::validators::ScrollWindow;
use jota_staking::{DelegationWizard, Validator};

/// Id of the validator search box, focused when the validator step shows.
pub(crate) const SEARCH_INPUT_ID: &str = "delegate-search-bar";

// -- Delegation modal --

pub(crate) struct Delegation {
    pub(crate) wizard: DelegationWizard,
    /// Ordered validator directory for the account's currency.
    pub(crate) validators: Vec<Validator>,
    pub(crate) search: String,
    pub(crate) window: ScrollWindow,
    /// Raw text of the amount field; the draft holds the parsed value.
    pub(crate) amount_input: String,
    pub(crate) amount_error: Option<String>,
    pub(crate) broadcasting: bool,
    pub(crate) saving: bool,
}

impl Delegation {
    pub(crate) fn new(wizard: DelegationWizard, validators: Vec<Validator>, page_size: usize) -> Self {
        Self {
            wizard,
            validators,
            search: String::new(),
            window: ScrollWindow::new(page_size),
            amount_input: String::new(),
            amount_error: None,
            broadcasting: false,
            saving: false,
        }
    }
}
