use serde::{Deserialize, Serialize};

/// Title of the rename wallet screen.
pub const RENAME_WALLET_TITLE: &str = "Rename Wallet";

/// Label of the save action.
pub const SAVE_WALLET_NAME_TITLE: &str = "Save";

/// Label of the name input field.
pub const WALLET_NAME_TITLE: &str = "Enter Wallet Name";

/// What the rename screen shows at a given moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// The locally stored wallet name, used as the input's current text.
    pub text: Option<String>,
    /// The ENS name resolved for the address, shown as a placeholder.
    pub placeholder: Option<String>,
    pub title: String,
}

impl ViewState {
    pub fn new(text: Option<String>, placeholder: Option<String>) -> Self {
        Self {
            text,
            placeholder,
            title: RENAME_WALLET_TITLE.to_string(),
        }
    }

    /// The name to display: the stored name, falling back to the placeholder.
    pub fn display_name(&self) -> Option<&str> {
        self.text.as_deref().or(self.placeholder.as_deref())
    }
}
