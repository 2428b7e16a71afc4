use dialoguer::{Confirm, Input};

use crate::error::AppError;

/// Prompt for a wallet name, pre-filled with the current one.
/// An empty answer is allowed and clears the name.
pub fn prompt_wallet_name(label: &str, current: Option<&str>) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(current.unwrap_or_default())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AppError::PromptError(e.to_string()))
}

/// Ask the user to confirm an action.
pub fn confirm(prompt: &str) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::PromptError(e.to_string()))
}
