//! Interactive prompts. Messages go through [`crate::cli::output`].

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::core::CommandError;

/// Yes/no question answered on the terminal.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> dialoguer::Result<bool> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
}

/// Reads one line of free text for a command field.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()?)
}
