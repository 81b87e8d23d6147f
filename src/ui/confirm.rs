//! User confirmation prompts for destructive operations

use dialoguer::{theme::ColorfulTheme, Confirm};
use log::warn;

/// Ask the user to confirm a destructive action
///
/// `assume_yes` (the `--yes` flag) skips the prompt. In batch mode without
/// `--yes` the action is declined, since there is nobody to ask.
pub fn confirm_action(
    prompt: &str,
    assume_yes: bool,
    batch: bool,
) -> Result<bool, dialoguer::Error> {
    if assume_yes {
        return Ok(true);
    }
    if batch {
        warn!("{} declined in batch mode (use --yes to confirm)", prompt);
        return Ok(false);
    }

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
}
