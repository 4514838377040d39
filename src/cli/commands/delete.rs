//! `credstore delete`: remove a user from the store.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{log_audit, open_store, Cli};
use crate::errors::{CredStoreError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, username: &str, force: bool) -> Result<()> {
    let (mut store, path, _settings) = open_store(cli)?;

    if !store.contains_user(username) {
        return Err(CredStoreError::UserNotFound(username.to_string()));
    }

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete user '{username}'?"))
            .default(false)
            .interact()
            .map_err(|e| CredStoreError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    store.remove_user(username);
    store.backup_passwords(&path)?;

    log_audit(cli, "delete", Some(username), None);
    output::success(&format!("Deleted user '{username}'"));

    Ok(())
}
