//! `credstore verify`: check a password against the stored digest.

use crate::cli::output;
use crate::cli::{log_audit, open_store, read_password, Cli};
use crate::errors::{CredStoreError, Result};

/// Execute the `verify` command.
///
/// Unknown users and wrong passwords fail the same way.
pub fn execute(cli: &Cli, username: &str, password: Option<&str>) -> Result<()> {
    let (store, _path, _settings) = open_store(cli)?;

    let password = read_password(&format!("Password for {username}"), password, false)?;
    let matched = store.verify_password(username, &password);

    log_audit(
        cli,
        "verify",
        Some(username),
        Some(if matched { "match" } else { "mismatch" }),
    );

    if !matched {
        return Err(CredStoreError::VerificationFailed(username.to_string()));
    }

    output::success(&format!("Password verified for '{username}'"));
    Ok(())
}
