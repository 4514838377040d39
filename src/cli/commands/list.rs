//! `credstore list`: display every user and digest.
//!
//! Supported formats:
//! - `table` (default): human-readable table
//! - `json`: JSON object { "username": "digest", ... } in store order

use std::path::Path;

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::config::Settings;
use crate::errors::{CredStoreError, Result};
use crate::store::PasswordMap;

/// Execute the `list` command.
pub fn execute(cli: &Cli, format: &str) -> Result<()> {
    let (store, path, settings) = open_store(cli)?;
    let passwords = store.get_all_passwords();

    match format {
        "table" => {
            output::info(&summary_line(&path, passwords.len(), &settings));
            output::print_passwords_table(passwords);
        }
        "json" => println!("{}", format_as_json(passwords)?),
        other => {
            return Err(CredStoreError::CommandFailed(format!(
                "unknown list format '{other}' — use 'table' or 'json'"
            )));
        }
    }

    Ok(())
}

/// One-line header for the table view: file, user count, hash and generator.
fn summary_line(path: &Path, users: usize, settings: &Settings) -> String {
    format!(
        "{} — {users} user(s), {}, generator: {}",
        path.display(),
        settings.hash_algorithm,
        settings.generator
    )
}

/// Format the map as a pretty JSON object, keeping store order.
fn format_as_json(passwords: &PasswordMap) -> Result<String> {
    serde_json::to_string_pretty(passwords)
        .map_err(|e| CredStoreError::SerializationError(format!("JSON list: {e}")))
}
