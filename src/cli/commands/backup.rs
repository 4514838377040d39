//! `credstore backup`: write the store to another file.

use std::path::Path;

use crate::cli::output;
use crate::cli::{log_audit, open_store, Cli};
use crate::errors::{CredStoreError, Result};

/// Execute the `backup` command.
pub fn execute(cli: &Cli, dest: &str) -> Result<()> {
    let (store, path, _settings) = open_store(cli)?;
    let dest_path = std::env::current_dir()?.join(Path::new(dest));

    if dest_path == path {
        return Err(CredStoreError::CommandFailed(
            "backup destination is the store file itself".into(),
        ));
    }

    store.backup_passwords(&dest_path)?;

    let detail = format!("{} entries -> {dest}", store.len());
    log_audit(cli, "backup", None, Some(&detail));
    output::success(&format!("Backed up {} user(s) to {dest}", store.len()));

    Ok(())
}
