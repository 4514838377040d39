//! `credstore load`: merge a backup file into the store.
//!
//! Entries from the file overwrite users already in the store.  A
//! malformed line aborts the command and nothing is written back.

use std::path::Path;

use crate::cli::output;
use crate::cli::{log_audit, open_store, Cli};
use crate::errors::{CredStoreError, Result};

/// Execute the `load` command.
pub fn execute(cli: &Cli, src: &str) -> Result<()> {
    let (mut store, path, _settings) = open_store(cli)?;
    let src_path = std::env::current_dir()?.join(Path::new(src));

    if src_path == path {
        return Err(CredStoreError::CommandFailed(
            "load source is the store file itself".into(),
        ));
    }

    let before = store.len();
    let count = store.load_passwords(&src_path)?;
    store.backup_passwords(&path)?;

    let added = store.len() - before;
    let detail = format!("{count} entries from {src}");
    log_audit(cli, "load", None, Some(&detail));

    output::success(&format!(
        "Loaded {count} entries from {src} ({added} new, {} total)",
        store.len()
    ));

    Ok(())
}
