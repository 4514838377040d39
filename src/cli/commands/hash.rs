//! `credstore hash`: print the digest of a password.

use crate::cli::{load_settings, read_password, Cli};
use crate::errors::Result;

/// Execute the `hash` command.
pub fn execute(cli: &Cli, password: Option<&str>) -> Result<()> {
    let settings = load_settings(cli)?;
    let store = settings.build_store()?;

    let password = read_password("Password to hash", password, false)?;
    println!("{}", store.hash_password(&password)?);

    Ok(())
}
