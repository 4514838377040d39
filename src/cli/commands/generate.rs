//! `credstore generate`: print random alphanumeric passwords.

use crate::cli::{load_settings, Cli};
use crate::errors::Result;

/// Execute the `generate` command.
///
/// Nothing is stored; the passwords are only printed, one per line.
pub fn execute(cli: &Cli, length: Option<usize>, count: usize) -> Result<()> {
    let settings = load_settings(cli)?;
    let mut store = settings.build_store()?;
    let length = length.unwrap_or(settings.password_length);

    for _ in 0..count {
        println!("{}", store.generate_password(length));
    }

    Ok(())
}
