//! `credstore store`: add or overwrite a user's password digest.

use crate::cli::output;
use crate::cli::{log_audit, open_store, read_password, Cli};
use crate::errors::Result;

/// Execute the `store` command.
pub fn execute(
    cli: &Cli,
    username: &str,
    password: Option<&str>,
    generate: bool,
    length: Option<usize>,
) -> Result<()> {
    let (mut store, path, settings) = open_store(cli)?;

    // Either a fresh random password or one supplied by the user.
    let generated = if generate {
        let length = length.unwrap_or(settings.password_length);
        Some(store.generate_password(length))
    } else {
        None
    };

    let existed = store.contains_user(username);

    match &generated {
        Some(pw) => store.store_password(username, pw)?,
        None => {
            let pw = read_password(&format!("Password for {username}"), password, true)?;
            store.store_password(username, &pw)?;
        }
    }

    store.backup_passwords(&path)?;

    let op_detail = if existed { "updated" } else { "added" };
    log_audit(cli, "store", Some(username), Some(op_detail));

    output::success(&format!(
        "User '{}' {} in {} ({} total, {})",
        username,
        op_detail,
        path.display(),
        store.len(),
        store.hash_algorithm()
    ));

    if let Some(pw) = generated {
        output::info("Generated password (shown once):");
        println!("{pw}");
    }

    Ok(())
}
