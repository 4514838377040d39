//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{CredStoreError, Result};
use crate::store::CredentialStore;

/// Environment variable consulted before prompting for a password.
pub const PASSWORD_ENV: &str = "CREDSTORE_PASSWORD";

/// credstore CLI: username/password-digest store backed by a flat file.
#[derive(Parser)]
#[command(
    name = "credstore",
    about = "Store, verify and back up password digests",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backing store file (default: `store_file` from .credstore.toml)
    #[arg(short, long, global = true)]
    pub file: Option<String>,

    /// Directory holding .credstore.toml and audit.db (default: .)
    #[arg(long, default_value = ".", global = true)]
    pub config_dir: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate random alphanumeric passwords
    Generate {
        /// Password length (default: `password_length` from config)
        #[arg(short, long)]
        length: Option<usize>,
        /// How many passwords to print
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Print the digest of a password
    Hash {
        /// Password (omit for interactive prompt)
        password: Option<String>,
    },

    /// Store a password for a user (add or overwrite)
    Store {
        /// Username
        username: String,
        /// Password (omit for interactive prompt)
        password: Option<String>,
        /// Generate a random password instead of reading one
        #[arg(short, long, conflicts_with = "password")]
        generate: bool,
        /// Length of the generated password
        #[arg(short, long, requires = "generate")]
        length: Option<usize>,
    },

    /// Check a password against the stored digest
    Verify {
        /// Username
        username: String,
        /// Password (omit for interactive prompt)
        password: Option<String>,
    },

    /// List all users and their digests
    List {
        /// Output format: table (default) or json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Remove a user
    Delete {
        /// Username
        username: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Write the store to another file
    Backup {
        /// Destination file (overwritten)
        dest: String,
    },

    /// Merge entries from a backup file into the store
    Load {
        /// Backup file to read
        src: String,
    },

    /// View the audit log of store operations
    Audit {
        /// Number of entries to show (default: 50)
        #[arg(long, default_value = "50")]
        last: usize,
        /// Show entries since a duration ago (e.g. 7d, 24h, 30m)
        #[arg(long)]
        since: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve `--config-dir` against the current directory.
pub fn config_dir(cli: &Cli) -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(&cli.config_dir))
}

/// Load `.credstore.toml` from the config dir.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    Settings::load(&config_dir(cli)?)
}

/// Path of the backing store file.
///
/// `--file` wins (relative to the current directory); otherwise the
/// configured `store_file` inside the config dir.
pub fn store_path(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    match &cli.file {
        Some(file) => Ok(std::env::current_dir()?.join(file)),
        None => Ok(settings.store_path(&config_dir(cli)?)),
    }
}

/// Build the configured store and fill it from the backing file, if any.
///
/// A missing backing file just means an empty store.
pub fn open_store(cli: &Cli) -> Result<(CredentialStore, PathBuf, Settings)> {
    let settings = load_settings(cli)?;
    let path = store_path(cli, &settings)?;
    let mut store = settings.build_store()?;

    if path.exists() {
        store.load_passwords(&path)?;
    }

    Ok((store, path, settings))
}

/// Get a password, trying in order:
/// 1. The value given on the command line
/// 2. `CREDSTORE_PASSWORD` env var (scripts/CI)
/// 3. Piped stdin
/// 4. Interactive prompt (with confirmation if `confirm` is set)
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn read_password(
    prompt: &str,
    inline: Option<&str>,
    confirm: bool,
) -> Result<Zeroizing<String>> {
    if let Some(pw) = inline {
        output::warning("Password provided on command line — it may appear in shell history.");
        return Ok(Zeroizing::new(pw.to_string()));
    }

    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        let trimmed = buf.trim_end_matches(['\r', '\n']);
        return Ok(Zeroizing::new(trimmed.to_string()));
    }

    let mut input = dialoguer::Password::new().with_prompt(prompt);
    if confirm {
        input = input.with_confirmation("Confirm password", "Passwords do not match, try again");
    }
    let pw = input
        .allow_empty_password(true)
        .interact()
        .map_err(|e| CredStoreError::CommandFailed(format!("password prompt: {e}")))?;

    Ok(Zeroizing::new(pw))
}

/// Record an audit event for this invocation.  Never fails the caller.
pub fn log_audit(cli: &Cli, op: &str, username: Option<&str>, details: Option<&str>) {
    #[cfg(feature = "audit-log")]
    {
        let Ok(dir) = config_dir(cli) else {
            return;
        };
        if let Some(audit) = crate::audit::AuditLog::open(&dir) {
            audit.log(op, username, details);
        }
    }

    // Nothing to record into when the audit log is compiled out.
    #[cfg(not(feature = "audit-log"))]
    let _ = (cli, op, username, details);
}
