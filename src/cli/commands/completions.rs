//! `credstore completions`: print a shell completion script to stdout.
//!
//! ```text
//! credstore completions bash > ~/.local/share/bash-completion/completions/credstore
//! credstore completions zsh > ~/.zfunc/_credstore
//! ```

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::errors::Result;

/// Binary name baked into the generated scripts.
const BIN_NAME: &str = "credstore";

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    let script = render(shell);
    let mut stdout = io::stdout().lock();
    stdout.write_all(&script)?;
    stdout.flush()?;
    Ok(())
}

/// Render the completion script for `shell` into memory.
fn render(shell: Shell) -> Vec<u8> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    buf
}
