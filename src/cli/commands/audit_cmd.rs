//! `credstore audit`: display the audit log.
//!
//! Usage:
//!   credstore audit               # show last 50 entries
//!   credstore audit --last 20     # show last 20
//!   credstore audit --since 7d    # entries from last 7 days

use chrono::{DateTime, TimeDelta, Utc};

use crate::cli::Cli;
use crate::errors::{CredStoreError, Result};

/// Execute the `audit` command.
#[cfg(feature = "audit-log")]
pub fn execute(cli: &Cli, last: usize, since: Option<&str>) -> Result<()> {
    use crate::audit::AuditLog;
    use crate::cli::output;

    let dir = crate::cli::config_dir(cli)?;

    let audit = AuditLog::open(&dir)
        .ok_or_else(|| CredStoreError::AuditError("failed to open audit database".into()))?;

    let since_dt = since.map(parse_duration).transpose()?;

    let entries = audit.query(last, since_dt)?;

    if entries.is_empty() {
        output::info("No audit entries found.");
        return Ok(());
    }

    print_audit_table(&entries);

    Ok(())
}

/// Without the `audit-log` feature there is nothing to show.
#[cfg(not(feature = "audit-log"))]
pub fn execute(cli: &Cli, last: usize, since: Option<&str>) -> Result<()> {
    let _ = (cli, last, since.map(parse_duration));
    Err(CredStoreError::AuditError(
        "audit log not compiled — rebuild with `--features audit-log`".into(),
    ))
}

/// Parse a human-friendly duration string like "7d", "24h", "30m" into
/// the point in time that far back from now.
fn parse_duration(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    let (num_str, unit) = if let Some(s) = input.strip_suffix('d') {
        (s, 'd')
    } else if let Some(s) = input.strip_suffix('h') {
        (s, 'h')
    } else if let Some(s) = input.strip_suffix('m') {
        (s, 'm')
    } else {
        return Err(CredStoreError::CommandFailed(format!(
            "invalid duration '{input}' — use format like 7d, 24h, or 30m"
        )));
    };

    let num: i64 = num_str.parse().map_err(|_| {
        CredStoreError::CommandFailed(format!(
            "invalid duration '{input}' — number part is not valid"
        ))
    })?;

    let delta = match unit {
        'd' => TimeDelta::try_days(num),
        'h' => TimeDelta::try_hours(num),
        _ => TimeDelta::try_minutes(num),
    };

    delta
        .and_then(|delta| Utc::now().checked_sub_signed(delta))
        .ok_or_else(|| {
            CredStoreError::CommandFailed(format!(
                "invalid duration '{input}' — value out of range"
            ))
        })
}

/// Print audit entries in a formatted table.
#[cfg(feature = "audit-log")]
fn print_audit_table(entries: &[crate::audit::AuditEntry]) {
    use comfy_table::{ContentArrangement, Table};
    use console::style;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Operation", "User", "Details"]);

    for entry in entries {
        table.add_row(vec![
            entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            colorize_operation(&entry.operation, entry.details.as_deref()),
            entry.username.clone().unwrap_or_else(|| "-".into()),
            entry.details.clone().unwrap_or_else(|| "-".into()),
        ]);
    }

    println!(
        "{}",
        style(format!("{} audit entries:", entries.len())).bold()
    );
    println!("{table}");
}

/// Colorize operation names for display.  Failed verifications stand out.
#[cfg(feature = "audit-log")]
fn colorize_operation(op: &str, details: Option<&str>) -> String {
    use console::style;

    match (op, details) {
        ("verify", Some("mismatch")) => style(op).red().bold().to_string(),
        ("verify", _) => style(op).green().to_string(),
        ("store", _) => style(op).blue().to_string(),
        ("delete", _) => style(op).red().to_string(),
        ("backup" | "load", _) => style(op).cyan().to_string(),
        _ => op.to_string(),
    }
}
