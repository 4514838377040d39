//! Flat-file backup format.
//!
//! One record per line:
//!
//! ```text
//! <username>:<digest>\n
//! ```
//!
//! Lines are split on `:` and must yield exactly two fields.  A username
//! that itself contains `:` therefore cannot be read back; such lines (and
//! blank lines) are rejected as malformed.  The digest is taken verbatim.

use std::io::{BufRead, Write};

use crate::errors::{CredStoreError, Result};

/// Field separator between username and digest.
pub const DELIMITER: char = ':';

/// Render a single record, including the trailing newline.
pub fn format_line(username: &str, digest: &str) -> String {
    format!("{username}{DELIMITER}{digest}\n")
}

/// Split one line into `(username, digest)`.
///
/// Trailing whitespace (including `\r`) is stripped first.  `line_no` is
/// 1-based and only used for the error message.
pub fn parse_line(line_no: usize, line: &str) -> Result<(&str, &str)> {
    let trimmed = line.trim_end();
    let mut fields = trimmed.split(DELIMITER);

    match (fields.next(), fields.next(), fields.next()) {
        (Some(username), Some(digest), None) => Ok((username, digest)),
        _ => Err(CredStoreError::MalformedLine {
            line: line_no,
            content: trimmed.to_string(),
        }),
    }
}

/// Write every record to `writer` in the order given.
pub fn write_records<'a, W, I>(writer: &mut W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (username, digest) in records {
        writer.write_all(format_line(username, digest).as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Stream records from `reader`, handing each one to `sink` as soon as it
/// is parsed.
///
/// Stops at the first unreadable or malformed line; records already handed
/// to `sink` stay where the caller put them.  Returns the number of records
/// read.
pub fn read_records<R, F>(reader: R, mut sink: F) -> Result<usize>
where
    R: BufRead,
    F: FnMut(&str, &str),
{
    let mut count = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let (username, digest) = parse_line(idx + 1, &line)?;
        sink(username, digest);
        count += 1;
    }

    Ok(count)
}
