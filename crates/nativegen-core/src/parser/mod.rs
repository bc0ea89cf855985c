//! Natives header parsing.
//!
//! Parsing happens in two separate phases:
//!
//! 1. [`read_lines`] drains the whole header into memory and closes it
//! 2. [`scan`] walks the lines once, front to back, collecting an [`Entry`]
//!    for every declaration line
//!
//! Lines that are not declarations are skipped silently. A declaration line
//! that cannot be extracted aborts the scan.
//!
//! ```no_run
//! use nativegen_core::parser::{read_lines, scan};
//!
//! let lines = read_lines("natives.h")?;
//! let result = scan(&lines)?;
//! for entry in result.entries() {
//!     println!("{} = {}", entry.name(), entry.hash());
//! }
//! # Ok::<(), nativegen_core::Error>(())
//! ```

mod line;

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

pub use line::{
    extract_hash, extract_name, is_declaration_line, Entry, ARGUMENT_LIST_OPEN,
    DECLARATION_MARKER, HASH_LENGTH, HASH_OFFSET, NAME_SEARCH_OFFSET, TYPE_CLOSE_MARKER,
};

/// Line count of the natives header the tool was first written against
pub const DEFAULT_LINE_CAPACITY: usize = 5354;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Entries collected by a single forward scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    entries: Vec<Entry>,
    max_name_length: usize,
    lines_scanned: usize,
}

impl ParseResult {
    /// Creates an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and raises the running maximum name length
    pub fn push(&mut self, entry: Entry) {
        self.max_name_length = self.max_name_length.max(entry.name_len());
        self.entries.push(entry);
    }

    /// Entries in input line order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Longest name length seen so far, in characters
    pub fn max_name_length(&self) -> usize {
        self.max_name_length
    }

    /// Number of lines the scan inspected
    pub fn lines_scanned(&self) -> usize {
        self.lines_scanned
    }

    /// Number of declarations collected
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no declarations were found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scans lines for native declarations.
///
/// Stops at the first declaration line that cannot be extracted and reports
/// its 1-based line number.
pub fn scan<I, S>(lines: I) -> Result<ParseResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = ParseResult::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        result.lines_scanned += 1;

        if !is_declaration_line(line) {
            trace!("Line {}: skipped", index + 1);
            continue;
        }

        let entry = Entry::from_line(line).map_err(|e| Error::malformed(index + 1, e))?;
        trace!(
            "Line {}: {} = {}",
            index + 1,
            entry.name(),
            entry.hash()
        );
        result.push(entry);
    }

    debug!(
        "Scan complete: {} declarations in {} lines, longest name {}",
        result.len(),
        result.lines_scanned,
        result.max_name_length
    );
    Ok(result)
}

/// Reads a whole file into memory as lines with terminators stripped.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    read_lines_with_capacity(path, DEFAULT_LINE_CAPACITY)
}

/// Reads a whole file into memory, pre-sizing the line buffer.
///
/// `capacity` is only an allocation hint.
pub fn read_lines_with_capacity(path: impl AsRef<Path>, capacity: usize) -> Result<Vec<String>> {
    let path = path.as_ref();

    let mut data = Vec::new();
    {
        let mut file = File::open(path).map_err(|e| Error::file_not_accessible(path, e))?;
        file.read_to_end(&mut data)
            .map_err(|e| Error::file_read(path, e))?;
    }
    trace!("Read {} bytes from {}", data.len(), path.display());

    let text = String::from_utf8_lossy(&data);
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&text);

    let mut lines = Vec::with_capacity(capacity);
    lines.extend(split_lines(text).map(str::to_owned));
    Ok(lines)
}

/// Splits text at `\r\n`, `\n` or a lone `\r`, stripping the terminator.
///
/// A trailing terminator does not yield an extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text).filter(|t| !t.is_empty());

    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let terminator = if current[end..].starts_with("\r\n") { 2 } else { 1 };
                let next = &current[end + terminator..];
                rest = Some(next).filter(|t| !t.is_empty());
                Some(&current[..end])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Reads and scans a natives header in one call
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParseResult> {
    let lines = read_lines(path)?;
    scan(&lines)
}
