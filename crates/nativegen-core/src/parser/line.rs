//! Single-line classification and extraction.
//!
//! A declaration line in a natives header looks like:
//!
//! ```text
//! \tstatic Any WAIT(int ms) { return invoke<Void>(0x4EDE34FBADD967A6, ms); }
//! ```
//!
//! The name sits between the first space after the return type and the
//! following `(`. The hash is the fixed-width token that begins two
//! characters after the first `>` on the line. All offsets are counted in
//! characters, not bytes.

use crate::error::DeclarationError;

/// Prefix that marks a declaration line: one tab followed by `static`
pub const DECLARATION_MARKER: &str = "\tstatic";

/// Character offset at which the search for the name separator begins
pub const NAME_SEARCH_OFFSET: usize = 8;

/// Terminates the name; the argument list starts here
pub const ARGUMENT_LIST_OPEN: char = '(';

/// Closing marker of the type annotation that precedes the hash
pub const TYPE_CLOSE_MARKER: char = '>';

/// Distance in characters from the type-close marker to the hash token
pub const HASH_OFFSET: usize = 2;

/// Width of every hash token, e.g. `0x4EDE34FBADD967A6`
pub const HASH_LENGTH: usize = 18;

/// One parsed native declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    hash: String,
}

impl Entry {
    /// Parses a declaration line into an entry.
    ///
    /// The line must already satisfy [`is_declaration_line`].
    pub fn from_line(line: &str) -> Result<Self, DeclarationError> {
        Ok(Self {
            name: extract_name(line)?.to_string(),
            hash: extract_hash(line)?.to_string(),
        })
    }

    /// The declared function identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The opaque 18-character hash token, copied verbatim
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Length of the name in characters
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }
}

/// Returns true if the line declares a native.
///
/// Lines shorter than the marker are rejected without further inspection.
pub fn is_declaration_line(line: &str) -> bool {
    line.len() >= DECLARATION_MARKER.len() && line.starts_with(DECLARATION_MARKER)
}

/// Extracts the native name from a declaration line.
pub fn extract_name(line: &str) -> Result<&str, DeclarationError> {
    let search_start = char_offset(line, NAME_SEARCH_OFFSET).ok_or(DeclarationError::TooShort)?;
    let tail = &line[search_start..];

    let separator = tail
        .find(' ')
        .ok_or(DeclarationError::MissingNameSeparator)?;
    let rest = &tail[separator + 1..];

    let length = rest
        .find(ARGUMENT_LIST_OPEN)
        .ok_or(DeclarationError::MissingArgumentList)?;
    let name = &rest[..length];

    if name.is_empty() {
        return Err(DeclarationError::EmptyName);
    }
    Ok(name)
}

/// Extracts the hash token from a declaration line.
pub fn extract_hash(line: &str) -> Result<&str, DeclarationError> {
    let close = line
        .find(TYPE_CLOSE_MARKER)
        .ok_or(DeclarationError::MissingTypeClose)?;
    let after_close = &line[close + TYPE_CLOSE_MARKER.len_utf8()..];

    let truncated = |available| DeclarationError::TruncatedHash {
        expected: HASH_LENGTH,
        available,
    };

    let start = char_offset(after_close, HASH_OFFSET - 1).ok_or_else(|| truncated(0))?;
    let region = &after_close[start..];
    let end = char_offset(region, HASH_LENGTH).ok_or_else(|| truncated(region.chars().count()))?;

    Ok(&region[..end])
}

/// Byte offset of the `n`th character, or `None` if the text holds fewer than `n` characters.
///
/// `n` equal to the character count yields the end of the text.
fn char_offset(text: &str, n: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(n)
}
