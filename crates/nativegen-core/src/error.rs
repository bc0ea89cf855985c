//! Error types for the nativegen-core library.
//!
//! Every failure is terminal for a run: nothing here is retried or skipped.
//! [`DeclarationError`] describes which structural marker a declaration line
//! was missing, and [`Error::MalformedDeclaration`] attaches the line number.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for nativegen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for all nativegen operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Input file does not exist or could not be opened
    #[error("failed to open input file '{path}': {source}")]
    FileNotAccessible {
        /// Path that could not be opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input file was opened but could not be drained
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A declaration line lacks the structure needed for extraction
    #[error("malformed declaration on line {line_number}: {source}")]
    MalformedDeclaration {
        /// 1-based line number in the input
        line_number: usize,
        /// What was missing
        #[source]
        source: DeclarationError,
    },
}

/// Structural problems found while extracting from a declaration line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeclarationError {
    /// Line ends before the name search can begin
    #[error("line is too short to hold a return type and name")]
    TooShort,

    /// No space separates the return type from the name
    #[error("no space after the return type")]
    MissingNameSeparator,

    /// No `(` follows the name
    #[error("no '(' after the native name")]
    MissingArgumentList,

    /// Name bounds enclose nothing
    #[error("native name is empty")]
    EmptyName,

    /// No `>` precedes the hash token
    #[error("no '>' marker before the hash")]
    MissingTypeClose,

    /// Fewer than 18 characters follow the hash start
    #[error("hash token truncated: expected {expected} characters, found {available}")]
    TruncatedHash {
        /// Required token width
        expected: usize,
        /// Characters actually available from the token start
        available: usize,
    },
}

impl Error {
    /// Creates a new input-not-accessible error
    pub fn file_not_accessible(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileNotAccessible {
            path: path.into(),
            source,
        }
    }

    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new file write error
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a new malformed declaration error for a 1-based line number
    pub fn malformed(line_number: usize, source: DeclarationError) -> Self {
        Self::MalformedDeclaration {
            line_number,
            source,
        }
    }

    /// Returns true if the input file could not be opened at all
    pub fn is_input_missing(&self) -> bool {
        matches!(self, Self::FileNotAccessible { .. })
    }
}
