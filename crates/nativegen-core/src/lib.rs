//! # nativegen-core
//!
//! A library for turning a natives header into a C++ enum of native hashes.
//!
//! This crate provides the core functionality for:
//! - Loading a header into memory as lines
//! - Recognising native declaration lines and extracting their name and hash
//! - Rendering the collected entries as an `enum class` declaration
//!
//! ## Architecture
//!
//! - [`parser`]: Line loading, classification, extraction and the scan driver
//! - [`render`]: Enum formatting and output file writing
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use nativegen_core::{parse_file, EnumRenderer, RenderConfig};
//!
//! let result = parse_file("natives.h")?;
//! let renderer = EnumRenderer::with_config(RenderConfig::new().padding(true));
//! renderer.write_file(&result, "natives_output.h")?;
//! # Ok::<(), nativegen_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod error;
pub mod parser;
pub mod render;

// Re-export primary types for convenience
pub use error::{DeclarationError, Error, Result};
pub use parser::{parse_file, read_lines, scan, Entry, ParseResult};
pub use render::{EnumRenderer, PaddingStyle, RenderConfig, DEFAULT_OUTPUT_FILE};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
