//! Enum rendering.
//!
//! Turns a [`ParseResult`] into a C++ enum declaration:
//!
//! ```text
//! enum class eNatives : std::uint64_t
//! {
//! 	WAIT = 0x4EDE34FBADD967A6,
//! };
//! ```
//!
//! One enumerator is written per entry, in scan order. Output goes through
//! [`std::io::Write`] one line at a time, so a file target is opened once
//! and written sequentially.

mod padding;

use crate::error::{Error, Result};
use crate::parser::ParseResult;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub use padding::{padding_count, padding_spaces, PaddingStyle};

/// Default output file name, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "natives_output.h";

/// Configuration for enum rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Name of the generated enum (default: `eNatives`)
    pub enum_name: String,
    /// Underlying integer type (default: `std::uint64_t`)
    pub underlying_type: String,
    /// Indentation before each enumerator (default: one tab)
    pub indent: String,
    /// Pad names so the `=` column lines up
    pub padding: bool,
    /// How padding is applied when enabled
    pub padding_style: PaddingStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enum_name: "eNatives".to_string(),
            underlying_type: "std::uint64_t".to_string(),
            indent: "\t".to_string(),
            padding: false,
            padding_style: PaddingStyle::default(),
        }
    }
}

impl RenderConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the enum name
    pub fn enum_name(mut self, name: impl Into<String>) -> Self {
        self.enum_name = name.into();
        self
    }

    /// Sets the underlying integer type
    pub fn underlying_type(mut self, ty: impl Into<String>) -> Self {
        self.underlying_type = ty.into();
        self
    }

    /// Sets the enumerator indentation
    pub fn indent(mut self, s: impl Into<String>) -> Self {
        self.indent = s.into();
        self
    }

    /// Enables or disables name padding
    pub fn padding(mut self, enabled: bool) -> Self {
        self.padding = enabled;
        self
    }

    /// Sets the padding style
    pub fn padding_style(mut self, style: PaddingStyle) -> Self {
        self.padding_style = style;
        self
    }
}

/// Writes parse results as an enum declaration
#[derive(Debug, Clone, Default)]
pub struct EnumRenderer {
    config: RenderConfig,
}

impl EnumRenderer {
    /// Creates a renderer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with custom configuration
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Writes the enum, line by line, to `out`
    pub fn render_to<W: Write>(&self, result: &ParseResult, out: &mut W) -> io::Result<()> {
        let config = &self.config;

        writeln!(out, "enum class {} : {}", config.enum_name, config.underlying_type)?;
        writeln!(out, "{{")?;

        for entry in result.entries() {
            let spaces = if config.padding {
                padding_spaces(
                    config.padding_style,
                    entry.name_len(),
                    result.max_name_length(),
                )
            } else {
                0
            };

            writeln!(
                out,
                "{}{}{:spaces$} = {},",
                config.indent,
                entry.name(),
                "",
                entry.hash(),
            )?;
        }

        writeln!(out, "}};")
    }

    /// Renders the enum into a string
    pub fn render(&self, result: &ParseResult) -> String {
        let mut buf = Vec::new();
        self.render_to(result, &mut buf)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Creates or truncates `path` and writes the enum into it
    pub fn write_file(&self, result: &ParseResult, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::file_write(path, e))?;

        let mut out = BufWriter::new(file);
        self.render_to(result, &mut out)
            .and_then(|()| out.flush())
            .map_err(|e| Error::file_write(path, e))?;

        debug!("Wrote {} enumerators to {}", result.len(), path.display());
        Ok(())
    }
}
