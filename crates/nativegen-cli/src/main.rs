//! nativegen - Generate a C++ enum of native hashes from a natives header
//!
//! Reads a natives header, collects every `\tstatic` declaration's name and
//! hash, and writes them as `enum class eNatives : std::uint64_t`.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use nativegen_core::{parse_file, EnumRenderer, PaddingStyle, RenderConfig, DEFAULT_OUTPUT_FILE};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\nsyntax error!\nrequired arguments: string <natives_path> bool <use_padding>";

const INPUT_MISSING: &str = "failed to find input natives.h file.";

/// Generate a C++ enum of native hashes from a natives header
#[derive(Parser, Debug)]
#[command(name = "nativegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the natives header to read
    natives_path: PathBuf,

    /// Pad names so the `=` column lines up (true or false)
    #[arg(value_parser = parse_flag, action = clap::ArgAction::Set)]
    use_padding: bool,

    /// Output file, overwritten if present
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Name of the generated enum
    #[arg(long, default_value = "eNatives")]
    enum_name: String,

    /// Underlying integer type of the generated enum
    #[arg(long, default_value = "std::uint64_t")]
    underlying_type: String,

    /// How padding is applied when enabled
    #[arg(long, value_enum, default_value = "append")]
    padding_style: PaddingMode,

    /// Print the enum to stdout instead of writing the output file
    #[arg(long)]
    dry_run: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Padding application mode
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PaddingMode {
    /// Append the computed padding count as spaces
    Append,
    /// Pad the name to the computed width
    Column,
}

impl From<PaddingMode> for PaddingStyle {
    fn from(mode: PaddingMode) -> Self {
        match mode {
            PaddingMode::Append => PaddingStyle::Append,
            PaddingMode::Column => PaddingStyle::Column,
        }
    }
}

/// Parses a `true`/`false` literal, ignoring case and surrounding whitespace
fn parse_flag(value: &str) -> std::result::Result<bool, String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("expected 'true' or 'false', got '{value}'"))
    }
}

/// Exit status when arguments are missing
const EXIT_USAGE: u8 = 2;

/// Exit status when the input header cannot be opened
const EXIT_INPUT_MISSING: u8 = 1;

fn main() -> Result<ExitCode> {
    execute(std::env::args_os()).map(ExitCode::from)
}

/// Parse arguments, run the conversion and map the outcome to an exit status
fn execute<I, T>(args: I) -> Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{USAGE}");
            return Ok(EXIT_USAGE);
        }
        Err(e) => e.exit(),
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => Ok(0),
        Err(e) if is_input_missing(&e) => {
            debug!("{:#}", e);
            println!("{INPUT_MISSING}");
            Ok(EXIT_INPUT_MISSING)
        }
        Err(e) => Err(e),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // A subscriber may already be installed when called more than once
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn is_input_missing(err: &anyhow::Error) -> bool {
    err.downcast_ref::<nativegen_core::Error>()
        .is_some_and(nativegen_core::Error::is_input_missing)
}

fn render_config(cli: &Cli) -> RenderConfig {
    RenderConfig::new()
        .enum_name(&cli.enum_name)
        .underlying_type(&cli.underlying_type)
        .padding(cli.use_padding)
        .padding_style(cli.padding_style.into())
}

/// Parse the header completely, then write the enum
fn run(cli: &Cli) -> Result<()> {
    let result = parse_file(&cli.natives_path)
        .with_context(|| format!("Failed to parse natives: {}", cli.natives_path.display()))?;

    if result.is_empty() {
        warn!(
            "No declarations found in {}",
            cli.natives_path.display()
        );
    }

    let renderer = EnumRenderer::with_config(render_config(cli));

    if cli.dry_run {
        print!("{}", renderer.render(&result));
        return Ok(());
    }

    renderer
        .write_file(&result, &cli.output)
        .with_context(|| format!("Failed to write output: {}", cli.output.display()))?;

    info!(
        "Wrote {} natives from {} lines to {} (longest name {})",
        result.len(),
        result.lines_scanned(),
        cli.output.display(),
        result.max_name_length()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const HEADER: &str = "#pragma once\n\
        namespace SYSTEM\n\
        {\n\
        \tstatic Any WAIT(int ms) { return invoke<Void>(0x4EDE34FBADD967A6, ms); } // 0x4EDE34FBADD967A6 b323\n\
        \tstatic int START_NEW_SCRIPT(char* scriptName, int stackSize) { return invoke<int>(0xE81651AD79516E48, scriptName, stackSize); }\n\
        }\n";

    fn cli_for(dir: &Path, input: &Path, padding: &str) -> Cli {
        let output = dir.join(DEFAULT_OUTPUT_FILE);
        Cli::try_parse_from([
            OsStr::new("nativegen"),
            input.as_os_str(),
            OsStr::new(padding),
            OsStr::new("--output"),
            output.as_os_str(),
        ])
        .unwrap()
    }

    fn write_header(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("natives.h");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Ok(true));
        assert_eq!(parse_flag("False"), Ok(false));
        assert_eq!(parse_flag(" TRUE "), Ok(true));
        assert!(parse_flag("yes").is_err());
        assert!(parse_flag("1").is_err());
    }

    #[test]
    fn test_missing_arguments() {
        let err = Cli::try_parse_from(["nativegen", "natives.h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["nativegen"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_execute_missing_arguments_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = write_header(dir.path(), HEADER);
        let output = dir.path().join(DEFAULT_OUTPUT_FILE);

        let status = execute([
            OsStr::new("nativegen"),
            input.as_os_str(),
            OsStr::new("--output"),
            output.as_os_str(),
        ])
        .unwrap();

        assert_eq!(status, EXIT_USAGE);
        assert!(!output.exists());
    }

    #[test]
    fn test_execute_missing_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.h");
        let output = dir.path().join(DEFAULT_OUTPUT_FILE);

        let status = execute([
            OsStr::new("nativegen"),
            input.as_os_str(),
            OsStr::new("true"),
            OsStr::new("--output"),
            output.as_os_str(),
        ])
        .unwrap();

        assert_eq!(status, EXIT_INPUT_MISSING);
        assert!(!output.exists());
    }

    #[test]
    fn test_execute_success() {
        let dir = TempDir::new().unwrap();
        let input = write_header(dir.path(), HEADER);
        let output = dir.path().join(DEFAULT_OUTPUT_FILE);

        let status = execute([
            OsStr::new("nativegen"),
            input.as_os_str(),
            OsStr::new("false"),
            OsStr::new("--output"),
            output.as_os_str(),
        ])
        .unwrap();

        assert_eq!(status, 0);
        assert!(fs::read_to_string(&output)
            .unwrap()
            .contains("\tWAIT = 0x4EDE34FBADD967A6,\n"));
    }

    #[test]
    fn test_invalid_padding_flag() {
        let err = Cli::try_parse_from(["nativegen", "natives.h", "maybe"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["nativegen", "natives.h", "false"]).unwrap();
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert!(!cli.use_padding);
        assert!(!cli.dry_run);
        assert_eq!(cli.enum_name, "eNatives");
    }

    #[test]
    fn test_run_writes_padded_enum() {
        let dir = TempDir::new().unwrap();
        let input = write_header(dir.path(), HEADER);
        let cli = cli_for(dir.path(), &input, "true");

        run(&cli).unwrap();

        let output = fs::read_to_string(&cli.output).unwrap();
        let expected = format!(
            "enum class eNatives : std::uint64_t\n{{\n\tWAIT{} = 0x4EDE34FBADD967A6,\n\tSTART_NEW_SCRIPT = 0xE81651AD79516E48,\n}};\n",
            " ".repeat(16)
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_run_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let input = write_header(dir.path(), HEADER);
        let cli = cli_for(dir.path(), &input, "false");

        run(&cli).unwrap();
        let first = fs::read(&cli.output).unwrap();
        run(&cli).unwrap();
        let second = fs::read(&cli.output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_run_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let cli = cli_for(dir.path(), &dir.path().join("absent.h"), "true");

        let err = run(&cli).unwrap_err();
        assert!(is_input_missing(&err));
        assert!(!cli.output.exists());
    }

    #[test]
    fn test_run_malformed_declaration_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = write_header(
            dir.path(),
            "\tstatic Any WAIT(int ms) { return invoke<Void>(0x4EDE34FBADD967A6, ms); }\n\tstatic Any BROKEN(int a);\n",
        );
        let cli = cli_for(dir.path(), &input, "false");

        let err = run(&cli).unwrap_err();
        assert!(!is_input_missing(&err));
        assert!(format!("{err:#}").contains("line 2"));
        assert!(!cli.output.exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = write_header(dir.path(), HEADER);
        let mut cli = cli_for(dir.path(), &input, "false");
        cli.dry_run = true;

        run(&cli).unwrap();
        assert!(!cli.output.exists());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
