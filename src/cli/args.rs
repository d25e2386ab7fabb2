//! Command-line argument parsing for the demo.

use std::path::PathBuf;

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
Usage: multistate-demo [OPTIONS]

Options:
  --config <PATH>      Container configuration (JSON)
  --state-file <PATH>  Where to save and restore state between runs
  -V, --version        Print version
  -h, --help           Print this help";

/// Options for running the demo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoOptions {
    pub config: Option<PathBuf>,
    pub state_file: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the demo (default)
    Run(DemoOptions),
}

/// Argument errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(String),
    #[error("unknown argument: {0}")]
    Unknown(String),
}

/// Parse command-line arguments (program name first).
///
/// # Examples
///
/// ```
/// use multistate::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["multistate-demo".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = DemoOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--config" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                options.config = Some(PathBuf::from(value));
            }
            "--state-file" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                options.state_file = Some(PathBuf::from(value));
            }
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(CliCommand::Run(options))
}
