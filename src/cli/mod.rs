//! Command-line handling for the demo binary.
//!
//! ```ignore
//! use multistate::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Version => println!("{}", multistate::cli::VERSION),
//!     CliCommand::Help => println!("{}", multistate::cli::USAGE),
//!     CliCommand::Run(options) => run(options)?,
//! }
//! ```

pub mod args;

pub use args::{parse_args, ArgsError, CliCommand, DemoOptions, USAGE};

/// Crate version, for `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
