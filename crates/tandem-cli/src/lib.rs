//! Tandem CLI.
//!
//! Command-line front end for `tandem-config`: it discovers the project file,
//! validates the build descriptor and runtime settings, prints the settings
//! in a form other processes can consume, and hands the descriptor to an
//! external bundler.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - one module per subcommand
//! - [`bundler`] - the [`Bundler`](bundler::Bundler) seam and the esbuild driver
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing setup
//! - [`ui`] - spinners and status messages on stderr
//!
//! # Example
//!
//! ```rust
//! use tandem_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod bundler;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
