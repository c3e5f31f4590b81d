//! Tandem CLI - validate the project file, export runtime settings and drive
//! the external bundler.
//!
//! Handles argument parsing, logging initialization and command dispatch.

use clap::Parser;
use miette::Result;
use tandem_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let colored = ui::init(args.no_color, args.quiet);
    logger::init_logger(args.verbose, args.quiet, colored);

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Settings(settings_args) => commands::settings_execute(settings_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args).await,
        cli::Command::Schema => commands::schema_execute(),
    };

    // Any failure leaves through miette, which exits with status 1
    result.map_err(error::cli_error_to_miette)
}
