//! Logging for the Tandem CLI.
//!
//! Structured logging on the `tracing` stack. Events from `tandem-config`
//! (which values were loaded, which checks passed) and from the bundler
//! driver go through the same subscriber.
//!
//! # Example
//!
//! ```rust,no_run
//! use tandem_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, true);
//!
//! info!("loading settings");
//! debug!(path = "tandem.toml", "found config");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "tandem=debug,tandem_cli=debug,tandem_config=debug";
const QUIET_FILTER: &str = "tandem=error,tandem_cli=error,tandem_config=error";
const DEFAULT_FILTER: &str = "tandem=info,tandem_cli=info,tandem_config=info";

/// Initialize the tracing subscriber. Call once, before anything logs.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: DEBUG for the tandem crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`
/// 4. INFO for the tandem crates
///
/// Logs go to stderr so that `tandem settings` output on stdout stays
/// machine-readable. `colored` is the decision made by [`crate::ui::init`].
pub fn init_logger(verbose: bool, quiet: bool, colored: bool) {
    let filter = filter_for(verbose, quiet);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(colored)
        .compact();

    // A second call (e.g. from doctests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
