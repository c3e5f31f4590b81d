//! Terminal UI: status messages, spinners and small formatting helpers.
//!
//! Everything here writes to stderr. Stdout is reserved for command output
//! that other tools parse (`tandem settings`, `tandem schema`).
//!
//! # Examples
//!
//! ```no_run
//! use tandem_cli::ui;
//!
//! ui::init(false, false);
//!
//! let spinner = ui::Spinner::new("Bundling...");
//! spinner.finish("Bundled");
//!
//! ui::success("Build descriptor is valid");
//! ```
//!
//! With `--quiet` nothing in this module prints; errors still reach stderr
//! through miette.

mod format;
mod messages;
mod spinner;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, format_size, print_bundle_summary};
pub use messages::{detail, info, success};
pub use spinner::Spinner;

static COLORS: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

/// Detects GitHub Actions, GitLab CI, CircleCI, Travis and anything that
/// sets `CI`.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

/// Whether stderr should be colored, ignoring `--no-color`.
///
/// `NO_COLOR` beats `FORCE_COLOR`; otherwise colors are used when a person
/// is watching stderr.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::user_attended_stderr()
}

/// Decide once, early in `main`, whether stderr is colored and whether
/// status output is shown at all. Returns the color decision so the logger
/// can share it.
pub fn init(no_color: bool, quiet: bool) -> bool {
    let enabled = !no_color && should_use_color();
    COLORS.store(enabled, Ordering::Relaxed);
    QUIET.store(quiet, Ordering::Relaxed);
    console::set_colors_enabled_stderr(enabled);
    enabled
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}
