//! Status messages on stderr, silenced by `--quiet`.

use owo_colors::OwoColorize;

use super::{colors_enabled, is_quiet};

/// Print a success message.
///
/// ```no_run
/// use tandem_cli::ui::success;
///
/// success("Runtime settings are valid");
/// ```
pub fn success(message: &str) {
    if is_quiet() {
        return;
    }
    if colors_enabled() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {message}");
    }
}

pub fn info(message: &str) {
    if is_quiet() {
        return;
    }
    if colors_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {message}");
    }
}

/// Plain continuation line under a status message
pub fn detail(line: &str) {
    if !is_quiet() {
        eprintln!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages_do_not_panic() {
        success("valid");
        info("loading");
        detail("  web        http://localhost:8000");
    }
}
