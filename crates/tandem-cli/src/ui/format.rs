//! Human-readable sizes, durations and the bundle summary.

use std::time::Duration;

use console::Term;
use owo_colors::OwoColorize;

use crate::bundler::BundleReport;

use super::{colors_enabled, is_quiet};

/// Bytes in binary units: `0 B`, `1023 B`, `1.50 KB`, `2.00 MB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.2} {}", UNITS[unit])
    }
}

/// `450ms`, `1.50s`, or `2m 5s` past a minute.
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{millis}ms")
    } else if millis < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print the output artifact, its size and how long the bundler took.
pub fn print_bundle_summary(report: &BundleReport) {
    if is_quiet() {
        return;
    }
    let width = usize::from(Term::stderr().size().1).min(80);
    let rule = "─".repeat(width);
    let name = report.output.display().to_string();
    let size = format_size(report.size);
    let took = format_duration(report.duration);

    if colors_enabled() {
        eprintln!("\n{}", "Bundle".bold().underline());
        eprintln!("{rule}");
        eprintln!(
            "  {} {} {}",
            "▸".blue(),
            name.bright_white().bold(),
            format!("{size} ({took})").dimmed()
        );
        eprintln!("{rule}");
    } else {
        eprintln!("\nBundle");
        eprintln!("{rule}");
        eprintln!("  ▸ {name} {size} ({took})");
        eprintln!("{rule}");
    }
}
