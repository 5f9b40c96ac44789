//! Terminal output helpers.
//!
//! All human-facing progress goes to stderr so that stdout carries only
//! the computed version string for CI consumption.

use console::style;

use crate::boundary::InputWarning;
use crate::validate::{ValidationReport, Validity};
use crate::version::Version;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal input warning.
pub fn display_warning(warning: &InputWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the commit messages being analyzed.
///
/// Shows up to 10 messages; if more exist, displays the remaining count.
pub fn display_commit_analysis(messages: &[String]) {
    eprintln!(
        "\n{}",
        style(format!("Analyzing {} commit message(s)", messages.len())).bold()
    );

    for (i, message) in messages.iter().take(10).enumerate() {
        let short_msg = truncate(message, 60);
        eprintln!("  {}. {}", i + 1, short_msg);
    }

    if messages.len() > 10 {
        eprintln!("  ... and {} more", messages.len() - 10);
    }
}

/// Display the proposed version change (or the unchanged version).
pub fn display_bump_summary(previous: &Version, next: &Version, label: &str) {
    if previous == next {
        eprintln!(
            "\n{} (staying at {})",
            style("No version change needed").bold(),
            previous
        );
        return;
    }

    eprintln!("\n{} ({})", style("Proposed Version Change:").bold(), label);
    eprintln!("  From: {}", style(previous).red());
    eprintln!("  To:   {}", style(next).green());
}

/// Display per-message validation results.
pub fn display_validation_report(report: &ValidationReport) {
    for (message, validity) in &report.results {
        let short_msg = truncate(message, 60);
        match validity {
            Validity::Invalid(reason) => {
                eprintln!("{} {}", style("✗").red(), short_msg);
                eprintln!("    {}", reason);
            }
            _ => {
                eprintln!("{} {}", style("✓").green(), short_msg);
            }
        }
    }
}

/// Print the conventional-commits usage help.
pub fn display_conventional_help() {
    eprintln!("\nPlease use Conventional Commits format:\n");
    eprintln!("  feat: add new feature");
    eprintln!("  fix: resolve bug");
    eprintln!("  docs: update documentation");
    eprintln!("  chore: maintenance tasks");
    eprintln!("\nWith optional scope:");
    eprintln!("  feat(dashboard): add dark mode");
    eprintln!("  fix(api): resolve timeout issue");
    eprintln!("\nBreaking changes:");
    eprintln!("  feat!: breaking API change");
    eprintln!("  fix(core)!: breaking fix");
    eprintln!("\nFor more info: https://www.conventionalcommits.org/");
}

/// First line of the message, cut to at most `limit` characters.
fn truncate(message: &str, limit: usize) -> &str {
    let first_line = message.lines().next().unwrap_or("");
    match first_line.char_indices().nth(limit) {
        Some((idx, _)) => &first_line[..idx],
        None => first_line,
    }
}
