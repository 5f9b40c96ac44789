//! CHANGELOG.md maintenance.
//!
//! New version entries are inserted after the first `---` separator in
//! the leading portion of the file, keeping the changelog header intact.

use crate::error::{BumpError, Result};
use crate::version::Version;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// How many leading lines are searched for the header separator
const SEPARATOR_SEARCH_WINDOW: usize = 20;

/// Result of a changelog update attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangelogOutcome {
    /// Entry inserted
    Updated,
    /// The target version already has an entry
    AlreadyPresent,
    /// No changelog file exists, nothing to update
    Skipped,
}

/// Insert a dated entry for `version` into the changelog at `path`.
///
/// A missing file is not an error; the update is skipped so repositories
/// without a changelog still get their VERSION bump.
pub fn update_changelog(
    path: &Path,
    version: &Version,
    bump_label: &str,
    date: NaiveDate,
) -> Result<ChangelogOutcome> {
    if !path.exists() {
        return Ok(ChangelogOutcome::Skipped);
    }

    let content = fs::read_to_string(path)?;

    let heading = format!("## [{}]", version);
    if content.contains(&heading) {
        return Ok(ChangelogOutcome::AlreadyPresent);
    }

    let entry = format!(
        "## [{}] - {}\n\
         \n\
         ### Added\n\
         - Automated version bump ({})\n\
         \n\
         ### Changed\n\
         - See commit history for detailed changes\n\
         \n\
         ---\n",
        version,
        date.format("%Y-%m-%d"),
        bump_label
    );

    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();

    // Insert after the first separator and the blank line that follows it
    let insert_at = lines
        .iter()
        .take(SEPARATOR_SEARCH_WINDOW)
        .position(|line| line.trim() == "---")
        .map(|i| (i + 2).min(lines.len()));

    match insert_at {
        Some(index) => {
            lines.insert(index, entry);
            fs::write(path, lines.join("\n"))?;
            Ok(ChangelogOutcome::Updated)
        }
        None => Err(BumpError::changelog(format!(
            "no '---' separator found in the first {} lines of {}",
            SEPARATOR_SEARCH_WINDOW,
            path.display()
        ))),
    }
}
