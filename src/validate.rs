//! Commit-message validation against the conventional format.
//!
//! Merge commits and configured automated commits are accepted without
//! conventional parsing; they also contribute nothing to version
//! inference.

use crate::config::ValidationConfig;
use crate::conventional::ParsedCommit;
use crate::error::BumpError;

/// Outcome of validating a single commit message or PR title
#[derive(Debug)]
pub enum Validity {
    /// Merge commit, accepted as-is
    Merge,
    /// Automated commit matching a configured prefix
    Automated,
    /// Well-formed conventional commit
    Conventional(ParsedCommit),
    /// Rejected message with the validation failure
    Invalid(BumpError),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Validity::Invalid(_))
    }
}

/// Validate a single message (e.g. a PR title).
pub fn validate_message(message: &str, config: &ValidationConfig) -> Validity {
    if config.allow_merge_commits && message.starts_with("Merge ") {
        return Validity::Merge;
    }

    if config
        .automated_prefixes
        .iter()
        .any(|prefix| message.starts_with(prefix.as_str()))
    {
        return Validity::Automated;
    }

    match ParsedCommit::parse(message) {
        Ok(commit) => Validity::Conventional(commit),
        Err(err) => Validity::Invalid(err),
    }
}

/// Per-message validation results for a batch of commits
#[derive(Debug)]
pub struct ValidationReport {
    pub results: Vec<(String, Validity)>,
}

impl ValidationReport {
    pub fn all_valid(&self) -> bool {
        self.results.iter().all(|(_, v)| v.is_valid())
    }

    pub fn invalid_count(&self) -> usize {
        self.results.iter().filter(|(_, v)| !v.is_valid()).count()
    }
}

/// Validate every message in a batch, collecting per-message results.
pub fn validate_all(messages: &[String], config: &ValidationConfig) -> ValidationReport {
    let results = messages
        .iter()
        .map(|message| (message.clone(), validate_message(message, config)))
        .collect();

    ValidationReport { results }
}
