//! Bump workflow orchestration.
//!
//! Decoupled from clap so the workflow can be called programmatically
//! and exercised directly by integration tests.

use chrono::NaiveDate;
use std::path::Path;

use crate::analyzer;
use crate::boundary::InputWarning;
use crate::changelog::{self, ChangelogOutcome};
use crate::config::{Config, MalformedPolicy};
use crate::conventional::ParsedCommit;
use crate::error::Result;
use crate::validate::{self, Validity};
use crate::version::{BumpKind, Version};
use crate::version_file;

/// Requested bump behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpMode {
    /// Infer the bump kind from commit messages
    Auto,
    Major,
    Minor,
    Patch,
}

/// How the next version was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpDecision {
    /// Inferred from commit messages
    Inferred(BumpKind),
    /// Forced via an explicit bump type
    Forced(BumpKind),
    /// Exact version supplied by the caller
    Manual,
}

impl BumpDecision {
    /// Short label for display and changelog entries
    pub fn label(&self) -> &'static str {
        match self {
            BumpDecision::Inferred(kind) | BumpDecision::Forced(kind) => kind.as_str(),
            BumpDecision::Manual => "manual",
        }
    }
}

/// Arguments for the bump workflow
///
/// Mirrors the CLI args but in a format suitable for orchestration
/// logic, without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpRequest {
    /// How to pick the bump kind
    pub mode: BumpMode,

    /// Exact next version, overriding inference entirely
    pub manual: Option<String>,

    /// Commit messages / PR titles since the last release
    pub messages: Vec<String>,

    /// Preview mode - don't write VERSION or CHANGELOG
    pub dry_run: bool,

    /// Override of the configured malformed-message policy
    pub malformed_policy: Option<MalformedPolicy>,

    /// Date stamped into new changelog entries
    pub today: NaiveDate,
}

/// Result of a completed bump workflow
#[derive(Debug)]
pub struct BumpOutcome {
    /// Version read from the VERSION file
    pub previous: Version,

    /// Computed next version
    pub next: Version,

    /// How the next version was decided
    pub decision: BumpDecision,

    /// Whether the version actually changed
    pub changed: bool,

    /// Non-fatal conditions encountered along the way
    pub warnings: Vec<InputWarning>,

    /// Changelog update result, if one was attempted
    pub changelog: Option<ChangelogOutcome>,
}

/// Main bump workflow.
///
/// 1. Read the current version from the configured VERSION file
/// 2. Decide the next version (manual override, forced kind, or
///    inference from the supplied commit messages)
/// 3. Unless dry-running or unchanged, write VERSION and update the
///    changelog
pub fn run_bump(request: &BumpRequest, config: &Config) -> Result<BumpOutcome> {
    let version_path = Path::new(&config.files.version_file);
    let previous = version_file::read_version_file(version_path)?;
    let mut warnings = Vec::new();

    let (next, decision) = if let Some(raw) = request.manual.as_deref() {
        (Version::parse(raw.trim())?, BumpDecision::Manual)
    } else {
        match request.mode {
            BumpMode::Auto => {
                let commits = collect_commits(request, config, &mut warnings)?;
                if request.messages.is_empty() {
                    warnings.push(InputWarning::NoCommits {
                        current_version: previous.to_string(),
                    });
                }
                let (next, kind) = analyzer::infer_next_version(previous, &commits);
                (next, BumpDecision::Inferred(kind))
            }
            BumpMode::Major => (previous.bump(BumpKind::Major), BumpDecision::Forced(BumpKind::Major)),
            BumpMode::Minor => (previous.bump(BumpKind::Minor), BumpDecision::Forced(BumpKind::Minor)),
            BumpMode::Patch => (previous.bump(BumpKind::Patch), BumpDecision::Forced(BumpKind::Patch)),
        }
    };

    let changed = next != previous;
    let mut changelog_outcome = None;

    if changed && !request.dry_run {
        version_file::write_version_file(version_path, &next)?;

        let changelog_path = Path::new(&config.files.changelog_file);
        let outcome =
            changelog::update_changelog(changelog_path, &next, decision.label(), request.today)?;
        match outcome {
            ChangelogOutcome::Skipped => warnings.push(InputWarning::ChangelogMissing {
                path: config.files.changelog_file.clone(),
            }),
            ChangelogOutcome::AlreadyPresent => warnings.push(InputWarning::ChangelogDuplicate {
                version: next.to_string(),
            }),
            ChangelogOutcome::Updated => {}
        }
        changelog_outcome = Some(outcome);
    }

    Ok(BumpOutcome {
        previous,
        next,
        decision,
        changed,
        warnings,
        changelog: changelog_outcome,
    })
}

/// Parse the supplied messages into commit records for inference.
///
/// Merge and automated commits are passed over silently; malformed
/// messages either abort the run or are collected as warnings,
/// depending on the effective policy.
fn collect_commits(
    request: &BumpRequest,
    config: &Config,
    warnings: &mut Vec<InputWarning>,
) -> Result<Vec<ParsedCommit>> {
    let policy = request
        .malformed_policy
        .unwrap_or(config.validation.on_malformed);

    let mut commits = Vec::new();
    for message in &request.messages {
        match validate::validate_message(message, &config.validation) {
            Validity::Merge | Validity::Automated => {}
            Validity::Conventional(commit) => commits.push(commit),
            Validity::Invalid(err) => match policy {
                MalformedPolicy::Abort => return Err(err),
                MalformedPolicy::Skip => warnings.push(InputWarning::SkippedMalformed {
                    message: message.clone(),
                    reason: err.to_string(),
                }),
            },
        }
    }

    Ok(commits)
}
