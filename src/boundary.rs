use std::fmt;

/// Non-fatal conditions encountered while preparing a bump.
/// These are reported to the user but never abort the run on their own.
#[derive(Debug, Clone, PartialEq)]
pub enum InputWarning {
    /// No commit messages were supplied since the last release
    NoCommits { current_version: String },
    /// A malformed message was skipped under the skip policy
    SkippedMalformed { message: String, reason: String },
    /// No changelog file exists, update skipped
    ChangelogMissing { path: String },
    /// The changelog already lists the target version
    ChangelogDuplicate { version: String },
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::NoCommits { current_version } => {
                write!(
                    f,
                    "No commits to analyze, staying at version {}",
                    current_version
                )
            }
            InputWarning::SkippedMalformed { message, reason } => {
                let short_msg = match message.char_indices().nth(60) {
                    Some((idx, _)) => &message[..idx],
                    None => message.as_str(),
                };
                write!(f, "Skipped malformed message '{}': {}", short_msg, reason)
            }
            InputWarning::ChangelogMissing { path } => {
                write!(f, "Changelog '{}' not found, skipping update", path)
            }
            InputWarning::ChangelogDuplicate { version } => {
                write!(f, "Version {} already present in changelog", version)
            }
        }
    }
}
