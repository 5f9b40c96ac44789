use crate::error::{BumpError, Result};
use regex::Regex;
use std::fmt;

/// Closed set of conventional commit types.
///
/// Keeping this a tagged enum (rather than an open string) makes an
/// unknown type a parse-time error instead of a silent no-op during
/// version inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Chore,
    Build,
    Ci,
    Revert,
}

impl CommitType {
    /// Map a lowercase header keyword to a commit type
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "feat" => Some(CommitType::Feat),
            "fix" => Some(CommitType::Fix),
            "docs" => Some(CommitType::Docs),
            "style" => Some(CommitType::Style),
            "refactor" => Some(CommitType::Refactor),
            "perf" => Some(CommitType::Perf),
            "test" => Some(CommitType::Test),
            "chore" => Some(CommitType::Chore),
            "build" => Some(CommitType::Build),
            "ci" => Some(CommitType::Ci),
            "revert" => Some(CommitType::Revert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Revert => "revert",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Footer markers that flag a breaking change regardless of commit type
const BREAKING_CHANGE_MARKERS: [&str; 2] = ["BREAKING CHANGE:", "BREAKING-CHANGE:"];

/// Parsed representation of a conventional commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub commit_type: CommitType,
    pub scope: Option<String>,
    pub subject: String,
    pub breaking: bool,
}

impl ParsedCommit {
    /// Parse a commit message (or PR title) header.
    ///
    /// Accepted header shapes on the first line:
    /// - `type: subject`
    /// - `type(scope): subject`
    /// - `type!: subject`
    /// - `type(scope)!: subject`
    ///
    /// The message carries `breaking = true` if the `!` marker is present
    /// or any body/footer line starts with `BREAKING CHANGE:`.
    ///
    /// # Returns
    /// * `Err(MalformedCommitHeader)` - header does not match the grammar
    /// * `Err(InvalidCommitType)` - header matches but the type is unknown
    pub fn parse(message: &str) -> Result<Self> {
        let header = message.lines().next().unwrap_or("");

        let captures = Regex::new(r"^([a-z]+)(?:\(([^)]+)\))?(!)?:\s+(.+)$")
            .ok()
            .and_then(|re| re.captures(header))
            .ok_or_else(|| BumpError::malformed_header(message))?;

        let keyword = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        let commit_type = CommitType::from_keyword(keyword)
            .ok_or_else(|| BumpError::invalid_type(keyword, message))?;

        let scope = captures.get(2).map(|m| m.as_str().to_string());
        let has_exclamation = captures.get(3).is_some();
        let subject = captures
            .get(4)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let breaking = has_exclamation || has_breaking_footer(message);

        Ok(ParsedCommit {
            commit_type,
            scope,
            subject,
            breaking,
        })
    }
}

/// True if any line of the message starts with a breaking-change marker
fn has_breaking_footer(message: &str) -> bool {
    message.lines().any(|line| {
        BREAKING_CHANGE_MARKERS
            .iter()
            .any(|marker| line.starts_with(marker))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let commit = ParsedCommit::parse("feat: add login").unwrap();
        assert_eq!(commit.commit_type, CommitType::Feat);
        assert_eq!(commit.scope, None);
        assert_eq!(commit.subject, "add login");
        assert!(!commit.breaking);
    }

    #[test]
    fn test_parse_with_scope() {
        let commit = ParsedCommit::parse("feat(auth): add login").unwrap();
        assert_eq!(commit.commit_type, CommitType::Feat);
        assert_eq!(commit.scope, Some("auth".to_string()));
        assert_eq!(commit.subject, "add login");
        assert!(!commit.breaking);
    }

    #[test]
    fn test_parse_with_breaking_marker() {
        let commit = ParsedCommit::parse("feat(auth)!: redesign login").unwrap();
        assert_eq!(commit.commit_type, CommitType::Feat);
        assert!(commit.breaking);
    }

    #[test]
    fn test_parse_breaking_without_scope() {
        let commit = ParsedCommit::parse("fix!: redesign").unwrap();
        assert_eq!(commit.commit_type, CommitType::Fix);
        assert_eq!(commit.scope, None);
        assert!(commit.breaking);
    }

    #[test]
    fn test_parse_breaking_change_footer() {
        let commit = ParsedCommit::parse("fix: something\n\nBREAKING CHANGE: desc").unwrap();
        assert!(commit.breaking);
    }

    #[test]
    fn test_parse_breaking_change_hyphenated_footer() {
        let commit = ParsedCommit::parse("fix: something\n\nBREAKING-CHANGE: desc").unwrap();
        assert!(commit.breaking);
    }

    #[test]
    fn test_parse_all_known_types() {
        for keyword in [
            "feat", "fix", "docs", "style", "refactor", "perf", "test", "chore", "build", "ci",
            "revert",
        ] {
            let message = format!("{}: subject line", keyword);
            let commit = ParsedCommit::parse(&message).unwrap();
            assert_eq!(commit.commit_type.as_str(), keyword);
        }
    }

    #[test]
    fn test_parse_non_conventional_fails() {
        let err = ParsedCommit::parse("update stuff").unwrap_err();
        assert!(matches!(err, BumpError::MalformedCommitHeader { .. }));
    }

    #[test]
    fn test_parse_unknown_type_fails() {
        let err = ParsedCommit::parse("feta: add cheese").unwrap_err();
        match err {
            BumpError::InvalidCommitType { found, .. } => assert_eq!(found, "feta"),
            other => panic!("expected InvalidCommitType, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_uppercase_type_fails() {
        assert!(ParsedCommit::parse("Feat: add login").is_err());
    }

    #[test]
    fn test_parse_empty_subject_fails() {
        assert!(ParsedCommit::parse("feat: ").is_err());
        assert!(ParsedCommit::parse("feat:").is_err());
    }

    #[test]
    fn test_parse_empty_scope_fails() {
        assert!(ParsedCommit::parse("feat(): add login").is_err());
    }

    #[test]
    fn test_parse_missing_space_after_colon_fails() {
        assert!(ParsedCommit::parse("feat:add login").is_err());
    }

    #[test]
    fn test_parse_empty_message_fails() {
        assert!(ParsedCommit::parse("").is_err());
    }

    #[test]
    fn test_parse_only_first_line_is_header() {
        let commit = ParsedCommit::parse("fix: bug\n\nfeat: this is body text").unwrap();
        assert_eq!(commit.commit_type, CommitType::Fix);
        assert_eq!(commit.subject, "bug");
    }
}
