//! Commit classification and next-version inference.

use crate::conventional::{CommitType, ParsedCommit};
use crate::version::{BumpKind, Version};

/// Classify a set of commits into the release kind they call for.
///
/// Precedence, highest wins (record order is irrelevant):
/// 1. any breaking change -> Major
/// 2. any feature -> Minor
/// 3. any fix, perf or refactor -> Patch
/// 4. otherwise -> None
pub fn classify(commits: &[ParsedCommit]) -> BumpKind {
    let mut has_features = false;
    let mut has_fixes = false;

    for commit in commits {
        // Breaking changes dominate everything else
        if commit.breaking {
            return BumpKind::Major;
        }

        match commit.commit_type {
            CommitType::Feat => has_features = true,
            CommitType::Fix | CommitType::Perf | CommitType::Refactor => has_fixes = true,
            _ => {}
        }
    }

    if has_features {
        BumpKind::Minor
    } else if has_fixes {
        BumpKind::Patch
    } else {
        BumpKind::None
    }
}

/// Compute the next version from the current one and the commits since
/// the last release.
///
/// Pure and total: `next >= current` always, with equality exactly when
/// the bump kind is `None`.
pub fn infer_next_version(current: Version, commits: &[ParsedCommit]) -> (Version, BumpKind) {
    let kind = classify(commits);
    (current.bump(kind), kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all(messages: &[&str]) -> Vec<ParsedCommit> {
        messages
            .iter()
            .map(|m| ParsedCommit::parse(m).unwrap())
            .collect()
    }

    #[test]
    fn test_classify_major() {
        let commits = parse_all(&["feat: new feature", "fix(api)!: breaking change"]);
        assert_eq!(classify(&commits), BumpKind::Major);
    }

    #[test]
    fn test_classify_minor() {
        let commits = parse_all(&["feat: new feature", "fix: bug fix"]);
        assert_eq!(classify(&commits), BumpKind::Minor);
    }

    #[test]
    fn test_classify_patch() {
        let commits = parse_all(&["fix: bug fix", "refactor: code cleanup"]);
        assert_eq!(classify(&commits), BumpKind::Patch);
    }

    #[test]
    fn test_classify_none_for_inert_types() {
        let commits = parse_all(&[
            "docs: update readme",
            "chore: update deps",
            "style: format code",
            "test: add tests",
            "build: tweak flags",
            "ci: adjust pipeline",
            "revert: undo experiment",
        ]);
        assert_eq!(classify(&commits), BumpKind::None);
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify(&[]), BumpKind::None);
    }

    #[test]
    fn test_classify_breaking_via_footer() {
        let commits =
            parse_all(&["fix: rename API field\n\nBREAKING CHANGE: field changed from X to Y"]);
        assert_eq!(classify(&commits), BumpKind::Major);
    }

    #[test]
    fn test_classify_priority_breaking_over_features() {
        let commits = parse_all(&[
            "feat: new feature 1",
            "feat: new feature 2",
            "fix(core)!: breaking change",
        ]);
        assert_eq!(classify(&commits), BumpKind::Major);
    }

    #[test]
    fn test_classify_order_independent() {
        let forward = parse_all(&["fix: a", "feat: b", "docs: c"]);
        let backward = parse_all(&["docs: c", "feat: b", "fix: a"]);
        assert_eq!(classify(&forward), classify(&backward));
    }

    #[test]
    fn test_classify_inert_noise_never_changes_result() {
        let core = parse_all(&["fix: edge case handling"]);
        let noisy = parse_all(&[
            "docs: add faq",
            "fix: edge case handling",
            "chore: bump deps",
            "test: add unit tests",
        ]);
        assert_eq!(classify(&core), classify(&noisy));
    }

    #[test]
    fn test_infer_empty_keeps_version() {
        let current = Version::new(1, 2, 3);
        assert_eq!(infer_next_version(current, &[]), (current, BumpKind::None));
    }

    #[test]
    fn test_infer_feature_bumps_minor() {
        let commits = parse_all(&["feat: add X"]);
        assert_eq!(
            infer_next_version(Version::new(1, 2, 3), &commits),
            (Version::new(1, 3, 0), BumpKind::Minor)
        );
    }

    #[test]
    fn test_infer_fix_bumps_patch() {
        let commits = parse_all(&["fix: resolve Y"]);
        assert_eq!(
            infer_next_version(Version::new(1, 2, 3), &commits),
            (Version::new(1, 2, 4), BumpKind::Patch)
        );
    }

    #[test]
    fn test_infer_breaking_bumps_major() {
        let commits = parse_all(&["feat!: breaking API change"]);
        assert_eq!(
            infer_next_version(Version::new(1, 2, 3), &commits),
            (Version::new(2, 0, 0), BumpKind::Major)
        );
    }

    #[test]
    fn test_infer_inert_commits_keep_version() {
        let commits = parse_all(&["docs: update readme", "chore: cleanup"]);
        assert_eq!(
            infer_next_version(Version::new(1, 2, 3), &commits),
            (Version::new(1, 2, 3), BumpKind::None)
        );
    }

    #[test]
    fn test_infer_mixed_release_cycle() {
        let commits = parse_all(&["fix: a", "feat: b", "feat!: c"]);
        assert_eq!(
            infer_next_version(Version::new(0, 9, 0), &commits),
            (Version::new(1, 0, 0), BumpKind::Major)
        );
    }

    #[test]
    fn test_infer_monotonic() {
        let current = Version::new(2, 5, 7);
        for messages in [
            &["feat!: x"][..],
            &["feat: x"][..],
            &["fix: x"][..],
            &["docs: x"][..],
        ] {
            let commits = parse_all(messages);
            let (next, _) = infer_next_version(current, &commits);
            assert!(next >= current);
        }
    }
}
