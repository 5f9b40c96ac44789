use crate::error::{BumpError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for version-bump.
///
/// Contains file locations and commit-validation settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Locations of the files touched by a bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default = "default_changelog_file")]
    pub changelog_file: String,
}

fn default_version_file() -> String {
    "VERSION".to_string()
}

fn default_changelog_file() -> String {
    "CHANGELOG.md".to_string()
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            version_file: default_version_file(),
            changelog_file: default_changelog_file(),
        }
    }
}

/// Settings for commit-message validation.
///
/// Merge commits and automated commits (e.g. the bump commit this tool
/// itself produces) are exempt from the conventional format.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ValidationConfig {
    #[serde(default = "default_allow_merge_commits")]
    pub allow_merge_commits: bool,

    #[serde(default = "default_automated_prefixes")]
    pub automated_prefixes: Vec<String>,

    #[serde(default)]
    pub on_malformed: MalformedPolicy,
}

fn default_allow_merge_commits() -> bool {
    true
}

/// Returns the default list of automated-commit prefixes.
fn default_automated_prefixes() -> Vec<String> {
    vec!["chore: bump version".to_string()]
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            allow_merge_commits: default_allow_merge_commits(),
            automated_prefixes: default_automated_prefixes(),
            on_malformed: MalformedPolicy::default(),
        }
    }
}

/// What to do when a commit message fails to parse during a bump.
///
/// This is caller policy: the parser itself always reports the failure.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort the whole bump on the first malformed message
    #[default]
    Abort,
    /// Skip malformed messages, surfacing each as a warning
    Skip,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionbump.toml` in current directory
/// 3. `~/.config/.versionbump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./versionbump.toml").exists() {
        fs::read_to_string("./versionbump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".versionbump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| BumpError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.files.version_file, "VERSION");
        assert_eq!(config.files.changelog_file, "CHANGELOG.md");
        assert!(config.validation.allow_merge_commits);
        assert_eq!(config.validation.on_malformed, MalformedPolicy::Abort);
        assert_eq!(
            config.validation.automated_prefixes,
            vec!["chore: bump version".to_string()]
        );
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[validation]
on_malformed = "skip"
"#,
        )
        .unwrap();

        assert_eq!(config.validation.on_malformed, MalformedPolicy::Skip);
        assert!(config.validation.allow_merge_commits);
        assert_eq!(config.files.version_file, "VERSION");
    }
}
