use crate::error::ChurnError;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_ITERATIONS: usize = 100;
pub const DEFAULT_TARGET_COMMITS: u64 = 1_000_000;
pub const DEFAULT_EXTENSION: &str = ".yaml";
pub const DEFAULT_MARKER: &str = "imageName";
pub const DEFAULT_METADATA_DIR: &str = ".git";
pub const ENV_PREFIX: &str = "GIT_CHURN_";

/// Runtime configuration for a churn run.
#[derive(Debug, Clone, PartialEq)]
pub struct ChurnConfig {
    pub repo_path: PathBuf,
    pub iterations: usize,
    /// Git binary used for commits and tip lookups.
    pub git_bin: String,
    /// Token a trimmed line must start with to be eligible for mutation.
    pub marker: String,
    /// File name suffix of candidate configuration files.
    pub extension: String,
    /// Version-control storage directory, pruned from scans and used as the size proxy.
    pub metadata_dir: String,
    /// Commit count the growth rate is extrapolated to.
    pub target_commits: u64,
}

impl ChurnConfig {
    pub fn new(repo_path: impl Into<PathBuf>, iterations: usize) -> Self {
        Self {
            repo_path: repo_path.into(),
            iterations,
            git_bin: "git".to_string(),
            marker: DEFAULT_MARKER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            metadata_dir: DEFAULT_METADATA_DIR.to_string(),
            target_commits: DEFAULT_TARGET_COMMITS,
        }
    }

    /// Apply `GIT_CHURN_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ChurnError> {
        let overrides: EnvOverrides = envy::prefixed(ENV_PREFIX).from_env()?;
        Ok(self.apply(overrides))
    }

    /// Same as [`ChurnConfig::with_env_overrides`] but reads from the given pairs.
    pub fn with_overrides_from<I>(self, vars: I) -> Result<Self, ChurnError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let overrides: EnvOverrides = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        Ok(self.apply(overrides))
    }

    fn apply(mut self, overrides: EnvOverrides) -> Self {
        if let Some(git_bin) = overrides.git_bin {
            self.git_bin = git_bin;
        }
        if let Some(marker) = overrides.marker {
            self.marker = marker;
        }
        if let Some(extension) = overrides.extension {
            self.extension = extension;
        }
        if let Some(metadata_dir) = overrides.metadata_dir {
            self.metadata_dir = metadata_dir;
        }
        if let Some(target) = overrides.target_commits {
            self.target_commits = target;
        }
        self
    }
}

/// Lenient iteration count parsing: non-integers fall back to the default and
/// negative counts run zero iterations.
pub fn parse_iterations(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map(|n| usize::try_from(n).unwrap_or(0))
        .unwrap_or(DEFAULT_ITERATIONS)
}

#[derive(Debug, Default, Deserialize)]
struct EnvOverrides {
    git_bin: Option<String>,
    marker: Option<String>,
    extension: Option<String>,
    metadata_dir: Option<String>,
    target_commits: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    #[case(None, 100)]
    #[case(Some("25"), 25)]
    #[case(Some("0"), 0)]
    #[case(Some("abc"), 100)]
    #[case(Some("-3"), 0)]
    #[case(Some("-0"), 0)]
    #[case(Some("1.5"), 100)]
    #[case(Some(""), 100)]
    fn test_parse_iterations(#[case] raw: Option<&str>, #[case] expected: usize) {
        assert_eq!(parse_iterations(raw), expected);
    }

    #[test]
    fn test_defaults() {
        let config = ChurnConfig::new("/tmp/repo", 10);
        assert_eq!(config.git_bin, "git");
        assert_eq!(config.marker, "imageName");
        assert_eq!(config.extension, ".yaml");
        assert_eq!(config.metadata_dir, ".git");
        assert_eq!(config.target_commits, 1_000_000);
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let config = ChurnConfig::new("/tmp/repo", 10)
            .with_overrides_from(vars(&[
                ("GIT_CHURN_MARKER", "tag"),
                ("GIT_CHURN_TARGET_COMMITS", "5000"),
                ("UNRELATED", "x"),
            ]))
            .unwrap();
        assert_eq!(config.marker, "tag");
        assert_eq!(config.target_commits, 5000);
        assert_eq!(config.extension, ".yaml");
        assert_eq!(config.iterations, 10);
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        let result = ChurnConfig::new("/tmp/repo", 10)
            .with_overrides_from(vars(&[("GIT_CHURN_TARGET_COMMITS", "lots")]));
        assert!(matches!(result, Err(ChurnError::ConfigError(_))));
    }
}
