use crate::error::ChurnError;
use crate::git::VersionControl;
use std::path::Path;
use std::process::{Command, Output};
use std::time::{Duration, Instant};

/// [`VersionControl`] backed by the git command line.
#[derive(Debug, Clone)]
pub struct GitCli {
    git_bin: String,
}

impl GitCli {
    pub fn new(git_bin: impl Into<String>) -> Self {
        Self {
            git_bin: git_bin.into(),
        }
    }

    pub fn git_bin(&self) -> &str {
        &self.git_bin
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl VersionControl for GitCli {
    fn commit_all(&self, repo: &Path, message: &str) -> Result<Duration, ChurnError> {
        let args = ["commit", "-am", message];

        // Only the git invocation itself is timed.
        let start = Instant::now();
        let result = Command::new(&self.git_bin)
            .args(args)
            .current_dir(repo)
            .output();
        let elapsed = start.elapsed();

        let output = result.map_err(|e| ChurnError::CommitFailed {
            message: message.to_string(),
            code: None,
            stderr: format!("failed to run {}: {}", self.git_bin, e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            // git reports "nothing to commit" on stdout
            let stderr = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout).to_string()
            } else {
                stderr
            };
            return Err(ChurnError::CommitFailed {
                message: message.to_string(),
                code: output.status.code(),
                stderr,
            });
        }

        tracing::debug!(
            repo = %repo.display(),
            elapsed_us = elapsed.as_micros() as u64,
            "git commit finished"
        );
        Ok(elapsed)
    }

    fn head_identifier(&self, repo: &Path) -> Result<String, ChurnError> {
        let args = vec![
            "rev-parse".to_string(),
            "--short".to_string(),
            "HEAD".to_string(),
        ];
        let output = exec_git(&self.git_bin, repo, &args)?;
        let sha = String::from_utf8(output.stdout)
            .map_err(|_| ChurnError::Generic("Failed to parse git rev-parse output".to_string()))?;
        Ok(sha.trim().to_string())
    }
}

/// Run git in `repo` and return its output, turning a non-zero exit into
/// [`ChurnError::GitCliError`].
pub fn exec_git(git_bin: &str, repo: &Path, args: &[String]) -> Result<Output, ChurnError> {
    let output = Command::new(git_bin)
        .args(args)
        .current_dir(repo)
        .output()?;

    if !output.status.success() {
        return Err(ChurnError::GitCliError {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            args: args.to_vec(),
        });
    }

    Ok(output)
}

/// The commit message used for a mutated file.
pub fn commit_message(path: &Path) -> String {
    format!("Updated {}", path.display())
}
