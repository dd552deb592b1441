#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A throwaway git repository with hooks and signing disabled.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let repo = Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        };
        repo.git(&["init", "-q"]).unwrap();
        repo.git(&["config", "user.name", "Churn Test"]).unwrap();
        repo.git(&["config", "user.email", "churn@example.com"])
            .unwrap();
        repo.git(&["config", "commit.gpgsign", "false"]).unwrap();
        #[cfg(windows)]
        repo.git(&["config", "core.hooksPath", "NUL"]).unwrap();
        #[cfg(not(windows))]
        repo.git(&["config", "core.hooksPath", "/dev/null"]).unwrap();
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git(&self, args: &[&str]) -> Result<String, String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(self.path())
            .args(args)
            .output()
            .map_err(|e| format!("failed to run git {:?}: {}", args, e))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(format!(
                "git {:?} failed:\nstdout: {}\nstderr: {}",
                args,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            ))
        }
    }

    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, content).expect("failed to write file");
        path
    }

    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel)).expect("failed to read file")
    }

    /// Stage everything and commit it.
    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "-A"]).unwrap();
        self.git(&["commit", "-q", "-m", message]).unwrap();
    }

    pub fn commit_count(&self) -> usize {
        self.git(&["rev-list", "--count", "HEAD"])
            .unwrap()
            .parse()
            .expect("rev-list count should be numeric")
    }

    pub fn head_message(&self) -> String {
        self.git(&["log", "-1", "--format=%s"]).unwrap()
    }
}
