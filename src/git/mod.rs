pub mod repository;

use crate::error::ChurnError;
use std::path::Path;
use std::time::Duration;

pub use repository::GitCli;

/// The two version-control operations a churn run needs.
pub trait VersionControl {
    /// Commit every modified tracked file in `repo` with `message`, returning
    /// the wall-clock time the commit took.
    fn commit_all(&self, repo: &Path, message: &str) -> Result<Duration, ChurnError>;

    /// Abbreviated identifier of the current history tip.
    fn head_identifier(&self, repo: &Path) -> Result<String, ChurnError>;
}
