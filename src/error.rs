use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ChurnError {
    /// No file with the configured extension exists outside the metadata directory.
    NoCandidates { root: PathBuf, extension: String },
    /// The selected file has no line starting with the mutation marker.
    NoMutableLines { path: PathBuf, marker: String },
    /// The commit could not be started or exited non-zero.
    CommitFailed {
        message: String,
        code: Option<i32>,
        stderr: String,
    },
    GitCliError {
        code: Option<i32>,
        stderr: String,
        args: Vec<String>,
    },
    IoError(std::io::Error),
    WalkError(ignore::Error),
    ConfigError(envy::Error),
    Generic(String),
}

impl fmt::Display for ChurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChurnError::NoCandidates { root, extension } => {
                write!(f, "no {} files found in {}", extension, root.display())
            }
            ChurnError::NoMutableLines { path, marker } => write!(
                f,
                "no lines starting with '{}' found in {}",
                marker,
                path.display()
            ),
            ChurnError::CommitFailed {
                message,
                code,
                stderr,
            } => match code {
                Some(code) => write!(
                    f,
                    "commit \"{}\" failed with exit code {}: {}",
                    message,
                    code,
                    stderr.trim()
                ),
                None => write!(f, "commit \"{}\" failed: {}", message, stderr.trim()),
            },
            ChurnError::GitCliError { code, stderr, args } => write!(
                f,
                "git {} failed (code {:?}): {}",
                args.join(" "),
                code,
                stderr.trim()
            ),
            ChurnError::IoError(e) => write!(f, "IO error: {}", e),
            ChurnError::WalkError(e) => write!(f, "Walk error: {}", e),
            ChurnError::ConfigError(e) => write!(f, "Config error: {}", e),
            ChurnError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ChurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChurnError::IoError(e) => Some(e),
            ChurnError::WalkError(e) => Some(e),
            ChurnError::ConfigError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChurnError {
    fn from(err: std::io::Error) -> Self {
        ChurnError::IoError(err)
    }
}

impl From<ignore::Error> for ChurnError {
    fn from(err: ignore::Error) -> Self {
        ChurnError::WalkError(err)
    }
}

impl From<envy::Error> for ChurnError {
    fn from(err: envy::Error) -> Self {
        ChurnError::ConfigError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_failed_message_includes_code_and_stderr() {
        let err = ChurnError::CommitFailed {
            message: "Updated app/values.yaml".to_string(),
            code: Some(1),
            stderr: "nothing to commit\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "commit \"Updated app/values.yaml\" failed with exit code 1: nothing to commit"
        );
    }

    #[test]
    fn test_no_mutable_lines_message_names_marker() {
        let err = ChurnError::NoMutableLines {
            path: PathBuf::from("a.yaml"),
            marker: "imageName".to_string(),
        };
        assert!(err.to_string().contains("'imageName'"));
        assert!(err.to_string().contains("a.yaml"));
    }

    #[test]
    fn test_io_error_exposes_source() {
        let err: ChurnError = std::io::Error::other("disk gone").into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
