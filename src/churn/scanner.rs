use crate::error::ChurnError;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Collect every file under `root` whose name ends with `extension`.
///
/// Directories named `metadata_dir` are pruned (never descended into). Walk
/// errors abort the scan, and an empty result is [`ChurnError::NoCandidates`].
/// Order follows the walker and is not meant to be stable.
pub fn collect_candidates(
    root: &Path,
    extension: &str,
    metadata_dir: &str,
) -> Result<Vec<PathBuf>, ChurnError> {
    let pruned = metadata_dir.to_string();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !(is_dir && entry.depth() > 0 && entry.file_name() == OsStr::new(&pruned))
        })
        .build();

    let mut candidates = Vec::new();
    for entry in walker {
        let entry = entry?;
        let is_file = entry.file_type().is_some_and(|t| !t.is_dir());
        if is_file
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(extension))
        {
            candidates.push(entry.into_path());
        }
    }

    if candidates.is_empty() {
        return Err(ChurnError::NoCandidates {
            root: root.to_path_buf(),
            extension: extension.to_string(),
        });
    }

    tracing::debug!(
        root = %root.display(),
        count = candidates.len(),
        "collected candidate files"
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "imageName: x0000\n").unwrap();
    }

    #[test]
    fn test_collects_nested_matching_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.yaml");
        touch(dir.path(), "deploy/prod/b.yaml");
        touch(dir.path(), "deploy/readme.md");
        touch(dir.path(), "c.yml");

        let mut found = collect_candidates(dir.path(), ".yaml", ".git").unwrap();
        found.sort();

        assert_eq!(
            found,
            vec![
                dir.path().join("a.yaml"),
                dir.path().join("deploy/prod/b.yaml"),
            ]
        );
    }

    #[test]
    fn test_metadata_dir_is_pruned() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "app.yaml");
        touch(dir.path(), ".git/config.yaml");
        touch(dir.path(), ".git/nested/deep.yaml");
        touch(dir.path(), "sub/.git/inner.yaml");

        let found = collect_candidates(dir.path(), ".yaml", ".git").unwrap();

        assert_eq!(found, vec![dir.path().join("app.yaml")]);
        assert!(found.iter().all(|p| !p.components().any(|c| c.as_os_str() == ".git")));
    }

    #[test]
    fn test_hidden_and_gitignored_files_still_count() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "ignored.yaml\n").unwrap();
        touch(dir.path(), "ignored.yaml");
        touch(dir.path(), ".hidden/values.yaml");

        let found = collect_candidates(dir.path(), ".yaml", ".git").unwrap();

        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_empty_tree_is_no_candidates() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".git/only.yaml");
        touch(dir.path(), "notes.txt");

        let err = collect_candidates(dir.path(), ".yaml", ".git").unwrap_err();
        assert!(matches!(err, ChurnError::NoCandidates { .. }));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(collect_candidates(&missing, ".yaml", ".git").is_err());
    }
}
