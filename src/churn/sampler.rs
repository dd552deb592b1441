use ignore::WalkBuilder;
use std::path::Path;

/// Total bytes of every non-directory entry under `repo/metadata_dir`.
///
/// Best-effort: entries that fail to walk or stat are skipped, and a missing
/// metadata directory measures as zero.
pub fn metadata_size(repo: &Path, metadata_dir: &str) -> u64 {
    let root = repo.join(metadata_dir);
    let walker = WalkBuilder::new(&root).standard_filters(false).build();

    let size: u64 = walker
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|t| !t.is_dir()))
        .filter_map(|entry| entry.metadata().ok())
        .map(|meta| meta.len())
        .sum();

    tracing::debug!(path = %root.display(), bytes = size, "sampled metadata size");
    size
}
