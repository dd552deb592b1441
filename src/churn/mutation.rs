use crate::error::ChurnError;
use rand::Rng;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Number of trailing characters replaced on the mutated line.
pub const SUFFIX_LEN: usize = 4;
const SUFFIX_SPACE: u32 = 10_000;

/// What a single mutation changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    /// Zero-based index of the rewritten line.
    pub line_index: usize,
    /// The four-digit value written at the end of the line.
    pub suffix: String,
}

/// Indices of lines whose content, with ASCII whitespace trimmed, starts with `marker`.
pub fn mutable_lines(content: &[u8], marker: &str) -> Vec<usize> {
    content
        .split(|&b| b == b'\n')
        .enumerate()
        .filter(|(_, line)| line.trim_ascii().starts_with(marker.as_bytes()))
        .map(|(i, _)| i)
        .collect()
}

/// Replace the last four characters of `line` with `suffix`, or the whole line
/// when it has four characters or fewer. A trailing `\r` is kept in place.
pub fn replace_suffix(line: &str, suffix: &str) -> String {
    let (body, cr) = match line.strip_suffix('\r') {
        Some(body) => (body, "\r"),
        None => (line, ""),
    };

    if body.chars().count() > SUFFIX_LEN {
        let cut = body
            .char_indices()
            .rev()
            .nth(SUFFIX_LEN - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        format!("{}{}{}", &body[..cut], suffix, cr)
    } else {
        format!("{}{}", suffix, cr)
    }
}

/// Byte-level [`replace_suffix`]. UTF-8 lines get character semantics; any
/// other line has its last four bytes replaced.
pub fn replace_suffix_bytes(line: &[u8], suffix: &str) -> Vec<u8> {
    if let Ok(text) = std::str::from_utf8(line) {
        return replace_suffix(text, suffix).into_bytes();
    }

    let (body, cr) = match line.strip_suffix(b"\r") {
        Some(body) => (body, b"\r".as_slice()),
        None => (line, b"".as_slice()),
    };
    let keep = if body.len() > SUFFIX_LEN {
        &body[..body.len() - SUFFIX_LEN]
    } else {
        b"".as_slice()
    };
    [keep, suffix.as_bytes(), cr].concat()
}

/// Pick one eligible line at random and give it a fresh four-digit suffix.
///
/// Returns `None` when no line starts with `marker`. Every other line, the line
/// count and the `\n` separators are left untouched.
pub fn mutate_content<R: Rng>(
    content: &[u8],
    marker: &str,
    rng: &mut R,
) -> Option<(Vec<u8>, Mutation)> {
    let eligible = mutable_lines(content, marker);
    if eligible.is_empty() {
        return None;
    }

    let line_index = eligible[rng.gen_range(0..eligible.len())];
    let suffix = format!("{:04}", rng.gen_range(0..SUFFIX_SPACE));

    let mut lines: Vec<&[u8]> = content.split(|&b| b == b'\n').collect();
    let replaced = replace_suffix_bytes(lines[line_index], &suffix);
    lines[line_index] = &replaced;

    Some((lines.join(&b'\n'), Mutation { line_index, suffix }))
}

/// Rewrite one eligible line of the file at `path` in place.
///
/// The file is fully read and checked before it is opened for writing, so a
/// file without eligible lines is never touched. The rewrite itself truncates
/// and writes in place; a crash mid-write can leave the file partially written.
pub fn mutate_file<R: Rng>(
    path: &Path,
    marker: &str,
    rng: &mut R,
) -> Result<Mutation, ChurnError> {
    let content = fs::read(path)?;

    let (updated, mutation) =
        mutate_content(&content, marker, rng).ok_or_else(|| ChurnError::NoMutableLines {
            path: path.to_path_buf(),
            marker: marker.to_string(),
        })?;

    let mut file = OpenOptions::new().write(true).truncate(true).open(path)?;
    file.write_all(&updated)?;

    tracing::debug!(
        path = %path.display(),
        line = mutation.line_index,
        suffix = %mutation.suffix,
        "mutated line"
    );
    Ok(mutation)
}
