//! Compact path-separated text
//!
//! Edit requests are written one line per record as
//! `ancestor1<sep>ancestor2<sep>...<sep>value`. The number of ancestor
//! segments implies the indentation the value had in the indexed document.

use crate::record::{CommentPrefixes, PathRecord};

/// Encode one compact line into a record with restored indentation
///
/// Indentation is `step_space` per ancestor segment. Comment values and
/// top-level values get none.
///
/// # Examples
/// ```
/// # use cfgtree_index::{encode_line, CommentPrefixes, PathRecord};
/// let record = encode_line("configure,card 1,mda 1", 4, &CommentPrefixes::none(), ',');
/// assert_eq!(record, PathRecord::new("configure,card 1", "        mda 1"));
/// ```
#[must_use]
pub fn encode_line(
    line: &str,
    step_space: usize,
    comments: &CommentPrefixes,
    separator: char,
) -> PathRecord {
    let line = line.trim();
    let (path, value) = line.rsplit_once(separator).unwrap_or(("", line));
    let value = value.trim();

    let depth = if path.is_empty() {
        0
    } else {
        path.matches(separator).count() + 1
    };
    let width = if comments.is_comment(value) {
        0
    } else {
        step_space * depth
    };

    PathRecord::new(path, format!("{}{value}", " ".repeat(width)))
}

/// Encode every non-blank line of a compact block
#[must_use]
pub fn encode_block(
    block: &str,
    step_space: usize,
    comments: &CommentPrefixes,
    separator: char,
) -> Vec<PathRecord> {
    block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| encode_line(line, step_space, comments, separator))
        .collect()
}

/// Render records as compact text, one per line
///
/// Top-level records carry no ancestry and are skipped.
#[must_use]
pub fn render_compact(records: &[PathRecord], separator: char) -> String {
    records
        .iter()
        .filter(|record| !record.is_root())
        .map(|record| format!("{}{separator}{}", record.path, record.value.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}
