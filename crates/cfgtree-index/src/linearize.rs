//! Indentation to path linearization
//!
//! Converts indented configuration text into an ordered sequence of
//! [`PathRecord`]s. A line's parent is the nearest preceding non-comment
//! line with smaller indentation.

use crate::error::IndexError;
use crate::record::{indent_width, CommentPrefixes, PathRecord};
use regex::Regex;
use smallvec::SmallVec;

/// Live ancestors, shallowest first: `(width, token)`
type IndentStack = SmallVec<[(usize, String); 8]>;

/// Build path records from indented text
///
/// Blank lines are dropped and trailing whitespace is trimmed. Comment lines
/// never enter the indent stack: they take the path of the most recent
/// non-comment line, or that line's own token when it sits at the top level,
/// or an empty path when no non-comment line precedes them.
///
/// # Errors
/// Returns [`IndexError::TabCharacter`] if the text contains a tab.
///
/// # Examples
/// ```
/// # use cfgtree_index::{build, CommentPrefixes, PathRecord};
/// let records = build("configure\n card 1", &CommentPrefixes::none(), ',').unwrap();
/// assert_eq!(records[1], PathRecord::new("configure", " card 1"));
/// ```
pub fn build(
    text: &str,
    comments: &CommentPrefixes,
    separator: char,
) -> Result<Vec<PathRecord>, IndexError> {
    reject_tabs(text)?;

    let separator = separator.to_string();
    let mut stack = IndentStack::new();
    // (path, token) of the most recent non-comment line
    let mut last: Option<(String, String)> = None;
    let mut records = Vec::new();

    for line in text.lines().map(str::trim_end) {
        if line.is_empty() {
            continue;
        }

        if comments.is_comment(line) {
            let path = match &last {
                Some((path, _)) if !path.is_empty() => path.clone(),
                Some((_, token)) => token.clone(),
                None => String::new(),
            };
            records.push(PathRecord::new(path, line));
            continue;
        }

        let width = indent_width(line);
        while stack.last().is_some_and(|(w, _)| *w >= width) {
            stack.pop();
        }

        let path = join_stack(&stack, &separator);
        let token = line.trim_start().to_string();
        stack.push((width, token.clone()));
        records.push(PathRecord::new(path.clone(), line));
        last = Some((path, token));
    }

    tracing::trace!(records = records.len(), "built path records");
    Ok(records)
}

fn join_stack(stack: &IndentStack, separator: &str) -> String {
    stack
        .iter()
        .map(|(_, token)| token.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Fail on the first line that contains a tab character
///
/// # Errors
/// Returns [`IndexError::TabCharacter`] with the 1-based line number.
pub fn reject_tabs(text: &str) -> Result<(), IndexError> {
    match text.lines().position(|line| line.contains('\t')) {
        Some(idx) => Err(IndexError::TabCharacter { line: idx + 1 }),
        None => Ok(()),
    }
}

/// Compile a pattern that only matches at the start of its target
///
/// # Errors
/// Returns the compilation error for an invalid pattern.
pub fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})"))
}

/// Extract the inclusive region between a start and an end line
///
/// Both patterns match at line start. A later start match replaces an
/// earlier one; the first end match strictly after the recorded start closes
/// the region. Returns an empty string when no such pair exists.
///
/// # Errors
/// Returns [`IndexError::Pattern`] if either pattern is invalid.
pub fn between_lines(
    text: &str,
    start_pattern: &str,
    end_pattern: &str,
) -> Result<String, IndexError> {
    let start_re = anchored(start_pattern)?;
    let end_re = anchored(end_pattern)?;

    let lines: Vec<&str> = text.lines().collect();
    let mut start: Option<usize> = None;

    for (idx, line) in lines.iter().enumerate() {
        if let Some(from) = start {
            if idx > from && end_re.is_match(line) {
                tracing::trace!(from, to = idx, "boundary region located");
                return Ok(lines[from..=idx].join("\n"));
            }
        }
        if start_re.is_match(line) {
            start = Some(idx);
        }
    }

    Ok(String::new())
}
