//! Path records and comment prefixes
//!
//! Provides [`PathRecord`], one configuration line together with the
//! separator-joined tokens of its ancestors, and [`CommentPrefixes`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// One configuration line with its ancestry
///
/// `path` is the ancestor tokens joined with the document separator, empty
/// for top-level lines. `value` is the line itself, leading whitespace kept.
///
/// # Examples
/// - `("", "configure")`
/// - `("configure,card 1", "  mda 1")`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PathRecord {
    /// Separator-joined ancestor tokens
    pub path: String,
    /// Original line including leading whitespace
    pub value: String,
}

impl PathRecord {
    /// Create new record
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Line text without indentation
    #[inline]
    #[must_use]
    pub fn token(&self) -> &str {
        self.value.trim()
    }

    /// Number of leading whitespace characters in the line
    #[inline]
    #[must_use]
    pub fn indent(&self) -> usize {
        indent_width(&self.value)
    }

    /// Check if record sits at the top level
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Iterator over ancestor tokens, outermost first
    pub fn ancestors(&self, separator: char) -> impl Iterator<Item = &str> {
        self.path.split(separator).filter(|seg| !seg.is_empty())
    }

    /// Compact single-line form: `path<sep>token`
    ///
    /// Top-level records render as the bare token.
    #[must_use]
    pub fn compact(&self, separator: char) -> String {
        if self.path.is_empty() {
            self.value.trim_start().to_string()
        } else {
            format!("{}{separator}{}", self.path, self.value.trim_start())
        }
    }
}

impl Display for PathRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.path, self.value.trim_start())
    }
}

impl<P: Into<String>, V: Into<String>> From<(P, V)> for PathRecord {
    fn from((path, value): (P, V)) -> Self {
        Self::new(path, value)
    }
}

/// Leading whitespace width of a line, in characters
#[inline]
#[must_use]
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Set of literal comment-line prefixes
///
/// A line is a comment iff it starts with one of the prefixes. Indentation
/// is part of the line, so an indented `#` only matches a prefix that
/// carries the same indentation. Deserialized lists go through
/// [`CommentPrefixes::new`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CommentPrefixes(Vec<String>);

impl CommentPrefixes {
    /// No comment prefixes
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Create from prefixes, dropping empties and duplicates
    #[must_use]
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for prefix in prefixes {
            let prefix = prefix.into();
            // An empty prefix would mark every line as a comment
            if !prefix.is_empty() && !out.contains(&prefix) {
                out.push(prefix);
            }
        }
        Self(out)
    }

    /// Check if line is a comment
    #[inline]
    #[must_use]
    pub fn is_comment(&self, line: &str) -> bool {
        self.0.iter().any(|prefix| line.starts_with(prefix.as_str()))
    }

    /// Registered prefixes
    #[inline]
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.0
    }

    /// Check if no prefixes are registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for CommentPrefixes {
    fn from(prefixes: Vec<String>) -> Self {
        Self::new(prefixes)
    }
}

impl From<CommentPrefixes> for Vec<String> {
    fn from(prefixes: CommentPrefixes) -> Self {
        prefixes.0
    }
}

impl<S: Into<String>> FromIterator<S> for CommentPrefixes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
