//! Editor configuration
//!
//! Construction parameters for [`ConfigEditor`](crate::ConfigEditor):
//! indentation step, comment prefixes, path separator and an optional
//! boundary region.

use crate::error::EditResult;
use cfgtree_index::CommentPrefixes;
use serde::{Deserialize, Serialize};

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Spaces per indentation level in the indexed document
    pub step_space: usize,
    /// Comment-line prefixes
    pub comment_prefixes: CommentPrefixes,
    /// Path separator
    pub separator: char,
    /// Restrict the document to one region before indexing
    pub boundary: Option<Boundary>,
}

/// Start/end line patterns delimiting the region to index
///
/// Both patterns match at line start; the region is inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    /// Start line pattern
    pub start: String,
    /// End line pattern
    pub end: String,
}

impl Boundary {
    /// Create new boundary
    #[inline]
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl EditorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nokia SR OS style: four spaces per level, `#` and `echo` comments
    #[must_use]
    pub fn nokia_sros() -> Self {
        Self::new()
            .with_step_space(4)
            .with_comment_prefixes(CommentPrefixes::new(["#", "echo"]))
    }

    /// Cisco IOS style: one space per level, `!` comments
    #[must_use]
    pub fn cisco_ios() -> Self {
        Self::new()
            .with_step_space(1)
            .with_comment_prefixes(CommentPrefixes::new(["!"]))
    }

    /// Parse from TOML text
    ///
    /// Missing keys fall back to [`EditorConfig::default`].
    ///
    /// # Errors
    /// Returns [`EditError::Config`](crate::EditError::Config) if the TOML is invalid.
    pub fn from_toml_str(text: &str) -> EditResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// With indentation step
    #[inline]
    #[must_use]
    pub fn with_step_space(mut self, step_space: usize) -> Self {
        self.step_space = step_space;
        self
    }

    /// With comment prefixes
    #[inline]
    #[must_use]
    pub fn with_comment_prefixes(mut self, prefixes: CommentPrefixes) -> Self {
        self.comment_prefixes = prefixes;
        self
    }

    /// With path separator
    #[inline]
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// With boundary region
    #[inline]
    #[must_use]
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = Some(boundary);
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            step_space: 1,
            comment_prefixes: CommentPrefixes::none(),
            separator: ',',
            boundary: None,
        }
    }
}
