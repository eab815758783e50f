//! Error types for the editor
//!
//! Provides error handling for:
//! - Construction and reparse (indexing the text)
//! - Pattern compilation in matching operations
//! - Configuration loading and record export
//!
//! Finding nothing to edit is not an error: operations report `Ok(0)`.

use cfgtree_index::IndexError;

/// Errors raised by [`ConfigEditor`](crate::ConfigEditor) operations
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// Text could not be indexed (tab characters, bad boundary pattern)
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// A match pattern failed to compile
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Editor configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Records could not be exported
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Result type alias for editor operations
pub type EditResult<T> = Result<T, EditError>;
