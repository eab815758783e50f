//! Error types for path indexing

/// Errors raised while indexing configuration text
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Source text contains a literal tab character
    #[error("tab character found on line {line}: replace tabs with spaces")]
    TabCharacter {
        /// 1-based line number of the first offending line
        line: usize,
    },

    /// Boundary pattern failed to compile
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_error_display() {
        let err = IndexError::TabCharacter { line: 3 };
        assert_eq!(
            err.to_string(),
            "tab character found on line 3: replace tabs with spaces"
        );
    }

    #[test]
    fn pattern_error_conversion() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: IndexError = regex_err.into();
        assert!(matches!(err, IndexError::Pattern(_)));
        assert!(err.to_string().starts_with("invalid pattern"));
    }
}
