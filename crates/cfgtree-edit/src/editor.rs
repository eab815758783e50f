//! Config editor - main entry point
//!
//! [`ConfigEditor`] owns the record sequence built from a document and
//! exposes search and structural edits over it. Edit operations live in
//! the sibling `delete`, `insert` and `replace` modules.

use crate::config::EditorConfig;
use crate::error::{EditError, EditResult};
use crate::matcher::LineRegex;
use cfgtree_index::{
    anchored, between_lines, build, encode_block, encode_line, reject_tabs, render_compact,
    PathRecord,
};

/// Path-indexed configuration document
///
/// Records are kept in document order. Every mutating operation takes
/// `&mut self`; an operation that finds nothing to edit leaves the sequence
/// untouched and reports `Ok(0)`.
#[derive(Debug, Clone)]
pub struct ConfigEditor {
    pub(crate) records: Vec<PathRecord>,
    pub(crate) config: EditorConfig,
}

impl ConfigEditor {
    /// Index a document
    ///
    /// When the configuration carries a boundary, only the region it
    /// delimits is indexed.
    ///
    /// # Errors
    /// - [`EditError::Index`] if the text contains a tab or a boundary
    ///   pattern is invalid
    pub fn new(text: &str, config: EditorConfig) -> EditResult<Self> {
        let records = match &config.boundary {
            Some(boundary) => {
                let region = between_lines(text, &boundary.start, &boundary.end)?;
                build(&region, &config.comment_prefixes, config.separator)?
            }
            None => build(text, &config.comment_prefixes, config.separator)?,
        };
        tracing::debug!(records = records.len(), "indexed document");
        Ok(Self { records, config })
    }

    /// Wrap an existing record sequence
    #[inline]
    #[must_use]
    pub fn from_records(records: Vec<PathRecord>, config: EditorConfig) -> Self {
        Self { records, config }
    }

    /// Current records in document order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[PathRecord] {
        &self.records
    }

    /// Consume the editor, returning its records
    #[inline]
    #[must_use]
    pub fn into_records(self) -> Vec<PathRecord> {
        self.records
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the document has no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Editor configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Reconstructed document text
    #[must_use]
    pub fn serialize(&self) -> String {
        join_values(&self.records)
    }

    /// Compact `path<sep>value` rendering, top-level lines omitted
    #[must_use]
    pub fn render_compact(&self) -> String {
        render_compact(&self.records, self.config.separator)
    }

    /// Records as a JSON array
    ///
    /// # Errors
    /// Returns [`EditError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> EditResult<String> {
        serde_json::to_string_pretty(&self.records)
            .map_err(|e| EditError::Serialization(e.to_string()))
    }

    /// Rebuild every path from the current text
    ///
    /// Used after edits that may have changed what the indentation means.
    ///
    /// # Errors
    /// Returns [`EditError::Index`] if a record contains a tab character.
    pub fn reparse(&mut self) -> EditResult<()> {
        self.records = self.rebuild(&self.records)?;
        tracing::debug!(records = self.records.len(), "reparsed document");
        Ok(())
    }

    /// Fresh records for the text of `records`, leaving `self` untouched
    pub(crate) fn rebuild(&self, records: &[PathRecord]) -> EditResult<Vec<PathRecord>> {
        Ok(build(
            &join_values(records),
            &self.config.comment_prefixes,
            self.config.separator,
        )?)
    }

    /// Records whose path and value both match
    ///
    /// With `regex` the patterns are anchored regexes, otherwise literal
    /// prefixes. Values are compared and returned without indentation.
    ///
    /// # Errors
    /// Returns [`EditError::Pattern`] if a regex is invalid.
    pub fn search(&self, path: &str, value: &str, regex: bool) -> EditResult<Vec<PathRecord>> {
        let stripped = self
            .records
            .iter()
            .map(|record| PathRecord::new(record.path.as_str(), record.value.trim_start()));

        let found: Vec<PathRecord> = if regex {
            let line = LineRegex::new(path, value)?;
            stripped.filter(|record| line.is_match(record)).collect()
        } else {
            stripped
                .filter(|record| record.path.starts_with(path) && record.value.starts_with(value))
                .collect()
        };

        tracing::debug!(path, value, regex, found = found.len(), "search");
        Ok(found)
    }

    /// Capture groups of every matching record
    ///
    /// Path captures come first, then value captures. Records whose
    /// patterns define no groups are omitted; groups that did not
    /// participate yield an empty string.
    ///
    /// # Errors
    /// Returns [`EditError::Pattern`] if a regex is invalid.
    pub fn search_capture(&self, path: &str, value: &str) -> EditResult<Vec<Vec<String>>> {
        let line = LineRegex::new(path, value)?;
        let mut found = Vec::new();

        for record in &self.records {
            let (Some(path_caps), Some(value_caps)) = (
                line.path.captures(&record.path),
                line.value.captures(record.value.trim_start()),
            ) else {
                continue;
            };

            let groups: Vec<String> = path_caps
                .iter()
                .skip(1)
                .chain(value_caps.iter().skip(1))
                .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
                .collect();

            if !groups.is_empty() {
                found.push(groups);
            }
        }

        tracing::debug!(path, value, found = found.len(), "search capture");
        Ok(found)
    }

    /// Check for consecutive records matching a compact block
    ///
    /// Each non-blank block line is an anchored regex matched against the
    /// compact form of one record. Top-level records compact to their bare
    /// value, so `configure` matches them and `,configure` does not.
    ///
    /// # Errors
    /// Returns [`EditError::Pattern`] if a block line is an invalid regex.
    pub fn serial_check(&self, block: &str) -> EditResult<bool> {
        let lines = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(anchored)
            .collect::<Result<Vec<_>, _>>()?;
        if lines.is_empty() {
            return Ok(false);
        }

        let compact: Vec<String> = self
            .records
            .iter()
            .map(|record| record.compact(self.config.separator))
            .collect();

        let found = compact.windows(lines.len()).any(|window| {
            window
                .iter()
                .zip(&lines)
                .all(|(text, re)| re.is_match(text))
        });
        tracing::debug!(lines = lines.len(), found, "serial check");
        Ok(found)
    }

    pub(crate) fn encode_line(&self, line: &str) -> PathRecord {
        encode_line(
            line,
            self.config.step_space,
            &self.config.comment_prefixes,
            self.config.separator,
        )
    }

    pub(crate) fn encode_block(&self, block: &str) -> Vec<PathRecord> {
        encode_block(
            block,
            self.config.step_space,
            &self.config.comment_prefixes,
            self.config.separator,
        )
    }

    /// Encode a line that will be written into the document
    pub(crate) fn encode_new_line(&self, line: &str) -> EditResult<PathRecord> {
        reject_tabs(line)?;
        Ok(self.encode_line(line))
    }

    /// Encode a block that will be written into the document
    pub(crate) fn encode_new_block(&self, block: &str) -> EditResult<Vec<PathRecord>> {
        reject_tabs(block)?;
        Ok(self.encode_block(block))
    }
}

fn join_values(records: &[PathRecord]) -> String {
    records
        .iter()
        .map(|record| record.value.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
