//! Delete operations

use crate::editor::ConfigEditor;
use crate::error::EditResult;
use crate::matcher::{find_between, LinePattern, WindowPattern};

impl ConfigEditor {
    /// Delete consecutive records matching a compact block
    ///
    /// Deletes the first matching window. With `multiple_match` the scan
    /// restarts from the top after every deletion, so a deletion can expose
    /// a new match earlier in the shortened sequence. Returns the number of
    /// windows deleted.
    ///
    /// # Errors
    /// Returns [`EditError::Pattern`](crate::EditError::Pattern) if a regex is invalid.
    pub fn delete_serial(
        &mut self,
        block: &str,
        regex_match: bool,
        multiple_match: bool,
    ) -> EditResult<usize> {
        let pattern = WindowPattern::new(self.encode_block(block), regex_match)?;
        let mut deleted = 0;

        while let Some(at) = pattern.find(&self.records, 0) {
            self.records.drain(at..at + pattern.len());
            deleted += 1;
            if !multiple_match {
                break;
            }
        }

        tracing::debug!(deleted, regex_match, multiple_match, "delete serial");
        Ok(deleted)
    }

    /// Delete the inclusive range between a start and an end line
    ///
    /// See [`ConfigEditor::replace_between`] for how the range is located.
    /// With `multiple_match` the whole scan repeats over the shortened
    /// sequence until no range is found. Returns the number of ranges
    /// deleted.
    ///
    /// # Errors
    /// Returns [`EditError::Pattern`](crate::EditError::Pattern) if a regex is invalid.
    pub fn delete_between(
        &mut self,
        start_line: &str,
        end_line: &str,
        regex_match: bool,
        multiple_match: bool,
    ) -> EditResult<usize> {
        let start = LinePattern::new(self.encode_line(start_line), regex_match)?;
        let end = LinePattern::new(self.encode_line(end_line), regex_match)?;
        let mut deleted = 0;

        while let Some((first, last)) = find_between(&self.records, 0, &start, &end, regex_match) {
            self.records.drain(first..=last);
            deleted += 1;
            if !multiple_match {
                break;
            }
        }

        tracing::debug!(deleted, regex_match, multiple_match, "delete between");
        Ok(deleted)
    }
}
