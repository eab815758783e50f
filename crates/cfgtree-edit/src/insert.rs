//! Insert operations

use crate::editor::ConfigEditor;
use crate::error::EditResult;
use crate::matcher::WindowPattern;

/// Where new records go relative to a matched anchor window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Before,
    After,
}

impl ConfigEditor {
    /// Insert a compact block after every matching anchor window
    ///
    /// Without `multiple_match` only the first anchor is used. With it the
    /// scan resumes after each matched window, so overlapping anchor windows
    /// get a single insertion. Returns the number of insertions.
    ///
    /// # Errors
    /// - [`EditError::Pattern`](crate::EditError::Pattern) if a regex is invalid
    /// - [`EditError::Index`](crate::EditError::Index) if the added block contains a tab
    pub fn add_after(
        &mut self,
        add_block: &str,
        anchor_block: &str,
        regex_match: bool,
        multiple_match: bool,
    ) -> EditResult<usize> {
        self.insert_at_anchors(
            add_block,
            anchor_block,
            regex_match,
            multiple_match,
            Placement::After,
        )
    }

    /// Insert a compact block before every matching anchor window
    ///
    /// Anchors are located as in [`ConfigEditor::add_after`]. Returns the
    /// number of insertions.
    ///
    /// # Errors
    /// - [`EditError::Pattern`](crate::EditError::Pattern) if a regex is invalid
    /// - [`EditError::Index`](crate::EditError::Index) if the added block contains a tab
    pub fn add_before(
        &mut self,
        add_block: &str,
        anchor_block: &str,
        regex_match: bool,
        multiple_match: bool,
    ) -> EditResult<usize> {
        self.insert_at_anchors(
            add_block,
            anchor_block,
            regex_match,
            multiple_match,
            Placement::Before,
        )
    }

    fn insert_at_anchors(
        &mut self,
        add_block: &str,
        anchor_block: &str,
        regex_match: bool,
        multiple_match: bool,
        placement: Placement,
    ) -> EditResult<usize> {
        let added = self.encode_new_block(add_block)?;
        let anchor = WindowPattern::new(self.encode_block(anchor_block), regex_match)?;

        // Insertion points are collected against the unedited sequence
        let mut points = Vec::new();
        let mut from = 0;
        while let Some(at) = anchor.find(&self.records, from) {
            points.push(match placement {
                Placement::Before => at,
                Placement::After => at + anchor.len(),
            });
            if !multiple_match {
                break;
            }
            from = at + anchor.len();
        }

        if added.is_empty() {
            return Ok(0);
        }

        // Each earlier insertion shifts the later points by the block length
        let mut shift = 0;
        for point in &points {
            let at = point + shift;
            self.records.splice(at..at, added.iter().cloned());
            shift += added.len();
        }

        tracing::debug!(
            inserted = points.len(),
            lines = added.len(),
            ?placement,
            regex_match,
            multiple_match,
            "add lines"
        );
        Ok(points.len())
    }
}
