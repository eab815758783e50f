//! Replace operations

use crate::editor::ConfigEditor;
use crate::error::EditResult;
use crate::matcher::{find_between, LinePattern, LineRegex, WindowPattern};
use cfgtree_index::PathRecord;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static GROUP_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\(\d+)|\\g<(\w+)>").expect("static group pattern"));

/// Turn replacement text with `\1` or `\g<name>` group references into a
/// [`Regex::replace`] template
///
/// Every `$` in the text is literal.
fn replacement_template(text: &str) -> String {
    let escaped = text.replace('$', "$$");
    GROUP_REFERENCE
        .replace_all(&escaped, |caps: &Captures<'_>| {
            let group = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            format!("${{{group}}}")
        })
        .into_owned()
}

impl ConfigEditor {
    /// Replace a single line
    ///
    /// With `regex_backreference`, every record matching the old pattern has
    /// its path and value rewritten by substitution, so groups captured by
    /// the old pattern can be reused in the new text (`\1` or `\g<1>`).
    /// A `$` in the new text is kept as is.
    /// Otherwise matching records (regex match when `regex_match`, or exact
    /// equality) are overwritten by the new line: the whole record with
    /// `replace_path`, only the value without it. Only the first match is
    /// replaced unless `multiple_match`. Returns the number of records
    /// replaced.
    ///
    /// # Errors
    /// - [`EditError::Pattern`](crate::EditError::Pattern) if a regex is invalid
    /// - [`EditError::Index`](crate::EditError::Index) if the new line contains a tab
    pub fn replace_line(
        &mut self,
        old_line: &str,
        new_line: &str,
        regex_match: bool,
        multiple_match: bool,
        regex_backreference: bool,
        replace_path: bool,
    ) -> EditResult<usize> {
        let old = self.encode_line(old_line);
        let new = self.encode_new_line(new_line)?;

        let replaced = if regex_backreference {
            self.substitute_lines(&old, &new, multiple_match)?
        } else {
            let old = LinePattern::new(old, regex_match)?;
            let mut hits = Vec::new();
            for (idx, record) in self.records.iter().enumerate() {
                if old.regex_match(record) || old.literal_match(record) {
                    hits.push(idx);
                    if !multiple_match {
                        break;
                    }
                }
            }

            for &idx in &hits {
                if replace_path {
                    self.records[idx] = new.clone();
                } else {
                    self.records[idx].value.clone_from(&new.value);
                }
            }
            hits.len()
        };

        tracing::debug!(
            replaced,
            regex_match,
            multiple_match,
            regex_backreference,
            replace_path,
            "replace line"
        );
        Ok(replaced)
    }

    fn substitute_lines(
        &mut self,
        old: &PathRecord,
        new: &PathRecord,
        multiple_match: bool,
    ) -> EditResult<usize> {
        let old = LineRegex::compile(old)?;
        let path_template = replacement_template(&new.path);
        let value_template = replacement_template(new.value.trim_start());
        let indent = &new.value[..new.value.len() - new.value.trim_start().len()];

        let mut replaced = 0;
        for record in &mut self.records {
            if !old.is_match(record) {
                continue;
            }

            let path = old.path.replace(&record.path, path_template.as_str()).into_owned();
            let value = old
                .value
                .replace(record.value.trim_start(), value_template.as_str())
                .into_owned();
            record.path = path;
            record.value = format!("{indent}{value}");

            replaced += 1;
            if !multiple_match {
                break;
            }
        }

        Ok(replaced)
    }

    /// Replace consecutive records matching a compact block
    ///
    /// Each matched window is swapped for the new block, which may differ
    /// in length. With `multiple_match` the scan resumes after the inserted
    /// block. A regex-driven replacement is followed by a reparse because
    /// the new lines may change the nesting. Returns the number of windows
    /// replaced.
    ///
    /// # Errors
    /// - [`EditError::Pattern`](crate::EditError::Pattern) if a regex is invalid
    /// - [`EditError::Index`](crate::EditError::Index) if the new block contains a tab
    ///   or the reparse fails; the document is left untouched
    pub fn replace_serial(
        &mut self,
        old_block: &str,
        new_block: &str,
        regex_match: bool,
        multiple_match: bool,
    ) -> EditResult<usize> {
        let old = WindowPattern::new(self.encode_block(old_block), regex_match)?;
        let new = self.encode_new_block(new_block)?;

        let mut records = self.records.clone();
        let mut replaced = 0;
        let mut from = 0;
        while let Some(at) = old.find(&records, from) {
            records.splice(at..at + old.len(), new.iter().cloned());
            replaced += 1;
            if !multiple_match {
                break;
            }
            from = at + new.len();
        }

        if regex_match && replaced > 0 {
            records = self.rebuild(&records)?;
        }
        self.records = records;

        tracing::debug!(replaced, regex_match, multiple_match, "replace serial");
        Ok(replaced)
    }

    /// Replace the inclusive range between a start and an end line
    ///
    /// Regex mode: the latest start match before an end match opens the
    /// range and the first end match strictly after it closes it. Literal
    /// mode: the first record equal to the start line, then the first
    /// record at or after it equal to the end line. With `multiple_match`
    /// the scan resumes after the inserted block. A regex-driven replacement
    /// is followed by a reparse. Returns the number of ranges replaced.
    ///
    /// # Errors
    /// - [`EditError::Pattern`](crate::EditError::Pattern) if a regex is invalid
    /// - [`EditError::Index`](crate::EditError::Index) if the new block contains a tab
    ///   or the reparse fails; the document is left untouched
    pub fn replace_between(
        &mut self,
        start_line: &str,
        end_line: &str,
        new_block: &str,
        regex_match: bool,
        multiple_match: bool,
    ) -> EditResult<usize> {
        let start = LinePattern::new(self.encode_line(start_line), regex_match)?;
        let end = LinePattern::new(self.encode_line(end_line), regex_match)?;
        let new = self.encode_new_block(new_block)?;

        let mut records = self.records.clone();
        let mut replaced = 0;
        let mut from = 0;
        while let Some((first, last)) = find_between(&records, from, &start, &end, regex_match) {
            records.splice(first..=last, new.iter().cloned());
            replaced += 1;
            if !multiple_match {
                break;
            }
            from = first + new.len();
        }

        if regex_match && replaced > 0 {
            records = self.rebuild(&records)?;
        }
        self.records = records;

        tracing::debug!(replaced, regex_match, multiple_match, "replace between");
        Ok(replaced)
    }
}
