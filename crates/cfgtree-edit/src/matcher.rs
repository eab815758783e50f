//! Record and window matching
//!
//! Patterns are compiled once per operation and reused across the scan.
//! Regex matching is anchored at the start of the target ("starts with"),
//! never a whole-string match: a pattern matches a record whose tail differs.

use cfgtree_index::{anchored, PathRecord};
use regex::Regex;

/// Compiled `(path, value)` regex pair
///
/// The value regex is built from the left-stripped pattern value and is
/// matched against the left-stripped record value.
#[derive(Debug, Clone)]
pub(crate) struct LineRegex {
    pub(crate) path: Regex,
    pub(crate) value: Regex,
}

impl LineRegex {
    pub(crate) fn new(path: &str, value: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            path: anchored(path)?,
            value: anchored(value.trim_start())?,
        })
    }

    pub(crate) fn compile(record: &PathRecord) -> Result<Self, regex::Error> {
        Self::new(&record.path, &record.value)
    }

    #[inline]
    pub(crate) fn is_match(&self, record: &PathRecord) -> bool {
        self.path.is_match(&record.path) && self.value.is_match(record.value.trim_start())
    }
}

/// Single-line pattern: literal record plus optional regex form
#[derive(Debug, Clone)]
pub(crate) struct LinePattern {
    literal: PathRecord,
    regex: Option<LineRegex>,
}

impl LinePattern {
    pub(crate) fn new(literal: PathRecord, regex_match: bool) -> Result<Self, regex::Error> {
        let regex = if regex_match {
            Some(LineRegex::compile(&literal)?)
        } else {
            None
        };
        Ok(Self { literal, regex })
    }

    #[inline]
    pub(crate) fn regex_match(&self, record: &PathRecord) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(record))
    }

    #[inline]
    pub(crate) fn literal_match(&self, record: &PathRecord) -> bool {
        *record == self.literal
    }
}

/// Multi-line pattern matched against consecutive records
#[derive(Debug, Clone)]
pub(crate) struct WindowPattern {
    literal: Vec<PathRecord>,
    regex: Option<Vec<LineRegex>>,
}

impl WindowPattern {
    pub(crate) fn new(literal: Vec<PathRecord>, regex_match: bool) -> Result<Self, regex::Error> {
        let regex = if regex_match {
            Some(
                literal
                    .iter()
                    .map(LineRegex::compile)
                    .collect::<Result<Vec<_>, _>>()?,
            )
        } else {
            None
        };
        Ok(Self { literal, regex })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.literal.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.literal.is_empty()
    }

    /// Check the window starting at `at`
    ///
    /// Literal equality is tried first; windows past the end never match.
    pub(crate) fn matches_at(&self, records: &[PathRecord], at: usize) -> bool {
        let Some(window) = records.get(at..at + self.literal.len()) else {
            return false;
        };
        if window == self.literal.as_slice() {
            return true;
        }
        self.regex.as_ref().is_some_and(|lines| {
            window
                .iter()
                .zip(lines)
                .all(|(record, line)| line.is_match(record))
        })
    }

    /// First matching window at or after `from`
    pub(crate) fn find(&self, records: &[PathRecord], from: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        (from..records.len()).find(|&at| self.matches_at(records, at))
    }
}

/// Locate an inclusive `start..=end` range at or after `from`
///
/// Regex mode: a later start match replaces an earlier one, the first end
/// match strictly after the recorded start closes the range. Literal mode:
/// first record equal to start, then first record equal to end at or after
/// it.
pub(crate) fn find_between(
    records: &[PathRecord],
    from: usize,
    start: &LinePattern,
    end: &LinePattern,
    regex_match: bool,
) -> Option<(usize, usize)> {
    let tail = records.get(from..)?;

    if regex_match {
        let mut open: Option<usize> = None;
        for (offset, record) in tail.iter().enumerate() {
            let idx = from + offset;
            if let Some(first) = open {
                if idx > first && end.regex_match(record) {
                    return Some((first, idx));
                }
            }
            if start.regex_match(record) {
                open = Some(idx);
            }
        }
        None
    } else {
        let first = from + tail.iter().position(|r| start.literal_match(r))?;
        let last = first + records[first..].iter().position(|r| end.literal_match(r))?;
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(path: &str, value: &str) -> PathRecord {
        PathRecord::new(path, value)
    }

    fn tree() -> Vec<PathRecord> {
        vec![
            rec("", "configure"),
            rec("configure", " card 1"),
            rec("configure,card 1", "  mda 1"),
            rec("configure,card 1,mda 1", "   no shutdown"),
            rec("configure", " card 2"),
            rec("configure,card 2", "  mda 1"),
        ]
    }

    #[test]
    fn line_regex_is_anchored_at_start() {
        let line = LineRegex::new("configure,card", "mda").unwrap();
        assert!(line.is_match(&rec("configure,card 1", "  mda 1")));
        assert!(!line.is_match(&rec("x,configure,card 1", "  mda 1")));
        assert!(!line.is_match(&rec("configure,card 1", "  no mda")));
    }

    #[test]
    fn line_regex_strips_pattern_indent() {
        let line = LineRegex::new("configure,card 1", "    mda \\d").unwrap();
        assert!(line.is_match(&rec("configure,card 1", "  mda 1")));
    }

    #[test]
    fn window_literal_match() {
        let records = tree();
        let pattern = WindowPattern::new(records[1..3].to_vec(), false).unwrap();
        assert_eq!(pattern.find(&records, 0), Some(1));
        assert_eq!(pattern.find(&records, 2), None);
    }

    #[test]
    fn window_regex_match() {
        let records = tree();
        let pattern = WindowPattern::new(
            vec![rec("configure", " card \\d"), rec("configure,card \\d", "  mda 1")],
            true,
        )
        .unwrap();
        assert_eq!(pattern.find(&records, 0), Some(1));
        assert_eq!(pattern.find(&records, 2), Some(4));
    }

    #[test]
    fn window_regex_disabled_needs_exact_records() {
        let records = tree();
        let pattern = WindowPattern::new(vec![rec("configure", " card \\d")], false).unwrap();
        assert_eq!(pattern.find(&records, 0), None);
    }

    #[test]
    fn window_past_end_never_matches() {
        let records = tree();
        let pattern = WindowPattern::new(
            vec![rec("configure,card 2", "  mda 1"), rec("configure,card 2", "  mda 2")],
            true,
        )
        .unwrap();
        assert!(!pattern.matches_at(&records, 5));
        assert_eq!(pattern.find(&records, 0), None);
    }

    #[test]
    fn empty_window_never_matches() {
        let pattern = WindowPattern::new(Vec::new(), true).unwrap();
        assert_eq!(pattern.find(&tree(), 0), None);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        assert!(WindowPattern::new(vec![rec("(", "x")], true).is_err());
        assert!(WindowPattern::new(vec![rec("(", "x")], false).is_ok());
    }

    #[test]
    fn between_regex_latest_start_wins() {
        let records = tree();
        let start = LinePattern::new(rec("configure", " card"), true).unwrap();
        let end = LinePattern::new(rec("configure,card 2", "  mda"), true).unwrap();
        assert_eq!(find_between(&records, 0, &start, &end, true), Some((4, 5)));
    }

    #[test]
    fn between_literal_first_start() {
        let records = tree();
        let start = LinePattern::new(rec("configure", " card 1"), false).unwrap();
        let end = LinePattern::new(rec("configure,card 2", "  mda 1"), false).unwrap();
        assert_eq!(find_between(&records, 0, &start, &end, false), Some((1, 5)));
        assert_eq!(find_between(&records, 2, &start, &end, false), None);
    }

    #[test]
    fn between_literal_missing_end() {
        let records = tree();
        let start = LinePattern::new(rec("configure", " card 2"), false).unwrap();
        let end = LinePattern::new(rec("configure,card 1", "  mda 1"), false).unwrap();
        assert_eq!(find_between(&records, 0, &start, &end, false), None);
    }
}
