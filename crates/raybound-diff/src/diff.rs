//! Set difference between two divide listings.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::entry::{DivideEntry, parse_line};

/// The distinct entries of one divide listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    entries: BTreeSet<DivideEntry>,
}

impl MoveSet {
    /// Build a set from raw lines, silently dropping lines that do not parse.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = BTreeSet::new();
        for line in lines {
            let line = line.as_ref();
            match parse_line(line) {
                Some(entry) => {
                    entries.insert(entry);
                }
                None => debug!(line, "dropping malformed divide line"),
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &DivideEntry) -> bool {
        self.entries.contains(entry)
    }

    /// Sum of all node counts.
    pub fn total_nodes(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &DivideEntry> + '_ {
        self.entries.iter()
    }
}

impl FromIterator<DivideEntry> for MoveSet {
    fn from_iter<T: IntoIterator<Item = DivideEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Result of comparing a predicted listing against a reference one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// In the predicted listing but not the reference.
    pub extra: Vec<DivideEntry>,
    /// In the reference listing but not the predicted one.
    pub missing: Vec<DivideEntry>,
}

impl Report {
    /// True when both listings agree exactly.
    pub fn is_clean(&self) -> bool {
        self.extra.is_empty() && self.missing.is_empty()
    }
}

/// Compare `predicted` against `correct` in both directions.
///
/// A move with a different count appears on both sides.
pub fn diff(predicted: &MoveSet, correct: &MoveSet) -> Report {
    let report = Report {
        extra: predicted.entries.difference(&correct.entries).copied().collect(),
        missing: correct.entries.difference(&predicted.entries).copied().collect(),
    };
    debug!(
        extra = report.extra.len(),
        missing = report.missing.len(),
        "compared divide listings"
    );
    report
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Extra moves:")?;
        for entry in &self.extra {
            writeln!(f, "{entry}")?;
        }
        writeln!(f)?;
        writeln!(f, "Missing moves:")?;
        for entry in &self.missing {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
