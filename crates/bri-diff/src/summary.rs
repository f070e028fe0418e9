//! Per-key verdicts and their tally.

use serde::Serialize;

/// How the two sides of one merged key relate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Both sides render identically (and, for objects, are deep-equal).
    Same,
    /// Both sides present, single-level renderings differ.
    Different,
    /// An object whose own line matches but whose nested content differs.
    NestedDifferent,
    /// Present in the first preset only.
    LeftOnly,
    /// Present in the second preset only.
    RightOnly,
}

impl Verdict {
    /// Returns `true` for every verdict except [`Verdict::Same`].
    pub fn is_difference(self) -> bool {
        !matches!(self, Self::Same)
    }
}

/// Verdict counts over a whole merged tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub same: usize,
    pub different: usize,
    pub nested_different: usize,
    pub left_only: usize,
    pub right_only: usize,
}

impl DiffSummary {
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Same => self.same += 1,
            Verdict::Different => self.different += 1,
            Verdict::NestedDifferent => self.nested_different += 1,
            Verdict::LeftOnly => self.left_only += 1,
            Verdict::RightOnly => self.right_only += 1,
        }
    }

    /// Number of keys that differ in any way.
    pub fn differences(&self) -> usize {
        self.different + self.nested_different + self.left_only + self.right_only
    }

    /// Total number of keys tallied.
    pub fn total(&self) -> usize {
        self.same + self.differences()
    }

    /// Returns `true` if no key differs.
    pub fn is_identical(&self) -> bool {
        self.differences() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_totals() {
        let mut summary = DiffSummary::default();
        assert!(summary.is_identical());
        summary.record(Verdict::Same);
        summary.record(Verdict::Same);
        summary.record(Verdict::LeftOnly);
        summary.record(Verdict::NestedDifferent);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.differences(), 2);
        assert!(!summary.is_identical());
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&Verdict::NestedDifferent).unwrap();
        assert_eq!(json, "\"nested_different\"");
    }
}
