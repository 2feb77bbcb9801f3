use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of a single line, recomputed on demand and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiffStatus {
    #[default]
    Unchanged,
    /// The branch carries translator work not present upstream.
    Changed,
    /// The trunk moved away from the fork point and disagrees with the branch.
    Conflicted,
}

impl fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => write!(f, "unchanged"),
            Self::Changed => write!(f, "changed"),
            Self::Conflicted => write!(f, "conflicted"),
        }
    }
}

impl FromStr for DiffStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UNCHANGED" | "SAME" => Ok(Self::Unchanged),
            "CHANGED" | "MODIFIED" => Ok(Self::Changed),
            "CONFLICTED" | "CONFLICT" => Ok(Self::Conflicted),
            _ => Err(format!("Invalid diff status: {s}")),
        }
    }
}

/// Both classification predicates for one line.
///
/// A three-way divergence sets both flags; callers surface both facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineDiff {
    pub changed: bool,
    pub conflicted: bool,
}

impl LineDiff {
    pub fn is_unchanged(&self) -> bool {
        !self.changed && !self.conflicted
    }

    /// Every status that applies, `Unchanged` alone when neither predicate holds.
    pub fn statuses(&self) -> Vec<DiffStatus> {
        let mut out = Vec::with_capacity(2);
        if self.changed {
            out.push(DiffStatus::Changed);
        }
        if self.conflicted {
            out.push(DiffStatus::Conflicted);
        }
        if out.is_empty() {
            out.push(DiffStatus::Unchanged);
        }
        out
    }

    pub fn has(&self, status: DiffStatus) -> bool {
        match status {
            DiffStatus::Unchanged => self.is_unchanged(),
            DiffStatus::Changed => self.changed,
            DiffStatus::Conflicted => self.conflicted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_status_display_parse() {
        assert_eq!(DiffStatus::Conflicted.to_string(), "conflicted");
        assert_eq!(DiffStatus::from_str("CHANGED").unwrap(), DiffStatus::Changed);
        assert_eq!(
            DiffStatus::from_str("conflict").unwrap(),
            DiffStatus::Conflicted
        );
        assert!(DiffStatus::from_str("merged").is_err());
    }

    #[test]
    fn test_statuses_for_double_divergence() {
        let diff = LineDiff {
            changed: true,
            conflicted: true,
        };
        assert_eq!(
            diff.statuses(),
            vec![DiffStatus::Changed, DiffStatus::Conflicted]
        );
        assert!(!diff.has(DiffStatus::Unchanged));
    }

    #[test]
    fn test_statuses_for_untouched_line() {
        let diff = LineDiff::default();
        assert!(diff.is_unchanged());
        assert_eq!(diff.statuses(), vec![DiffStatus::Unchanged]);
    }
}
