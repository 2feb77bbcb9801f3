//! Three-way classification of translated lines.
//!
//! A line is *changed* when the branch holds text that is neither the trunk's
//! current text nor the text it forked from, and *conflicted* when the trunk
//! moved away from the fork point and still disagrees with the branch. Both can
//! hold at once.

use super::snapshots::{LineTriple, ThreeWaySnapshotSet};
use crate::domain::{LineDiff, LineNumber, LineRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Classification result for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReview {
    pub changed: BTreeSet<LineNumber>,
    pub conflicted: BTreeSet<LineNumber>,
    /// Whether the branch touched any line of the file, technical lines included.
    pub has_changes: bool,
}

impl FileReview {
    pub fn line_diff(&self, line_number: LineNumber) -> LineDiff {
        LineDiff {
            changed: self.changed.contains(&line_number),
            conflicted: self.conflicted.contains(&line_number),
        }
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicted.is_empty()
    }
}

/// A missing counterpart never equals anything, not even another missing one.
fn differs(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a != b,
        _ => true,
    }
}

fn translated(record: Option<&LineRecord>) -> Option<&str> {
    record.map(|r| r.translated.as_str())
}

/// Classifies one line from the records sharing its line number.
pub fn classify(
    origin: Option<&LineRecord>,
    base: Option<&LineRecord>,
    head: &LineRecord,
) -> LineDiff {
    let origin = translated(origin);
    let base = translated(base);
    let head = Some(head.translated.as_str());

    LineDiff {
        changed: differs(head, base) && differs(head, origin),
        conflicted: differs(base, head) && differs(base, origin),
    }
}

pub fn classify_triple(triple: &LineTriple<'_>) -> LineDiff {
    classify(triple.origin, triple.base, triple.head)
}

/// Classifies every prose line of the head snapshot.
///
/// Counterparts are resolved by line number, so the snapshots may differ in
/// length or have been filtered independently.
pub fn classify_snapshots(set: &ThreeWaySnapshotSet) -> FileReview {
    let mut review = FileReview::default();

    for triple in set.prose_triples() {
        let diff = classify_triple(&triple);
        if diff.changed {
            review.changed.insert(triple.line_number);
        }
        if diff.conflicted {
            review.conflicted.insert(triple.line_number);
        }
    }

    review.has_changes = set
        .triples()
        .any(|t| differs(Some(t.head.translated.as_str()), translated(t.origin)));

    log::debug!(
        "Classified {} head lines: {} changed, {} conflicted",
        set.head.len(),
        review.changed.len(),
        review.conflicted.len()
    );

    review
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineDocument;

    fn rec(translated: &str) -> LineRecord {
        LineRecord::new(0, "Hello", translated)
    }

    fn diff(origin: &str, base: &str, head: &str) -> LineDiff {
        classify(Some(&rec(origin)), Some(&rec(base)), &rec(head))
    }

    #[test]
    fn test_identical_triple_is_unchanged() {
        assert!(diff("Hi", "Hi", "Hi").is_unchanged());
    }

    #[test]
    fn test_branch_edit_is_changed_only() {
        let d = diff("Hi", "Hi", "Hello");
        assert!(d.changed);
        assert!(!d.conflicted);
    }

    #[test]
    fn test_trunk_edit_is_conflicted_only() {
        let d = diff("Hi", "Hey", "Hi");
        assert!(!d.changed);
        assert!(d.conflicted);
    }

    #[test]
    fn test_three_way_divergence_reports_both() {
        let d = diff("Hi", "Hey", "Hello");
        assert!(d.changed);
        assert!(d.conflicted);
    }

    #[test]
    fn test_branch_edit_already_merged_upstream_is_unchanged() {
        // Trunk picked up the branch's text: nothing left to review.
        assert!(diff("Hi", "Hello", "Hello").is_unchanged());
    }

    #[test]
    fn test_missing_origin_fails_closed() {
        let d = classify(None, Some(&rec("Hi")), &rec("Hello"));
        assert!(d.changed);
        assert!(d.conflicted);

        // Base and head agree, so there is nothing to surface whatever the fork point was.
        let d = classify(None, Some(&rec("Hi")), &rec("Hi"));
        assert!(!d.changed);
        assert!(!d.conflicted);

        let d = classify(None, None, &rec("Hi"));
        assert!(d.changed);
        assert!(d.conflicted);
    }

    #[test]
    fn test_classify_snapshots_collects_line_sets() {
        let original = "Hi\nobj_door\nBye\nYes";
        let set = ThreeWaySnapshotSet::new(
            LineDocument::from_texts(original, "Salut\nobj_door\nAu revoir\nOui"),
            LineDocument::from_texts(original, "Salut\nobj_door\nA plus\nOui"),
            LineDocument::from_texts(original, "Coucou\nobj_porte\nA bientot\nOui"),
        );
        let review = classify_snapshots(&set);
        assert_eq!(review.changed.iter().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(review.conflicted.iter().copied().collect::<Vec<_>>(), vec![2]);
        assert!(review.has_changes);
        assert_eq!(
            review.line_diff(2),
            LineDiff {
                changed: true,
                conflicted: true
            }
        );
    }

    #[test]
    fn test_classify_snapshots_with_shorter_origin() {
        let set = ThreeWaySnapshotSet::new(
            LineDocument::from_texts("Hi", "Salut"),
            LineDocument::from_texts("Hi\nNew line", "Salut\nNouvelle ligne"),
            LineDocument::from_texts("Hi\nNew line", "Salut\nNouvelle ligne"),
        );
        let review = classify_snapshots(&set);
        assert!(review.changed.is_empty());
        assert!(review.conflicted.is_empty());
        assert!(review.has_changes);
    }

    #[test]
    fn test_untouched_file_has_no_changes() {
        let doc = LineDocument::from_texts("Hi\nBye", "Salut\nAu revoir");
        let set = ThreeWaySnapshotSet::new(doc.clone(), doc.clone(), doc);
        let review = classify_snapshots(&set);
        assert_eq!(review, FileReview::default());
    }
}
