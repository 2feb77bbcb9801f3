//! Line-number lookup over sorted record slices.
//!
//! Snapshots of the same file may be filtered independently, so their arrays
//! stop lining up positionally while `line_number` stays a stable join key.

use super::line::{LineNumber, LineRecord};
use std::cmp::Ordering;

/// Binary search driven by a comparator that reports how `current` orders
/// relative to the target. Returns the index of an exact hit, never an
/// insertion point.
///
/// The slice must already be sorted so that the comparator is monotonic.
pub fn binary_search<T>(items: &[T], mut compare: impl FnMut(&T) -> Ordering) -> Option<usize> {
    items.binary_search_by(|item| compare(item)).ok()
}

/// Finds the index of the record carrying `target`.
///
/// `records` must be ascending by `line_number`.
pub fn find_index(records: &[LineRecord], target: LineNumber) -> Option<usize> {
    binary_search(records, |record| record.line_number.cmp(&target))
}
