//! Review use-cases: technical-line filtering, three-way classification and
//! the row model of the review view.

pub mod cache;
pub mod classify;
pub mod ordering;
pub mod rows;
pub mod snapshots;
pub mod technical;

pub use cache::ReviewCache;
pub use classify::{FileReview, classify, classify_snapshots};
pub use rows::{ReviewLine, RowFilter};
pub use snapshots::{LineTriple, ThreeWaySnapshotSet};
pub use technical::{is_technical, prose_lines};
