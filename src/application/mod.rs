//! Application layer (use-cases, policies).
//!
//! Pure review and search logic over domain types. Nothing here performs I/O;
//! callers hand in snapshots and keep whatever state they need between calls.

pub mod review;
pub mod search;
