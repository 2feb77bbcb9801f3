//! Domain types for transreview.
//! Line documents, per-line review status and search state shared by the engines.

pub mod diff_status;
pub mod edits;
pub mod error;
pub mod file;
pub mod line;
pub mod lookup;
pub mod search;

pub use diff_status::*;
pub use edits::*;
pub use error::*;
pub use file::*;
pub use line::*;
pub use search::*;
