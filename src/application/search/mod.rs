//! Incremental literal search over the displayed lines.

pub mod indexer;
pub mod navigator;
pub mod parts;

pub use indexer::{index_lines, is_word_char, matches_on_line};
pub use navigator::{MatchNavigator, search};
pub use parts::split_into_parts;
