//! Three-way review and incremental search over line-oriented translation files.

pub mod application;
pub mod domain;
pub mod infra;
