//! Infrastructure layer (adapters/implementations).
//!
//! Filesystem-facing pieces: configuration, snapshot loading and hashing.

pub mod app_config;
pub mod files;
pub mod hash;
