//! Detection of non-prose lines (asset names, script identifiers).
//!
//! The same predicate filters the review rows and the search corpus, so both
//! always operate over the same visible lines.

use crate::domain::{LineDocument, LineRecord};
use once_cell::sync::Lazy;
use regex::Regex;

const TECHNICAL_PREFIXES: [&str; 4] = ["obj_", "scr_", "gml_", "DEVICE_"];

static LOWERCASE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+$").expect("lowercase word regex"));
static UNDERSCORE_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]*_[a-zA-Z0-9_]*$").expect("underscore identifier regex"));
static CAMEL_CASE_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+[A-Z0-9][a-zA-Z0-9]*$").expect("camel case identifier regex"));

pub fn is_technical(line: &str) -> bool {
    line.trim().is_empty()
        || TECHNICAL_PREFIXES.iter().any(|p| line.starts_with(p))
        || LOWERCASE_WORD.is_match(line)
        || UNDERSCORE_IDENT.is_match(line)
        || CAMEL_CASE_IDENT.is_match(line)
}

/// A record is prose when its source-language text is not technical.
pub fn is_prose(record: &LineRecord) -> bool {
    !is_technical(&record.original)
}

/// Drops technical records, keeping the remaining line numbers untouched.
pub fn prose_lines(doc: &LineDocument) -> LineDocument {
    doc.filtered(is_prose)
}
