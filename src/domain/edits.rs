//! Unsaved edits overlaid on a head snapshot.
//!
//! Edits live in memory only; saving them is the caller's business.

use super::line::{LineDocument, LineNumber, LineRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifies one line across all files of a branch.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub path: String,
    pub line_number: LineNumber,
}

impl LineKey {
    pub fn new(path: impl Into<String>, line_number: LineNumber) -> Self {
        Self {
            path: path.into(),
            line_number,
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line_number)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingEdits {
    edits: BTreeMap<LineKey, String>,
}

impl PendingEdits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records new translated text for a line, replacing any earlier edit.
    pub fn set(&mut self, key: LineKey, translated: impl Into<String>) {
        self.edits.insert(key, translated.into());
    }

    pub fn remove(&mut self, key: &LineKey) -> Option<String> {
        self.edits.remove(key)
    }

    pub fn get(&self, key: &LineKey) -> Option<&str> {
        self.edits.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn clear(&mut self) {
        self.edits.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LineKey, &str)> {
        self.edits.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Line numbers edited in `path`, ascending.
    pub fn edited_lines(&self, path: &str) -> Vec<LineNumber> {
        self.edits
            .keys()
            .filter(|k| k.path == path)
            .map(|k| k.line_number)
            .collect()
    }

    /// Returns `doc` with the edits for `path` applied to its translated column.
    ///
    /// Edits addressing lines the document does not contain are ignored.
    pub fn apply(&self, path: &str, doc: &LineDocument) -> LineDocument {
        let records = doc
            .iter()
            .map(|record| {
                let key = LineKey::new(path, record.line_number);
                match self.edits.get(&key) {
                    Some(edited) => LineRecord {
                        translated: edited.clone(),
                        ..record.clone()
                    },
                    None => record.clone(),
                }
            })
            .collect();
        LineDocument::from_records(records)
    }
}
