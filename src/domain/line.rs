//! Line-oriented document model shared by review and search.

use super::lookup;
use serde::{Deserialize, Serialize};

/// Zero-based offset of a line inside its file.
pub type LineNumber = usize;

/// One line of a translation file: the source-language text next to its translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub line_number: LineNumber,
    /// Source-language text.
    pub original: String,
    /// Translated text; empty when no translation was supplied yet.
    pub translated: String,
}

impl LineRecord {
    pub fn new(
        line_number: LineNumber,
        original: impl Into<String>,
        translated: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            original: original.into(),
            translated: translated.into(),
        }
    }
}

/// A snapshot of one file, ordered ascending by `line_number` with unique keys.
///
/// Filtered documents keep their original line numbers, so keys may be sparse.
/// Deserialization goes through [`LineDocument::from_records`], so the ordering
/// holds for documents read back from JSON or TOML too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LineRecord>", into = "Vec<LineRecord>")]
pub struct LineDocument {
    lines: Vec<LineRecord>,
}

impl LineDocument {
    /// Zips the source-language text with its translation line by line.
    ///
    /// Both texts are split on `'\n'`; the shorter side is padded with empty
    /// strings so every line has both columns.
    pub fn from_texts(original: &str, translated: &str) -> Self {
        let originals: Vec<&str> = original.split('\n').collect();
        let translations: Vec<&str> = translated.split('\n').collect();
        let len = originals.len().max(translations.len());

        let lines = (0..len)
            .map(|i| LineRecord {
                line_number: i,
                original: originals.get(i).copied().unwrap_or_default().to_string(),
                translated: translations.get(i).copied().unwrap_or_default().to_string(),
            })
            .collect();

        Self { lines }
    }

    /// Builds a document from arbitrary records, sorting them and keeping the
    /// first record of any duplicated line number.
    pub fn from_records(mut records: Vec<LineRecord>) -> Self {
        records.sort_by_key(|r| r.line_number);
        records.dedup_by_key(|r| r.line_number);
        Self { lines: records }
    }

    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineRecord> {
        self.lines.iter()
    }

    /// Resolves a record by line number in O(log n).
    pub fn find(&self, line_number: LineNumber) -> Option<&LineRecord> {
        lookup::find_index(&self.lines, line_number).map(|idx| &self.lines[idx])
    }

    /// Keeps the records matching `keep`, preserving order and line numbers.
    pub fn filtered(&self, mut keep: impl FnMut(&LineRecord) -> bool) -> Self {
        Self {
            lines: self.lines.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    pub fn into_records(self) -> Vec<LineRecord> {
        self.lines
    }
}

impl From<Vec<LineRecord>> for LineDocument {
    fn from(records: Vec<LineRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<LineDocument> for Vec<LineRecord> {
    fn from(doc: LineDocument) -> Self {
        doc.lines
    }
}

impl<'a> IntoIterator for &'a LineDocument {
    type Item = &'a LineRecord;
    type IntoIter = std::slice::Iter<'a, LineRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
