//! Rows of the review view and the default filter deciding which are shown.

use super::classify::FileReview;
use super::snapshots::ThreeWaySnapshotSet;
use crate::domain::{LineNumber, LineRecord, MatchLanguage};
use serde::{Deserialize, Serialize};

/// One prose line as the reviewer sees it: trunk text next to branch text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewLine {
    pub line_number: LineNumber,
    pub original: String,
    /// Current trunk translation, empty when the trunk has no such line.
    pub old_translated: String,
    /// Branch translation.
    pub new_translated: String,
}

impl ReviewLine {
    /// Text of the column searched for `language`.
    pub fn text(&self, language: MatchLanguage) -> &str {
        match language {
            MatchLanguage::Translated => &self.new_translated,
            MatchLanguage::Original => &self.original,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowFilter {
    All,
    ChangedOnly,
}

/// Files the branch touched open on their changed rows; others show everything.
pub fn default_row_filter(review: &FileReview) -> RowFilter {
    if review.has_changes {
        RowFilter::ChangedOnly
    } else {
        RowFilter::All
    }
}

/// Joins head prose lines with the trunk's current text by line number.
pub fn review_lines(set: &ThreeWaySnapshotSet) -> Vec<ReviewLine> {
    set.prose_triples()
        .map(|t| ReviewLine {
            line_number: t.line_number,
            original: t.head.original.clone(),
            old_translated: t.base.map(|b| b.translated.clone()).unwrap_or_default(),
            new_translated: t.head.translated.clone(),
        })
        .collect()
}

pub fn rows_to_display<'a>(
    lines: &'a [ReviewLine],
    review: &FileReview,
    filter: RowFilter,
) -> Vec<&'a ReviewLine> {
    match filter {
        RowFilter::All => lines.iter().collect(),
        RowFilter::ChangedOnly => lines
            .iter()
            .filter(|line| review.changed.contains(&line.line_number))
            .collect(),
    }
}

/// The displayed lines as search input, in display order.
pub fn search_corpus<'a>(rows: &[&'a ReviewLine], language: MatchLanguage) -> Vec<&'a str> {
    rows.iter().map(|row| row.text(language)).collect()
}

/// Search input for the editing view, which shows plain records.
pub fn record_corpus(records: &[LineRecord], language: MatchLanguage) -> Vec<&str> {
    records
        .iter()
        .map(|r| match language {
            MatchLanguage::Translated => r.translated.as_str(),
            MatchLanguage::Original => r.original.as_str(),
        })
        .collect()
}
