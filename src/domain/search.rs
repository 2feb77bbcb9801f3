//! Search value types: options, matches and the caller-held selection state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Match offsets per displayed line index, ascending within each line.
pub type MatchesByLine = BTreeMap<usize, Vec<usize>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    pub case_sensitive: bool,
    pub whole_word: bool,
}

/// Position of a match inside the filtered, displayed line sequence.
///
/// `char_offset` counts chars, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SearchMatch {
    pub line_index: usize,
    pub char_offset: usize,
}

/// Result of one search run plus the selected match.
///
/// Replaced wholesale on every re-search. The absence of a search is modelled
/// as `Option::<SearchState>::None`, which is distinct from a state with zero
/// matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    pub pattern: String,
    pub matches_by_line: MatchesByLine,
    pub ordered_matches: Vec<SearchMatch>,
    pub selected_index: usize,
}

impl SearchState {
    pub fn match_count(&self) -> usize {
        self.ordered_matches.len()
    }

    pub fn has_matches(&self) -> bool {
        !self.ordered_matches.is_empty()
    }

    pub fn selected_match(&self) -> Option<SearchMatch> {
        self.ordered_matches.get(self.selected_index).copied()
    }

    /// Offsets matched on `line_index`, empty when the line has none.
    pub fn matches_on_line(&self, line_index: usize) -> &[usize] {
        self.matches_by_line
            .get(&line_index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_selected(&self, line_index: usize, char_offset: usize) -> bool {
        self.selected_match() == Some(SearchMatch {
            line_index,
            char_offset,
        })
    }

    /// Advances circularly; stays at 0 when there are no matches.
    pub fn next_match(&mut self) {
        let count = self.match_count();
        self.selected_index = if count == 0 {
            0
        } else {
            (self.selected_index + 1) % count
        };
    }

    /// Retreats circularly; stays at 0 when there are no matches.
    pub fn previous_match(&mut self) {
        let count = self.match_count();
        self.selected_index = if self.selected_index == 0 {
            count.saturating_sub(1)
        } else {
            self.selected_index - 1
        };
    }

    /// Counter shown next to the search box, e.g. `"3 / 12"`.
    pub fn position_label(&self) -> String {
        if self.has_matches() {
            format!("{} / {}", self.selected_index + 1, self.match_count())
        } else {
            "0 / 0".to_string()
        }
    }
}

/// Which column of a review row feeds the search corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLanguage {
    /// The translated (French) column.
    #[default]
    Translated,
    /// The source-language (English) column.
    Original,
}

impl fmt::Display for MatchLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Translated => write!(f, "translated"),
            Self::Original => write!(f, "original"),
        }
    }
}

impl FromStr for MatchLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "translated" | "fr" => Ok(Self::Translated),
            "original" | "en" => Ok(Self::Original),
            _ => Err(format!("Invalid match language: {s}")),
        }
    }
}

/// One piece of a highlight partition over a cell's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub is_match: bool,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
