//! Match selection that survives re-searches.
//!
//! Every rerun (new pattern, toggled options, or a different line set) builds a
//! fresh [`SearchState`] and re-anchors the selection on the match nearest to
//! the previously selected one, so the view keeps its scroll position.

use super::indexer::index_lines;
use crate::domain::{MatchesByLine, SearchMatch, SearchOptions, SearchState};

/// Runs a search and carries the selection over from `previous`.
///
/// Returns `None` for an empty pattern, which is the "no active search" state.
pub fn search<S: AsRef<str>>(
    lines: &[S],
    pattern: &str,
    options: SearchOptions,
    previous: Option<&SearchState>,
) -> Option<SearchState> {
    if pattern.is_empty() {
        return None;
    }

    let matches_by_line = index_lines(lines, pattern, options);
    let ordered_matches: Vec<SearchMatch> = matches_by_line
        .iter()
        .flat_map(|(&line_index, offsets)| {
            offsets.iter().map(move |&char_offset| SearchMatch {
                line_index,
                char_offset,
            })
        })
        .collect();

    let selected_index = previous
        .and_then(SearchState::selected_match)
        .and_then(|anchor| nearest_match_index(anchor, &matches_by_line, &ordered_matches))
        .unwrap_or(0);

    Some(SearchState {
        pattern: pattern.to_string(),
        matches_by_line,
        ordered_matches,
        selected_index,
    })
}

/// Nearest line first, then nearest offset on that line; the first minimum wins.
fn nearest_match_index(
    anchor: SearchMatch,
    matches_by_line: &MatchesByLine,
    ordered_matches: &[SearchMatch],
) -> Option<usize> {
    let (&line_index, offsets) = matches_by_line
        .iter()
        .min_by_key(|(line, _)| line.abs_diff(anchor.line_index))?;
    let &char_offset = offsets
        .iter()
        .min_by_key(|offset| offset.abs_diff(anchor.char_offset))?;

    ordered_matches
        .binary_search(&SearchMatch {
            line_index,
            char_offset,
        })
        .ok()
}

/// Caller-owned search session: pattern, toggles and the latest state.
#[derive(Debug, Clone, Default)]
pub struct MatchNavigator {
    pattern: String,
    options: SearchOptions,
    state: Option<SearchState>,
}

impl MatchNavigator {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn state(&self) -> Option<&SearchState> {
        self.state.as_ref()
    }

    pub fn selected_match(&self) -> Option<SearchMatch> {
        self.state.as_ref().and_then(SearchState::selected_match)
    }

    pub fn set_pattern<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        pattern: &str,
    ) -> Option<&SearchState> {
        self.pattern = pattern.to_string();
        self.rerun(lines)
    }

    pub fn set_case_sensitive<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        case_sensitive: bool,
    ) -> Option<&SearchState> {
        self.set_options(
            lines,
            SearchOptions {
                case_sensitive,
                ..self.options
            },
        )
    }

    pub fn set_whole_word<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        whole_word: bool,
    ) -> Option<&SearchState> {
        self.set_options(
            lines,
            SearchOptions {
                whole_word,
                ..self.options
            },
        )
    }

    pub fn set_options<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        options: SearchOptions,
    ) -> Option<&SearchState> {
        self.options = options;
        self.rerun(lines)
    }

    /// Re-searches the same pattern after the displayed lines changed.
    pub fn set_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Option<&SearchState> {
        self.rerun(lines)
    }

    pub fn next(&mut self) -> Option<SearchMatch> {
        let state = self.state.as_mut()?;
        state.next_match();
        state.selected_match()
    }

    pub fn previous(&mut self) -> Option<SearchMatch> {
        let state = self.state.as_mut()?;
        state.previous_match();
        state.selected_match()
    }

    pub fn clear(&mut self) {
        self.pattern.clear();
        self.state = None;
    }

    fn rerun<S: AsRef<str>>(&mut self, lines: &[S]) -> Option<&SearchState> {
        self.state = search(lines, &self.pattern, self.options, self.state.as_ref());
        self.state.as_ref()
    }
}
