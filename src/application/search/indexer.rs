//! Literal pattern scan over displayed lines.
//!
//! Offsets are char positions so they line up with the text a cell renders.

use crate::domain::{MatchesByLine, SearchOptions};

/// Accented letters of French text that count as part of a word, in both cases.
const ACCENTED_WORD_CHARS: [char; 22] = [
    'é', 'è', 'ê', 'û', 'ô', 'î', 'ï', 'ç', 'à', 'ù', 'ü', 'É', 'È', 'Ê', 'Û', 'Ô', 'Î', 'Ï', 'Ç',
    'À', 'Ù', 'Ü',
];

pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ACCENTED_WORD_CHARS.contains(&c)
}

/// Lowercases one char, keeping it unchanged when its lowercase form spans
/// several chars so folded text stays aligned with the original.
fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn prepare(text: &str, case_sensitive: bool) -> Vec<char> {
    if case_sensitive {
        text.chars().collect()
    } else {
        text.chars().map(fold_char).collect()
    }
}

fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

/// Line edges count as word boundaries.
fn is_whole_word(haystack: &[char], start: usize, len: usize) -> bool {
    let before = start.checked_sub(1).and_then(|i| haystack.get(i));
    let after = haystack.get(start + len);
    !before.is_some_and(|&c| is_word_char(c)) && !after.is_some_and(|&c| is_word_char(c))
}

/// Start offsets of `pattern` in `line`, left to right, without overlaps.
///
/// The scan resumes right after every candidate, including candidates the
/// whole-word check rejects.
pub fn matches_on_line(line: &str, pattern: &str, options: SearchOptions) -> Vec<usize> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let haystack = prepare(line, options.case_sensitive);
    let needle = prepare(pattern, options.case_sensitive);

    let mut matches = Vec::new();
    let mut pos = 0;
    while let Some(found) = find_from(&haystack, &needle, pos) {
        if !options.whole_word || is_whole_word(&haystack, found, needle.len()) {
            matches.push(found);
        }
        pos = found + needle.len();
    }
    matches
}

/// Indexes every line; lines without matches are left out of the map.
pub fn index_lines<S: AsRef<str>>(
    lines: &[S],
    pattern: &str,
    options: SearchOptions,
) -> MatchesByLine {
    let mut matches_by_line = MatchesByLine::new();
    if pattern.is_empty() {
        return matches_by_line;
    }

    for (line_index, line) in lines.iter().enumerate() {
        let matches = matches_on_line(line.as_ref(), pattern, options);
        if !matches.is_empty() {
            matches_by_line.insert(line_index, matches);
        }
    }

    log::debug!(
        "Indexed {} lines for {:?}: {} lines matched",
        lines.len(),
        pattern,
        matches_by_line.len()
    );
    matches_by_line
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSENSITIVE: SearchOptions = SearchOptions {
        case_sensitive: false,
        whole_word: false,
    };

    fn whole_word(case_sensitive: bool) -> SearchOptions {
        SearchOptions {
            case_sensitive,
            whole_word: true,
        }
    }

    #[test]
    fn test_empty_pattern_yields_nothing() {
        assert!(index_lines(&["abc"], "", INSENSITIVE).is_empty());
        assert!(matches_on_line("abc", "", INSENSITIVE).is_empty());
    }

    #[test]
    fn test_only_matching_lines_are_indexed() {
        let lines = ["Bonjour le monde", "au revoir"];
        let result = index_lines(&lines, "au", INSENSITIVE);
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(&1), Some(&vec![0]));
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(matches_on_line("Chat CHAT chat", "chat", INSENSITIVE), vec![0, 5, 10]);
        let sensitive = SearchOptions {
            case_sensitive: true,
            whole_word: false,
        };
        assert_eq!(matches_on_line("Chat CHAT chat", "chat", sensitive), vec![10]);
        assert_eq!(matches_on_line("ÉTÉ", "été", INSENSITIVE), vec![0]);
    }

    #[test]
    fn test_matches_do_not_overlap() {
        assert_eq!(matches_on_line("aaaa", "aa", INSENSITIVE), vec![0, 2]);
        assert_eq!(matches_on_line("aaa", "aa", INSENSITIVE), vec![0]);
    }

    #[test]
    fn test_whole_word_rejects_prefixes() {
        assert_eq!(matches_on_line("cat category", "cat", whole_word(false)), vec![0]);
        assert_eq!(matches_on_line("bobcat cat.", "cat", whole_word(false)), vec![7]);
        assert_eq!(matches_on_line("(cat)", "cat", whole_word(false)), vec![1]);
    }

    #[test]
    fn test_whole_word_treats_accents_as_word_chars() {
        assert!(matches_on_line("chaté", "chat", whole_word(false)).is_empty());
        assert!(matches_on_line("CHATÉ", "chat", whole_word(false)).is_empty());
        assert!(matches_on_line("chat_1", "chat", whole_word(false)).is_empty());
        assert_eq!(matches_on_line("le chat, vite", "chat", whole_word(false)), vec![3]);
    }

    #[test]
    fn test_rejected_candidate_still_advances_scan() {
        // "aa" at 0 is rejected (followed by 'a'); the scan resumes at 2, not 1.
        assert_eq!(matches_on_line("aaa aa", "aa", whole_word(true)), vec![4]);
    }

    #[test]
    fn test_offsets_count_chars_not_bytes() {
        assert_eq!(matches_on_line("déjà vu", "vu", INSENSITIVE), vec![5]);
    }
}
