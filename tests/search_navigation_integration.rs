use transreview::application::review::rows::{
    RowFilter, review_lines, rows_to_display, search_corpus,
};
use transreview::application::review::{ThreeWaySnapshotSet, classify_snapshots};
use transreview::application::search::{MatchNavigator, index_lines, search, split_into_parts};
use transreview::domain::{LineDocument, MatchLanguage, SearchMatch, SearchOptions, SearchState};

fn at(line_index: usize, char_offset: usize) -> SearchMatch {
    SearchMatch {
        line_index,
        char_offset,
    }
}

fn review_set() -> ThreeWaySnapshotSet {
    let original = "Hello\nLong day\nscr_title\nGood night\nNo one";
    let translated = "Bonjour\nLongue journée\nscr_title\nBonne nuit\nNon";
    let doc = LineDocument::from_texts(original, translated);
    ThreeWaySnapshotSet::new(doc.clone(), doc.clone(), doc)
}

#[test]
fn test_search_scenario_from_review_rows() {
    let set = review_set();
    let review = classify_snapshots(&set);
    let lines = review_lines(&set);
    let rows = rows_to_display(&lines, &review, RowFilter::All);
    let corpus = search_corpus(&rows, MatchLanguage::Translated);

    // The technical row is gone, so display indices differ from line numbers.
    assert_eq!(corpus, vec!["Bonjour", "Longue journée", "Bonne nuit", "Non"]);

    let state = search(&corpus, "on", SearchOptions::default(), None).unwrap();
    assert_eq!(
        state.ordered_matches,
        vec![at(0, 1), at(1, 1), at(2, 1), at(3, 1)]
    );
    assert_eq!(rows[3].line_number, 4);
}

#[test]
fn test_bonjour_scenario() {
    let lines = ["Bonjour le monde", "au revoir"];
    let matches = index_lines(&lines, "au", SearchOptions::default());
    assert_eq!(matches.into_iter().collect::<Vec<_>>(), vec![(1, vec![0])]);
}

#[test]
fn test_language_toggle_keeps_nearest_selection() {
    let set = review_set();
    let review = classify_snapshots(&set);
    let lines = review_lines(&set);
    let rows = rows_to_display(&lines, &review, RowFilter::All);

    let translated = search_corpus(&rows, MatchLanguage::Translated);
    let original = search_corpus(&rows, MatchLanguage::Original);

    let mut nav = MatchNavigator::new(SearchOptions::default());
    nav.set_pattern(&translated, "on");
    nav.next();
    nav.next();
    assert_eq!(nav.selected_match(), Some(at(2, 1)));

    // "Long day" and "No one" are equally close; the lower line wins.
    nav.set_lines(&original);
    assert_eq!(
        nav.state().map(|s| s.ordered_matches.clone()),
        Some(vec![at(1, 1), at(3, 3)])
    );
    assert_eq!(nav.selected_match(), Some(at(1, 1)));

    nav.set_lines(&translated);
    assert_eq!(nav.selected_match(), Some(at(1, 1)));
}

#[test]
fn test_next_is_circular_from_any_start() {
    let lines = [
        "Le chat dort.",
        "Chats et chatons",
        "Rien",
        "CHAT",
        "un chat, deux chats",
    ];

    for options in [
        SearchOptions::default(),
        SearchOptions {
            case_sensitive: true,
            whole_word: false,
        },
        SearchOptions {
            case_sensitive: false,
            whole_word: true,
        },
    ] {
        let mut state = search(&lines, "chat", options, None).unwrap();
        let count = state.match_count();
        assert!(count > 0);

        for start in 0..count {
            state.selected_index = start;
            let before = state.selected_match();
            for _ in 0..count {
                state.next_match();
            }
            assert_eq!(state.selected_match(), before);

            state.previous_match();
            state.next_match();
            assert_eq!(state.selected_match(), before);
        }
    }
}

#[test]
fn test_whole_word_respects_accented_letters() {
    let lines = ["Un café au lait", "caf est court", "cat category"];
    let options = SearchOptions {
        case_sensitive: false,
        whole_word: true,
    };

    let caf = index_lines(&lines, "caf", options);
    assert_eq!(caf.into_iter().collect::<Vec<_>>(), vec![(1, vec![0])]);

    let cat = index_lines(&lines, "cat", options);
    assert_eq!(cat.into_iter().collect::<Vec<_>>(), vec![(2, vec![0])]);
}

#[test]
fn test_highlight_spans_partition_every_matched_line() {
    let lines = ["Longue journée, longue nuit", "Rien", "longlonglong", "Élan"];
    let pattern = "long";
    let state: SearchState = search(&lines, pattern, SearchOptions::default(), None).unwrap();
    let pattern_len = pattern.chars().count();

    for (&line_index, offsets) in &state.matches_by_line {
        let chars: Vec<char> = lines[line_index].chars().collect();
        let parts = split_into_parts(offsets, pattern_len, chars.len());

        let mut expected_start = 0;
        for part in &parts {
            assert_eq!(part.start, expected_start);
            assert!(!part.is_empty());
            expected_start = part.end;
            if part.is_match {
                assert_eq!(part.len(), pattern_len);
                let text: String = chars[part.start..part.end].iter().collect();
                assert_eq!(text.to_lowercase(), pattern);
            }
        }
        assert_eq!(expected_start, chars.len());
        assert_eq!(
            parts.iter().filter(|p| p.is_match).count(),
            offsets.len()
        );
    }

    assert_eq!(state.matches_on_line(2), &[0, 4, 8]);
    assert!(state.matches_on_line(1).is_empty());
}

#[test]
fn test_clearing_then_retyping_starts_at_first_match() {
    let lines = ["chat", "chat", "chat"];
    let mut nav = MatchNavigator::new(SearchOptions::default());
    nav.set_pattern(&lines, "chat");
    nav.next();
    nav.next();

    nav.clear();
    assert_eq!(nav.state().map(SearchState::position_label), None);

    nav.set_pattern(&lines, "chat");
    assert_eq!(nav.selected_match(), Some(at(0, 0)));
    assert_eq!(nav.state().map(SearchState::position_label).as_deref(), Some("1 / 3"));
}
