use crate::domain::Span;

/// Splits `[0, text_len)` into alternating plain and match spans.
///
/// `matches` are ascending start offsets from the indexer. Empty gaps are not
/// emitted. A match starting inside the previous span, or running past
/// `text_len`, is skipped so the partition stays exact.
pub fn split_into_parts(matches: &[usize], pattern_len: usize, text_len: usize) -> Vec<Span> {
    let mut parts = Vec::with_capacity(matches.len() * 2 + 1);
    let mut current = 0;

    for &start in matches {
        let end = start + pattern_len;
        if start < current || end > text_len {
            continue;
        }
        if start > current {
            parts.push(Span {
                start: current,
                end: start,
                is_match: false,
            });
        }
        parts.push(Span {
            start,
            end,
            is_match: true,
        });
        current = end;
    }

    if current < text_len {
        parts.push(Span {
            start: current,
            end: text_len,
            is_match: false,
        });
    }

    parts
}
