use super::technical::{is_prose, prose_lines};
use crate::domain::{LineDocument, LineNumber, LineRecord};
use crate::infra::hash::hash64;

/// The three snapshots of one logical file that a review compares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreeWaySnapshotSet {
    /// Trunk state when the branch was created.
    pub origin: LineDocument,
    /// Trunk state now.
    pub base: LineDocument,
    /// The branch's current state.
    pub head: LineDocument,
}

/// The records sharing one line number across the three snapshots.
#[derive(Debug, Clone, Copy)]
pub struct LineTriple<'a> {
    pub line_number: LineNumber,
    pub origin: Option<&'a LineRecord>,
    pub base: Option<&'a LineRecord>,
    pub head: &'a LineRecord,
}

impl ThreeWaySnapshotSet {
    pub fn new(origin: LineDocument, base: LineDocument, head: LineDocument) -> Self {
        Self { origin, base, head }
    }

    /// Applies the technical-line filter to all three snapshots independently.
    pub fn without_technical_lines(&self) -> Self {
        Self {
            origin: prose_lines(&self.origin),
            base: prose_lines(&self.base),
            head: prose_lines(&self.head),
        }
    }

    /// Every head line joined with its counterparts by line number.
    pub fn triples(&self) -> impl Iterator<Item = LineTriple<'_>> {
        self.head.iter().map(|head| self.triple_for(head))
    }

    /// Head prose lines joined with their counterparts by line number.
    ///
    /// Counterparts are resolved in the unfiltered origin and base snapshots.
    pub fn prose_triples(&self) -> impl Iterator<Item = LineTriple<'_>> {
        self.head
            .iter()
            .filter(|head| is_prose(head))
            .map(|head| self.triple_for(head))
    }

    pub fn triple(&self, line_number: LineNumber) -> Option<LineTriple<'_>> {
        self.head.find(line_number).map(|head| self.triple_for(head))
    }

    fn triple_for<'a>(&'a self, head: &'a LineRecord) -> LineTriple<'a> {
        LineTriple {
            line_number: head.line_number,
            origin: self.origin.find(head.line_number),
            base: self.base.find(head.line_number),
            head,
        }
    }

    /// Content fingerprint of all three snapshots, for caller-side memoization.
    pub fn fingerprint(&self) -> u64 {
        let docs = [&self.origin, &self.base, &self.head];
        hash64(docs.iter().flat_map(|doc| {
            std::iter::once(DOC_SEPARATOR).chain(
                doc.iter()
                    .flat_map(|r| [r.original.as_str(), r.translated.as_str()]),
            )
        }))
    }
}

// Marks where one snapshot ends so records cannot shift between snapshots unnoticed.
const DOC_SEPARATOR: &str = "\u{1e}";
