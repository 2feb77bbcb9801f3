//! Snapshot loading from local files.
//!
//! Stands in for the fetch step: one source-language file plus one translated
//! file per snapshot, zipped line by line.

use crate::application::review::ThreeWaySnapshotSet;
use crate::domain::{LineDocument, SnapshotError};
use std::path::Path;

fn read_text(path: &Path) -> Result<String, SnapshotError> {
    std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_document(original: &Path, translated: &Path) -> Result<LineDocument, SnapshotError> {
    let original_text = read_text(original)?;
    let translated_text = read_text(translated)?;
    Ok(LineDocument::from_texts(&original_text, &translated_text))
}

/// Builds the three snapshots of a file sharing one source-language text.
pub fn load_snapshot_set(
    original: &Path,
    origin: &Path,
    base: &Path,
    head: &Path,
) -> Result<ThreeWaySnapshotSet, SnapshotError> {
    let original_text = read_text(original)?;
    let snapshot = |translated: &Path| -> Result<LineDocument, SnapshotError> {
        Ok(LineDocument::from_texts(&original_text, &read_text(translated)?))
    };

    let set = ThreeWaySnapshotSet::new(snapshot(origin)?, snapshot(base)?, snapshot(head)?);
    log::debug!(
        "Loaded snapshots from {}: origin={} base={} head={} lines",
        original.display(),
        set.origin.len(),
        set.base.len(),
        set.head.len()
    );
    Ok(set)
}
