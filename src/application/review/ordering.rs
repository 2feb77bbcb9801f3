use crate::domain::TranslationFile;
use std::collections::BTreeMap;

/// Groups files for the side panel: categories sorted by name, files kept in
/// the order the collaborator delivered them.
pub fn files_by_category(files: &[TranslationFile]) -> BTreeMap<&str, Vec<&TranslationFile>> {
    let mut grouped: BTreeMap<&str, Vec<&TranslationFile>> = BTreeMap::new();
    for file in files {
        grouped.entry(file.category.as_str()).or_default().push(file);
    }
    grouped
}

/// Files in side-panel display order.
pub fn files_in_display_order(files: &[TranslationFile]) -> Vec<&TranslationFile> {
    files_by_category(files).into_values().flatten().collect()
}

/// Finds a file by its translated path.
pub fn find_file<'a>(
    files: &'a [TranslationFile],
    translated_path: &str,
) -> Option<&'a TranslationFile> {
    files.iter().find(|f| f.translated_path == translated_path)
}
