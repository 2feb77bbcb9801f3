use super::line::LineDocument;
use serde::{Deserialize, Serialize};

/// Path of a translated file inside the translation repository.
pub type TranslatedPath = String;

/// A translation file as handed over by the file-fetch collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationFile {
    /// Display name.
    pub name: String,
    /// Grouping shown in the file side panel (e.g. "Dialogues", "Menus").
    pub category: String,
    /// Unique path of the translated file, used as the file's identity.
    pub translated_path: TranslatedPath,
    pub lines: LineDocument,
}
