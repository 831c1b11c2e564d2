use super::model::{GroupId, LanguageId, SnippetGroup};
use serde::{Deserialize, Serialize};

/// Payload emitted for every group whose selection changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChanged {
    pub group: GroupId,
    pub language: LanguageId,
    /// Label of the now-visible variant; `None` when the group has no
    /// variant for the language (page-wide selection).
    pub label: Option<String>,
}

impl SelectionChanged {
    pub fn for_group(group: &SnippetGroup, language: &LanguageId) -> Self {
        Self {
            group: group.id,
            language: language.clone(),
            label: group.label_for(language).map(String::from),
        }
    }
}
