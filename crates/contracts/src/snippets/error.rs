use super::model::{GroupId, LanguageId};
use thiserror::Error;

/// Recoverable snippet-tab failures. Callers log these and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnippetError {
    #[error("snippet group {0} is not registered")]
    UnknownGroup(GroupId),

    #[error("no snippet variant with language `{language}` in {scope}")]
    NoMatchingVariant {
        language: LanguageId,
        scope: String,
    },
}
