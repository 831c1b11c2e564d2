use super::error::SnippetError;
use super::events::SelectionChanged;
use super::model::{GroupId, LanguageId, SnippetGroup, SnippetVariant, TabStrip};
use serde::{Deserialize, Serialize};

/// How far a tab click reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionScope {
    /// Every group on the page switches to the clicked language.
    /// Groups without that language end up showing nothing.
    #[default]
    Page,
    /// Only the group owning the clicked tab switches.
    Group,
}

/// A group as found in page markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscoveredGroup {
    /// Group id left on the element by an earlier initialization.
    pub marker: Option<GroupId>,
    pub variants: Vec<SnippetVariant>,
}

impl DiscoveredGroup {
    pub fn new(variants: Vec<SnippetVariant>) -> Self {
        Self {
            marker: None,
            variants,
        }
    }
}

/// Payload of a tab click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSelected {
    pub group: GroupId,
    pub language: LanguageId,
}

/// Every snippet group on one page, with its selection state.
#[derive(Debug, Clone, Default)]
pub struct SnippetPage {
    groups: Vec<SnippetGroup>,
}

impl SnippetPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[SnippetGroup] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&SnippetGroup> {
        self.groups.get(id.0)
    }

    /// Adds a group in its initial state and returns its id.
    pub fn register(&mut self, variants: Vec<SnippetVariant>) -> GroupId {
        let id = GroupId(self.groups.len());
        self.groups.push(SnippetGroup::new(id, variants));
        id
    }

    /// Registers every discovered group that carries no marker yet.
    ///
    /// The result is aligned with the input: `Some(strip)` for each newly
    /// registered group, `None` for groups that were initialized before.
    pub fn initialize(
        &mut self,
        discovered: impl IntoIterator<Item = DiscoveredGroup>,
    ) -> Vec<Option<TabStrip>> {
        discovered
            .into_iter()
            .map(|group| match group.marker {
                Some(_) => None,
                None => {
                    let id = self.register(group.variants);
                    self.group(id).map(SnippetGroup::tab_strip)
                }
            })
            .collect()
    }

    /// Applies a tab click and reports the groups whose visible variants
    /// changed. State is untouched on error.
    pub fn select(
        &mut self,
        selected: &TabSelected,
        scope: SelectionScope,
    ) -> Result<Vec<SelectionChanged>, SnippetError> {
        let clicked = self
            .group(selected.group)
            .ok_or(SnippetError::UnknownGroup(selected.group))?;
        let language = &selected.language;

        let targets: Vec<GroupId> = match scope {
            SelectionScope::Page => {
                if !self.groups.iter().any(|g| g.contains_language(language)) {
                    return Err(SnippetError::NoMatchingVariant {
                        language: language.clone(),
                        scope: "page".to_string(),
                    });
                }
                self.groups.iter().map(|g| g.id).collect()
            }
            SelectionScope::Group => {
                if !clicked.contains_language(language) {
                    return Err(SnippetError::NoMatchingVariant {
                        language: language.clone(),
                        scope: format!("group {}", clicked.id),
                    });
                }
                vec![clicked.id]
            }
        };

        let mut changed = Vec::new();
        for id in targets {
            let Some(group) = self.groups.get_mut(id.0) else {
                continue;
            };
            if group.show_language(language) {
                changed.push(SelectionChanged::for_group(group, language));
            }
        }
        Ok(changed)
    }
}
