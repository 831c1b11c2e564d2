//! Snippet tabs as a Leptos component, for pages rendered by Leptos itself.

use contracts::snippets::{GroupId, LanguageId, SelectionChanged, SnippetGroup, SnippetVariant};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Space};

#[derive(Debug, Clone, PartialEq)]
pub struct SnippetSample {
    pub variant: SnippetVariant,
    pub code: String,
}

impl SnippetSample {
    pub fn new(variant: SnippetVariant, code: impl Into<String>) -> Self {
        Self {
            variant,
            code: code.into(),
        }
    }
}

#[component]
pub fn SnippetTabs(
    /// Samples in display order; the first one is shown initially
    samples: Vec<SnippetSample>,
    /// Group id reported in selection events
    #[prop(optional)]
    group: Option<GroupId>,
    /// Called whenever the visible sample changes
    #[prop(optional)]
    on_select: Option<Callback<SelectionChanged>>,
) -> impl IntoView {
    let variants = samples.iter().map(|s| s.variant.clone()).collect();
    let state = RwSignal::new(SnippetGroup::new(group.unwrap_or(GroupId(0)), variants));
    let strip = state.with_untracked(SnippetGroup::tab_strip);

    let select = move |language: LanguageId| {
        let mut changed = None;
        state.update(|g| {
            if g.contains_language(&language) && g.show_language(&language) {
                changed = Some(SelectionChanged::for_group(g, &language));
            }
        });
        if let (Some(payload), Some(on_select)) = (changed, on_select) {
            on_select.run(payload);
        }
    };

    view! {
        <div class="snippet-tabs">
            <div class="snippets-header">
                <Space>
                    {strip.tabs.into_iter().map(|tab| {
                        let index = tab.index;
                        let language = tab.language.clone();
                        view! {
                            <Button
                                appearance=move || if state.with(|g| g.is_visible(index)) { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                                on_click=move |_| select(language.clone())
                            >
                                {tab.label}
                            </Button>
                        }
                    }).collect_view()}
                </Space>
            </div>
            <div class="snippets">
                {samples.into_iter().enumerate().map(|(index, sample)| {
                    view! {
                        <div
                            class=sample.variant.language.as_str().to_string()
                            data-languagename=sample.variant.label.clone()
                            style:display=move || if state.with(|g| g.is_visible(index)) { "" } else { "none" }
                        >
                            <pre><code>{sample.code}</code></pre>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
