//! Snippet tab-switcher model.
//!
//! A page holds snippet groups; each group holds language variants and an
//! explicit [`Selection`]. Visibility is derived from the selection, and tab
//! clicks are applied through [`SnippetPage::select`] under a
//! [`SelectionScope`].

pub mod error;
pub mod events;
pub mod markup;
pub mod model;
pub mod page;

pub use error::SnippetError;
pub use events::SelectionChanged;
pub use markup::{tab_strip_spec, ElementSpec};
pub use model::{GroupId, LanguageId, Selection, SnippetGroup, SnippetVariant, Tab, TabStrip};
pub use page::{DiscoveredGroup, SelectionScope, SnippetPage, TabSelected};
