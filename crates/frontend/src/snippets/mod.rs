pub mod component;
pub mod controller;
pub mod render;
pub mod scanner;

pub use component::{SnippetSample, SnippetTabs};
pub use controller::initialize;
