pub mod page_behavior;
pub mod shared;
pub mod snippets;
