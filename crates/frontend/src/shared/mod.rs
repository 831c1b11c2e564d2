pub mod document_ready;
pub mod dom;
