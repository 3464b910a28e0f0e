//! Block-level document model.
//!
//! A [`TextDocument`] is a view over the text runs of a
//! [`WebDocument`](crate::webdocument::WebDocument): one [`TextBlock`] per run,
//! in document order. Filters mutate content flags and labels in place and
//! may merge neighbouring blocks; [`TextDocument::apply_to_model`] writes the
//! decisions back onto the web document.

mod block;
mod text_document;

pub use block::{TextBlock, EMPTY_END, EMPTY_START};
pub use text_document::TextDocument;
