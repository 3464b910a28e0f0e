//! Coarse document layer produced by the block builder.
//!
//! A [`WebDocument`] is the ordered list of everything the converter kept:
//! text runs, preserved list/quote tags, images, tables and embeds. The text
//! runs are classified through a [`TextDocument`] view; the remaining
//! elements are decided afterwards by the passes in [`filters`].

mod builder;
mod element_action;
mod elements;
pub mod filters;
mod text_builder;

pub use builder::WebDocumentBuilder;
pub use element_action::{ElementAction, ElementInfo};
pub use elements::{
    can_be_nested, EmbedKind, TagType, WebElement, WebEmbed, WebFigure, WebImage, WebTable,
    WebTag, WebText, WebVideo, NESTING_TAGS,
};
pub use text_builder::WebTextBuilder;

use crate::document::{TextBlock, TextDocument};
use crate::dom::DomTree;

/// Ordered elements of a page.
#[derive(Debug, Clone, Default)]
pub struct WebDocument {
    elements: Vec<WebElement>,
}

impl WebDocument {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `element`.
    pub fn push(&mut self, element: WebElement) {
        self.elements.push(element);
    }

    /// Elements in document order.
    #[must_use]
    pub fn elements(&self) -> &[WebElement] {
        &self.elements
    }

    /// Elements in document order, mutably.
    pub fn elements_mut(&mut self) -> &mut [WebElement] {
        &mut self.elements
    }

    /// One block per text run, each pointing back at its element index.
    #[must_use]
    pub fn create_text_document_view<'d>(&self, dom: &'d dyn DomTree) -> TextDocument<'d> {
        let blocks = self
            .elements
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_text().map(|t| TextBlock::from_web_text(t, i)))
            .collect();
        TextDocument::new(blocks, dom)
    }

    /// Images and figures marked as content, in document order.
    #[must_use]
    pub fn content_images(&self) -> Vec<&WebImage> {
        self.elements
            .iter()
            .filter(|e| e.is_content())
            .filter_map(WebElement::as_image)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{NodeHandle, DETACHED};

    fn sample() -> WebDocument {
        let mut b = WebDocumentBuilder::new();
        b.start_element(ElementAction {
            flush: true,
            changes_tag_level: true,
            ..ElementAction::default()
        });
        b.text_node("A paragraph of text", NodeHandle::from_index(1));
        b.end_element();
        b.embed(WebElement::Image(WebImage::new(
            NodeHandle::from_index(2),
            "a.png",
            100,
            50,
        )));
        b.start_element(ElementAction {
            flush: true,
            ..ElementAction::default()
        });
        b.text_node("Another one", NodeHandle::from_index(3));
        b.end_element();
        b.into_document()
    }

    #[test]
    fn test_text_document_view_indices() {
        let web = sample();
        let doc = web.create_text_document_view(&DETACHED);
        assert_eq!(doc.blocks().len(), 2);
        assert_eq!(doc.blocks()[0].web_texts(), &[0]);
        assert_eq!(doc.blocks()[1].web_texts(), &[2]);
    }

    #[test]
    fn test_apply_to_model_roundtrip() {
        let mut web = sample();
        let mut doc = web.create_text_document_view(&DETACHED);
        doc.blocks_mut()[1].set_is_content(true);
        doc.apply_to_model(&mut web);
        assert!(!web.elements()[0].is_content());
        assert!(web.elements()[2].is_content());
    }

    #[test]
    fn test_content_images() {
        let mut web = sample();
        assert!(web.content_images().is_empty());
        web.elements_mut()[1].set_is_content(true);
        assert_eq!(web.content_images().len(), 1);
    }
}
