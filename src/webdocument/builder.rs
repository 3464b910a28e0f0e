//! Event sink turning the converter's element/text stream into a [`WebDocument`].
//!
//! The builder tracks the nesting level and a stack of [`ElementAction`]s.
//! Crossing a flushing element marks the current text run as finished; the
//! run is actually emitted lazily, on the next text, line break or element
//! end, so empty wrappers never produce blocks.

use crate::dom::NodeHandle;

use super::element_action::ElementAction;
use super::elements::{WebElement, WebTable, WebTag};
use super::text_builder::WebTextBuilder;
use super::WebDocument;

/// Builds a [`WebDocument`] from document events.
#[derive(Debug, Default)]
pub struct WebDocumentBuilder {
    tag_level: usize,
    next_web_text_index: usize,
    group_number: usize,
    flush: bool,
    action_stack: Vec<ElementAction>,
    text_builder: WebTextBuilder,
    document: WebDocument,
}

impl WebDocumentBuilder {
    /// An empty builder; call `start_document` before feeding events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh document, dropping anything built so far.
    pub fn start_document(&mut self) {
        *self = Self::default();
    }

    /// Flushes the pending run.
    pub fn end_document(&mut self) {
        self.flush_block(self.group_number);
    }

    /// Enters an element classified as `action`.
    pub fn start_element(&mut self, action: ElementAction) {
        if action.changes_tag_level {
            self.tag_level += 1;
        }
        if action.is_anchor {
            self.text_builder.enter_anchor();
        }
        self.flush |= action.flush;
        self.action_stack.push(action);
    }

    /// Leaves the innermost open element.
    pub fn end_element(&mut self) {
        let Some(action) = self.action_stack.last() else {
            return;
        };
        let (changes_tag_level, flushes, is_anchor) =
            (action.changes_tag_level, action.flush, action.is_anchor);

        if changes_tag_level {
            self.tag_level = self.tag_level.saturating_sub(1);
        }

        if self.flush || flushes {
            self.flush_block(self.group_number);
            self.group_number += 1;
        }

        if is_anchor {
            self.text_builder.exit_anchor();
        }

        // Popped after the flush: the flushed run takes its labels from the stack.
        self.action_stack.pop();
    }

    /// Appends a text node.
    pub fn text_node(&mut self, text: &str, node: NodeHandle) {
        self.flush_if_pending();
        self.text_builder.text_node(text, node, self.tag_level);
    }

    /// Appends a `<br>`.
    pub fn line_break(&mut self, node: NodeHandle) {
        self.flush_if_pending();
        self.text_builder.line_break(node);
    }

    /// An element was skipped entirely; it still separates blocks.
    pub fn skip_element(&mut self) {
        self.flush = true;
    }

    /// Records a preserved start or end tag.
    pub fn tag(&mut self, tag: WebTag) {
        self.flush_block(self.group_number);
        self.document.push(WebElement::Tag(tag));
    }

    /// Records a data table.
    pub fn data_table(&mut self, table: WebTable) {
        self.flush_block(self.group_number);
        self.document.push(WebElement::Table(table));
    }

    /// Records an image, figure, video or third-party embed.
    pub fn embed(&mut self, element: WebElement) {
        self.flush_block(self.group_number);
        self.document.push(element);
    }

    /// Current nesting level.
    #[must_use]
    pub const fn tag_level(&self) -> usize {
        self.tag_level
    }

    /// Finishes the document.
    #[must_use]
    pub fn into_document(mut self) -> WebDocument {
        self.end_document();
        self.document
    }

    fn flush_if_pending(&mut self) {
        if self.flush {
            self.flush_block(self.group_number);
            self.group_number += 1;
            self.flush = false;
        }
    }

    fn flush_block(&mut self, group: usize) {
        let Some(mut text) = self.text_builder.flush(self.next_web_text_index) else {
            return;
        };
        text.group_number = group;
        self.next_web_text_index += 1;
        for action in &self.action_stack {
            text.labels.extend(action.labels.iter().copied());
        }
        self.document.push(WebElement::Text(text));
    }
}
