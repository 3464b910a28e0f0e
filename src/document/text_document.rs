//! Ordered sequence of text blocks, the unit every filter operates on.

use crate::dom::{DomTree, DETACHED};
use crate::labels::Label;
use crate::webdocument::{WebDocument, WebElement};

use super::block::TextBlock;

/// Blocks in document order plus the inputs filters need besides them.
pub struct TextDocument<'d> {
    blocks: Vec<TextBlock>,
    candidate_titles: Option<Vec<String>>,
    dom: &'d dyn DomTree,
}

impl std::fmt::Debug for TextDocument<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextDocument")
            .field("blocks", &self.blocks)
            .field("candidate_titles", &self.candidate_titles)
            .finish_non_exhaustive()
    }
}

impl TextDocument<'static> {
    /// A document whose blocks carry no DOM back-references.
    #[must_use]
    pub fn detached(blocks: Vec<TextBlock>) -> Self {
        Self::new(blocks, &DETACHED)
    }
}

impl<'d> TextDocument<'d> {
    /// Wraps `blocks`, answering structural questions through `dom`.
    #[must_use]
    pub fn new(blocks: Vec<TextBlock>, dom: &'d dyn DomTree) -> Self {
        Self {
            blocks,
            candidate_titles: None,
            dom,
        }
    }

    /// Blocks in document order.
    #[must_use]
    pub fn blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    /// Mutable access to the block sequence. Filters merge blocks by
    /// removing entries; they never reorder.
    pub fn blocks_mut(&mut self) -> &mut Vec<TextBlock> {
        &mut self.blocks
    }

    /// Tree the block node handles point into.
    #[must_use]
    pub fn dom(&self) -> &'d dyn DomTree {
        self.dom
    }

    /// Titles supplied by the title-extraction step, if any.
    #[must_use]
    pub fn candidate_titles(&self) -> Option<&[String]> {
        self.candidate_titles.as_deref()
    }

    /// Titles the title-match classifier compares blocks against.
    pub fn set_candidate_titles(&mut self, titles: Vec<String>) {
        self.candidate_titles = Some(titles);
    }

    /// Newline-terminated text of the content blocks.
    #[must_use]
    pub fn content(&self) -> String {
        self.text(true, false)
    }

    /// Newline-terminated text of the selected blocks.
    #[must_use]
    pub fn text(&self, include_content: bool, include_non_content: bool) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            let wanted = if block.is_content() {
                include_content
            } else {
                include_non_content
            };
            if wanted {
                out.push_str(block.text());
                out.push('\n');
            }
        }
        out
    }

    /// Words in content blocks.
    #[must_use]
    pub fn count_words_in_content(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.is_content())
            .map(TextBlock::num_words)
            .sum()
    }

    /// One [`TextBlock`] rendering per line group, for tracing.
    #[must_use]
    pub fn debug_string(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            out.push_str(&block.to_string());
            out.push('\n');
        }
        out
    }

    /// Pushes block decisions back onto the web texts they were built from.
    pub fn apply_to_model(&self, web: &mut WebDocument) {
        for block in &self.blocks {
            for &index in block.web_texts() {
                if let Some(WebElement::Text(text)) = web.elements_mut().get_mut(index) {
                    text.is_content = block.is_content();
                    if block.has_label(Label::Title) {
                        text.add_label(Label::Title);
                    }
                }
            }
        }
    }
}
