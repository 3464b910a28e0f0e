//! Accumulates inline text runs into a single [`WebText`].
//!
//! The builder is boundary-agnostic: it appends whatever it is fed and only
//! produces a run when the caller flushes. Whitespace is collapsed as it
//! arrives, so consecutive whitespace across several runs ends up as a
//! single space. Words are counted once, at flush time, over the collapsed
//! buffer; anchor boundaries are remembered as buffer offsets so each word
//! can be attributed to link text or not.

use std::collections::BTreeSet;

use tendril::StrTendril;

use crate::dom::NodeHandle;
use crate::words::{is_all_whitespace, is_whitespace, is_word, LineWrapper};

use super::elements::WebText;

/// Builder state between two flushes.
#[derive(Debug, Default)]
pub struct WebTextBuilder {
    buffer: StrTendril,
    last_was_whitespace: bool,
    in_anchor: bool,
    anchored_at_start: bool,
    anchor_marks: Vec<(usize, bool)>,
    block_tag_level: Option<usize>,
    nodes: Vec<NodeHandle>,
    first_non_whitespace: Option<NodeHandle>,
    last_non_whitespace: Option<NodeHandle>,
}

impl WebTextBuilder {
    /// A builder with an empty buffer, outside any anchor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text node found at nesting `tag_level`.
    pub fn text_node(&mut self, text: &str, node: NodeHandle, tag_level: usize) {
        if text.is_empty() {
            return;
        }

        self.append_collapsed(text);
        self.nodes.push(node);

        if is_all_whitespace(text) {
            return;
        }

        self.last_non_whitespace = Some(node);
        self.first_non_whitespace.get_or_insert(node);
        self.block_tag_level.get_or_insert(tag_level);
    }

    /// Appends a forced line break (`<br>`).
    pub fn line_break(&mut self, node: NodeHandle) {
        if self.last_was_whitespace && self.buffer.ends_with(' ') {
            self.buffer.pop_back(1);
        }
        self.buffer.push_char('\n');
        self.last_was_whitespace = true;
        self.nodes.push(node);
    }

    /// Starts counting words as link text.
    pub fn enter_anchor(&mut self) {
        self.in_anchor = true;
        self.push_boundary();
    }

    /// Stops counting words as link text.
    pub fn exit_anchor(&mut self) {
        self.in_anchor = false;
        self.push_boundary();
    }

    /// True while inside a linking anchor. Survives flushes.
    #[must_use]
    pub const fn in_anchor(&self) -> bool {
        self.in_anchor
    }

    /// Produces the accumulated run, or `None` if no non-whitespace text
    /// arrived since the last reset. State is reset either way.
    pub fn flush(&mut self, offset_block: usize) -> Option<WebText> {
        let (Some(first_node), Some(last_node)) =
            (self.first_non_whitespace, self.last_non_whitespace)
        else {
            self.reset();
            return None;
        };

        let mut num_words = 0;
        let mut num_anchor_words = 0;
        let mut wrapper = LineWrapper::default();
        for (start, token) in token_spans(&self.buffer) {
            if !is_word(token) {
                continue;
            }
            num_words += 1;
            if self.anchored_at(start) {
                num_anchor_words += 1;
            }
            wrapper.push_word(token.chars().count());
        }
        let (words_in_wrapped_lines, wrapped_lines) = wrapper.finish();

        let web_text = WebText {
            text: std::mem::take(&mut self.buffer),
            nodes: std::mem::take(&mut self.nodes),
            first_node,
            last_node,
            num_words,
            num_anchor_words,
            words_in_wrapped_lines,
            wrapped_lines,
            tag_level: self.block_tag_level.unwrap_or(0),
            offset_block,
            group_number: 0,
            labels: BTreeSet::new(),
            is_content: false,
        };
        self.reset();
        Some(web_text)
    }

    /// Forgets everything except the anchor state.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.last_was_whitespace = false;
        self.anchored_at_start = self.in_anchor;
        self.anchor_marks.clear();
        self.block_tag_level = None;
        self.nodes.clear();
        self.first_non_whitespace = None;
        self.last_non_whitespace = None;
    }

    fn append_collapsed(&mut self, text: &str) {
        for c in text.chars() {
            if is_whitespace(c) {
                if !self.last_was_whitespace {
                    self.buffer.push_char(' ');
                    self.last_was_whitespace = true;
                }
            } else {
                self.buffer.push_char(c);
                self.last_was_whitespace = false;
            }
        }
    }

    fn push_boundary(&mut self) {
        if !self.last_was_whitespace {
            self.buffer.push_char(' ');
            self.last_was_whitespace = true;
        }
        self.anchor_marks.push((self.buffer.len(), self.in_anchor));
    }

    fn anchored_at(&self, offset: usize) -> bool {
        let mut anchored = self.anchored_at_start;
        for &(mark, state) in &self.anchor_marks {
            if mark > offset {
                break;
            }
            anchored = state;
        }
        anchored
    }
}

/// Whitespace separated tokens with their byte offsets.
fn token_spans(text: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        if is_whitespace(c) {
            if let Some(s) = start.take() {
                spans.push((s, &text[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        spans.push((s, &text[s..]));
    }
    spans
}
