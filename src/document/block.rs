//! The text block, atomic unit of classification.

use std::collections::BTreeSet;
use std::fmt;

use crate::dom::NodeHandle;
use crate::labels::Label;
use crate::webdocument::WebText;

/// A run of text with the features the classifiers look at.
///
/// Blocks are created from one [`WebText`] each, can absorb their right
/// neighbour through [`TextBlock::merge_next`], and are never split.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    text: String,
    labels: BTreeSet<Label>,
    num_words: usize,
    num_words_in_anchor_text: usize,
    words_in_wrapped_lines: usize,
    wrapped_lines: usize,
    offset_start: i32,
    offset_end: i32,
    tag_level: usize,
    first_node: Option<NodeHandle>,
    last_node: Option<NodeHandle>,
    web_texts: Vec<usize>,
    is_content: bool,
}

/// Sentinel preceding the first block of a document.
pub static EMPTY_START: TextBlock = TextBlock::sentinel(-1);

/// Sentinel following the last block of a document.
pub static EMPTY_END: TextBlock = TextBlock::sentinel(i32::MAX);

impl TextBlock {
    const fn sentinel(offset: i32) -> Self {
        Self {
            text: String::new(),
            labels: BTreeSet::new(),
            num_words: 0,
            num_words_in_anchor_text: 0,
            words_in_wrapped_lines: 0,
            wrapped_lines: 0,
            offset_start: offset,
            offset_end: offset,
            tag_level: 0,
            first_node: None,
            last_node: None,
            web_texts: Vec::new(),
            is_content: false,
        }
    }

    /// A detached block with the given text and word counts, at `offset`.
    ///
    /// Used by callers (and tests) that feed blocks without a DOM.
    #[must_use]
    pub fn new(text: &str, num_words: usize, num_words_in_anchor_text: usize, offset: usize) -> Self {
        Self {
            text: text.to_string(),
            num_words,
            num_words_in_anchor_text: num_words_in_anchor_text.min(num_words),
            words_in_wrapped_lines: num_words,
            wrapped_lines: 1,
            offset_start: offset as i32,
            offset_end: offset as i32,
            ..Self::sentinel(0)
        }
    }

    /// View of the `index`-th element of a web document.
    #[must_use]
    pub fn from_web_text(web_text: &WebText, index: usize) -> Self {
        let offset = web_text.offset_block() as i32;
        Self {
            text: web_text.text().to_string(),
            labels: web_text.labels().clone(),
            num_words: web_text.num_words(),
            num_words_in_anchor_text: web_text.num_anchor_words(),
            words_in_wrapped_lines: web_text.words_in_wrapped_lines,
            wrapped_lines: web_text.wrapped_lines,
            offset_start: offset,
            offset_end: offset,
            tag_level: web_text.tag_level(),
            first_node: Some(web_text.first_non_whitespace_node()),
            last_node: Some(web_text.last_non_whitespace_node()),
            web_texts: vec![index],
            is_content: false,
        }
    }

    /// Block text; merged blocks are joined with `\n`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the block is currently classified as content.
    #[must_use]
    pub const fn is_content(&self) -> bool {
        self.is_content
    }

    /// Sets the content flag, returning whether it changed.
    pub fn set_is_content(&mut self, is_content: bool) -> bool {
        let changed = self.is_content != is_content;
        self.is_content = is_content;
        changed
    }

    /// Words in the block.
    #[must_use]
    pub const fn num_words(&self) -> usize {
        self.num_words
    }

    /// Words inside linking anchors.
    #[must_use]
    pub const fn num_words_in_anchor_text(&self) -> usize {
        self.num_words_in_anchor_text
    }

    /// Share of words inside links, `0.0` for an empty block.
    ///
    /// ```
    /// use rs_distiller::document::TextBlock;
    ///
    /// let block = TextBlock::new("Read more about the flood", 5, 2, 0);
    /// assert_eq!(block.num_words(), 5);
    /// assert_eq!(block.num_words_in_anchor_text(), 2);
    /// assert!((block.link_density() - 0.4).abs() < 1e-9);
    /// assert!(!block.is_content());
    /// ```
    #[must_use]
    pub fn link_density(&self) -> f64 {
        if self.num_words == 0 {
            0.0
        } else {
            self.num_words_in_anchor_text as f64 / self.num_words as f64
        }
    }

    /// Average words per 80-column wrapped line.
    #[must_use]
    pub fn text_density(&self) -> f64 {
        if self.wrapped_lines == 0 {
            0.0
        } else {
            self.words_in_wrapped_lines as f64 / self.wrapped_lines as f64
        }
    }

    /// Offset of the first block this one covers.
    #[must_use]
    pub const fn offset_blocks_start(&self) -> i32 {
        self.offset_start
    }

    /// Offset of the last block this one covers.
    #[must_use]
    pub const fn offset_blocks_end(&self) -> i32 {
        self.offset_end
    }

    /// Nesting level; the minimum of both sides after a merge.
    #[must_use]
    pub const fn tag_level(&self) -> usize {
        self.tag_level
    }

    /// Overrides the nesting level (detached blocks start at 0).
    pub fn set_tag_level(&mut self, tag_level: usize) {
        self.tag_level = tag_level;
    }

    /// First text node holding non-whitespace, `None` for detached blocks.
    #[must_use]
    pub const fn first_non_whitespace_node(&self) -> Option<NodeHandle> {
        self.first_node
    }

    /// Last text node holding non-whitespace, `None` for detached blocks.
    #[must_use]
    pub const fn last_non_whitespace_node(&self) -> Option<NodeHandle> {
        self.last_node
    }

    /// Attaches DOM back-references to a detached block.
    pub fn set_nodes(&mut self, first: NodeHandle, last: NodeHandle) {
        self.first_node = Some(first);
        self.last_node = Some(last);
    }

    /// Indices of the web document elements this block covers.
    #[must_use]
    pub fn web_texts(&self) -> &[usize] {
        &self.web_texts
    }

    /// All labels, sorted.
    #[must_use]
    pub fn labels(&self) -> &BTreeSet<Label> {
        &self.labels
    }

    /// True if the block carries `label`.
    #[must_use]
    pub fn has_label(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }

    /// Adds `label`; adding it twice is a no-op.
    pub fn add_label(&mut self, label: Label) {
        self.labels.insert(label);
    }

    /// Removes `label`, returning whether it was present.
    pub fn remove_label(&mut self, label: Label) -> bool {
        self.labels.remove(&label)
    }

    /// Absorbs the block that directly follows this one.
    ///
    /// Texts are joined with a newline, counts add up, the content flag is
    /// OR'd, labels are unioned and the tag level is the shallower of both.
    pub fn merge_next(&mut self, other: &Self) {
        self.text.push('\n');
        self.text.push_str(&other.text);

        self.num_words += other.num_words;
        self.num_words_in_anchor_text += other.num_words_in_anchor_text;
        self.words_in_wrapped_lines += other.words_in_wrapped_lines;
        self.wrapped_lines += other.wrapped_lines;

        self.offset_end = other.offset_end;
        self.is_content |= other.is_content;
        self.labels.extend(other.labels.iter().copied());
        self.web_texts.extend_from_slice(&other.web_texts);

        if self.first_node.is_none() {
            self.first_node = other.first_node;
        }
        if other.last_node.is_some() {
            self.last_node = other.last_node;
        }

        self.tag_level = self.tag_level.min(other.tag_level);
    }

    fn link_density_debug(&self) -> String {
        let ld = self.link_density();
        if (ld.round() - ld).abs() < 0.0001 {
            format!("{}.0", ld.round())
        } else {
            format!("{}", (ld * 1_000_000.0).round() / 1_000_000.0)
        }
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut labels: Vec<&str> = self.labels.iter().map(|l| l.as_str()).collect();
        labels.sort_unstable();
        write!(
            f,
            "[{}-{};tl={}; nw={};ld={}]\t{},[{}]\n{}",
            self.offset_start,
            self.offset_end,
            self.tag_level,
            self.num_words,
            self.link_density_debug(),
            if self.is_content { "CONTENT" } else { "boilerplate" },
            labels.join(", "),
            self.text
        )
    }
}
