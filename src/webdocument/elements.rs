//! Element variants of a web document.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tendril::StrTendril;

use crate::dom::NodeHandle;
use crate::labels::Label;

/// Tags preserved as start/end markers so list and quote structure survives.
pub const NESTING_TAGS: [&str; 5] = ["ul", "ol", "li", "blockquote", "pre"];

/// True if `tag` is kept as a [`WebTag`] pair.
#[inline]
#[must_use]
pub fn can_be_nested(tag: &str) -> bool {
    NESTING_TAGS.contains(&tag)
}

/// A run of text flushed by the block builder.
///
/// The text lives in the same [`StrTendril`] buffer the builder filled, so a
/// flush hands it over without copying.
#[derive(Debug, Clone, Default)]
pub struct WebText {
    pub(crate) text: StrTendril,
    pub(crate) nodes: Vec<NodeHandle>,
    pub(crate) first_node: NodeHandle,
    pub(crate) last_node: NodeHandle,
    pub(crate) num_words: usize,
    pub(crate) num_anchor_words: usize,
    pub(crate) words_in_wrapped_lines: usize,
    pub(crate) wrapped_lines: usize,
    pub(crate) tag_level: usize,
    pub(crate) offset_block: usize,
    pub(crate) group_number: usize,
    pub(crate) labels: BTreeSet<Label>,
    pub(crate) is_content: bool,
}

impl WebText {
    /// Whitespace-collapsed text, leading and trailing space preserved.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Every text and line-break node that contributed to this run.
    #[must_use]
    pub fn nodes(&self) -> &[NodeHandle] {
        &self.nodes
    }

    /// First text node holding non-whitespace.
    #[must_use]
    pub const fn first_non_whitespace_node(&self) -> NodeHandle {
        self.first_node
    }

    /// Last text node holding non-whitespace.
    #[must_use]
    pub const fn last_non_whitespace_node(&self) -> NodeHandle {
        self.last_node
    }

    /// Words in the run.
    #[must_use]
    pub const fn num_words(&self) -> usize {
        self.num_words
    }

    /// Words inside linking anchors.
    #[must_use]
    pub const fn num_anchor_words(&self) -> usize {
        self.num_anchor_words
    }

    /// Nesting level of the first non-whitespace text.
    #[must_use]
    pub const fn tag_level(&self) -> usize {
        self.tag_level
    }

    /// Position of this run among all flushed runs.
    #[must_use]
    pub const fn offset_block(&self) -> usize {
        self.offset_block
    }

    /// Runs split by an embedded element share a group number.
    #[must_use]
    pub const fn group_number(&self) -> usize {
        self.group_number
    }

    /// Labels inherited from the enclosing elements.
    #[must_use]
    pub fn labels(&self) -> &BTreeSet<Label> {
        &self.labels
    }

    /// True if the run carries `label`.
    #[must_use]
    pub fn has_label(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }

    /// Adds `label` to the run.
    pub fn add_label(&mut self, label: Label) {
        self.labels.insert(label);
    }
}

/// Start or end of a preserved tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagType {
    Start,
    End,
}

/// Marker for one side of a nesting tag (`ul`, `ol`, `li`, `blockquote`, `pre`).
#[derive(Debug, Clone)]
pub struct WebTag {
    pub tag_name: String,
    pub tag_type: TagType,
    pub is_content: bool,
}

impl WebTag {
    /// A start or end marker for `tag_name`.
    #[must_use]
    pub fn new(tag_name: &str, tag_type: TagType) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            tag_type,
            is_content: false,
        }
    }

    /// True for the opening half of the pair.
    #[must_use]
    pub fn is_start_tag(&self) -> bool {
        self.tag_type == TagType::Start
    }
}

/// An image with its declared dimensions.
///
/// Lazily loaded images report `0x0` since their real size is unknown.
#[derive(Debug, Clone)]
pub struct WebImage {
    pub node: NodeHandle,
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub alt: Option<String>,
    pub is_content: bool,
}

impl WebImage {
    /// An image with declared dimensions; `0` means unknown.
    #[must_use]
    pub fn new(node: NodeHandle, src: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            node,
            src: src.into(),
            width,
            height,
            alt: None,
            is_content: false,
        }
    }

    /// Declared area in pixels.
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// An image wrapped in `<figure>` with an optional caption.
#[derive(Debug, Clone)]
pub struct WebFigure {
    pub image: WebImage,
    pub caption: Option<String>,
}

/// A table classified as data (not layout).
#[derive(Debug, Clone)]
pub struct WebTable {
    pub node: NodeHandle,
    pub is_content: bool,
}

/// A `<video>` element.
#[derive(Debug, Clone)]
pub struct WebVideo {
    pub node: NodeHandle,
    pub width: u32,
    pub height: u32,
    pub is_content: bool,
}

/// Kind of third-party embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedKind {
    YouTube,
    Vimeo,
    Twitter,
}

impl fmt::Display for EmbedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::YouTube => "youtube",
            Self::Vimeo => "vimeo",
            Self::Twitter => "twitter",
        })
    }
}

/// A third-party embed identified by provider and id.
#[derive(Debug, Clone)]
pub struct WebEmbed {
    pub node: NodeHandle,
    pub kind: EmbedKind,
    pub id: String,
    pub params: BTreeMap<String, String>,
    pub is_content: bool,
}

/// One element of a [`WebDocument`](super::WebDocument).
#[derive(Debug, Clone)]
pub enum WebElement {
    Text(WebText),
    Tag(WebTag),
    Image(WebImage),
    Figure(WebFigure),
    Table(WebTable),
    Video(WebVideo),
    Embed(WebEmbed),
    /// Forced line break (`<hr>`); renders as a newline.
    Break { is_content: bool },
}

impl WebElement {
    /// Content flag of any element variant.
    #[must_use]
    pub fn is_content(&self) -> bool {
        match self {
            Self::Text(t) => t.is_content,
            Self::Tag(t) => t.is_content,
            Self::Image(i) => i.is_content,
            Self::Figure(f) => f.image.is_content,
            Self::Table(t) => t.is_content,
            Self::Video(v) => v.is_content,
            Self::Embed(e) => e.is_content,
            Self::Break { is_content } => *is_content,
        }
    }

    /// Sets the content flag of any element variant.
    pub fn set_is_content(&mut self, value: bool) {
        match self {
            Self::Text(t) => t.is_content = value,
            Self::Tag(t) => t.is_content = value,
            Self::Image(i) => i.is_content = value,
            Self::Figure(f) => f.image.is_content = value,
            Self::Table(t) => t.is_content = value,
            Self::Video(v) => v.is_content = value,
            Self::Embed(e) => e.is_content = value,
            Self::Break { is_content } => *is_content = value,
        }
    }

    /// The image of an `Image` or `Figure` element.
    #[must_use]
    pub fn as_image(&self) -> Option<&WebImage> {
        match self {
            Self::Image(i) => Some(i),
            Self::Figure(f) => Some(&f.image),
            _ => None,
        }
    }

    /// The text run, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&WebText> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}
