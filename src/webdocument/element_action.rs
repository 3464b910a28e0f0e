//! Per-element block-building behaviour.
//!
//! Every element entered by the converter is classified once into an
//! [`ElementAction`]: whether it starts a new block (flush), whether it adds a
//! nesting level, whether it is a link, and which labels text inside it gets.

use crate::labels::Label;
use crate::patterns::COMMENT_CLASS;

/// Elements with more classes than this are not labelled by a comment-ish class.
const MAX_CLASS_COUNT: usize = 2;

/// What the converter knows about an element when it enters it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementInfo<'a> {
    /// Lowercase tag name.
    pub tag: &'a str,
    /// Resolved CSS `display` value.
    pub display: &'a str,
    /// The element has a `float` other than `none`.
    pub floated: bool,
    /// Raw `class` attribute.
    pub class: &'a str,
    /// Raw `id` attribute.
    pub id: &'a str,
    /// The element has an `href` attribute.
    pub has_href: bool,
}

/// Block-building flags of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementAction {
    pub changes_tag_level: bool,
    pub flush: bool,
    pub is_anchor: bool,
    pub labels: Vec<Label>,
}

impl ElementAction {
    /// Classifies an element from its tag, display and attributes.
    #[must_use]
    pub fn for_element(info: &ElementInfo<'_>) -> Self {
        let mut action = Self::default();

        match info.display {
            "inline" => {}
            "inline-block" | "inline-flex" => action.changes_tag_level = true,
            // Drop-cap letters are floated spans; keep them inline.
            "block" if info.floated && info.tag == "span" => {}
            // block, list-item, table parts, flex, grid...
            _ => {
                action.flush = true;
                action.changes_tag_level = true;
            }
        }

        if matches!(info.tag, "html" | "body" | "article") {
            return action;
        }

        let class_count = info.class.split_whitespace().count();
        if (COMMENT_CLASS.is_match(info.class) || COMMENT_CLASS.is_match(info.id))
            && class_count <= MAX_CLASS_COUNT
        {
            action.labels.push(Label::StrictlyNotContent);
        }

        match info.tag {
            "aside" | "nav" => action.labels.push(Label::StrictlyNotContent),
            "li" => action.labels.push(Label::Li),
            "h1" => action.labels.extend([Label::H1, Label::Heading]),
            "h2" => action.labels.extend([Label::H2, Label::Heading]),
            "h3" => action.labels.extend([Label::H3, Label::Heading]),
            "h4" | "h5" | "h6" => action.labels.push(Label::Heading),
            "a" => {
                action.changes_tag_level = true;
                action.is_anchor = info.has_href;
            }
            _ => {}
        }

        action
    }
}
