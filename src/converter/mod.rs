//! HTML front end: walks a parsed page and feeds the block builder.
//!
//! [`DomConverter`] visits a `dom_query` document in document order. Every
//! visited node is mirrored into a [`NodeTable`], so text runs and images
//! refer to plain [`NodeHandle`]s and the filters never see `dom_query`
//! types. Hidden subtrees, scripts and sharing widgets are dropped here;
//! images, figures, data tables and third-party embeds become their own
//! [`WebElement`]s; everything else is turned into element and text events
//! on a [`WebDocumentBuilder`].

mod display;
mod embeds;
mod table_classifier;

pub use display::{default_display, is_hidden, InlineStyle};
pub use table_classifier::{classify as classify_table, TableType};

use dom_query::{Document, NodeRef};
use url::Url;

use crate::dom::{self, NodeHandle, NodeTable};
use crate::error::{Error, Result};
use crate::webdocument::{
    can_be_nested, ElementAction, ElementInfo, TagType, WebDocument, WebDocumentBuilder,
    WebElement, WebTable, WebTag, WebVideo,
};

use embeds::EmbedContext;

/// Tags whose subtree carries nothing worth extracting.
const IGNORED_TAGS: [&str; 8] = [
    "head", "style", "script", "link", "noscript", "iframe", "svg", "template",
];

/// Tags that are dropped but still separate the text around them.
const SKIPPED_TAGS: [&str; 4] = ["option", "object", "embed", "applet"];

/// Class names of social sharing widgets.
const SHARING_CLASSES: [&str; 2] = ["sharing", "socialArea"];

/// Everything the converter produced for one page.
#[derive(Debug)]
pub struct Conversion {
    pub document: WebDocument,
    /// Mirror of the visited nodes; text runs and images point into it.
    pub dom: NodeTable,
    /// Text of the `<title>` element, whitespace collapsed.
    pub title: Option<String>,
    pub warnings: Vec<String>,
}

/// Pending work of the document walk.
enum Step<'d> {
    Enter(NodeRef<'d>, NodeHandle, usize),
    /// Closes an entered element, with its tag name when it is preserved
    /// as a [`WebTag`] pair.
    Exit(Option<String>),
}

/// Converts a parsed page into a [`WebDocument`].
pub struct DomConverter<'a> {
    builder: WebDocumentBuilder,
    table: NodeTable,
    base_url: Option<&'a Url>,
    max_depth: usize,
    depth_limit_hit: bool,
    warnings: Vec<String>,
}

impl<'a> DomConverter<'a> {
    /// A converter resolving image sources against `base_url` and ignoring
    /// nodes nested deeper than `max_depth` elements.
    #[must_use]
    pub fn new(base_url: Option<&'a Url>, max_depth: usize) -> Self {
        Self {
            builder: WebDocumentBuilder::new(),
            table: NodeTable::new(),
            base_url,
            max_depth,
            depth_limit_hit: false,
            warnings: Vec::new(),
        }
    }

    /// Parses `html` and converts it.
    pub fn convert_html(self, html: &str) -> Result<Conversion> {
        let document = Document::from(html);
        self.convert(&document)
    }

    /// Converts an already parsed document.
    pub fn convert(mut self, document: &Document) -> Result<Conversion> {
        let root = document
            .root()
            .children()
            .into_iter()
            .find(NodeRef::is_element)
            .ok_or_else(|| Error::ParseError("document has no root element".to_string()))?;

        let title = document
            .select("title")
            .nodes()
            .first()
            .map(|t| t.text().split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|t| !t.is_empty());

        self.builder.start_document();
        let document_node = self.table.root();
        self.walk(root, document_node);
        self.builder.end_document();

        let document = self.builder.into_document();
        log::debug!(
            "converted page into {} elements over {} nodes",
            document.elements().len(),
            self.table.len()
        );
        Ok(Conversion {
            document,
            dom: self.table,
            title,
            warnings: self.warnings,
        })
    }

    /// Depth-first walk over an explicit stack, so page depth never turns
    /// into call depth.
    fn walk(&mut self, root: NodeRef<'_>, parent: NodeHandle) {
        let mut stack = vec![Step::Enter(root, parent, 1)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(node, parent, depth) => {
                    if let Some((handle, preserved)) = self.enter(&node, parent, depth) {
                        stack.push(Step::Exit(preserved));
                        stack.extend(
                            node.children()
                                .into_iter()
                                .rev()
                                .map(|child| Step::Enter(child, handle, depth + 1)),
                        );
                    }
                }
                Step::Exit(preserved) => {
                    self.builder.end_element();
                    if let Some(tag) = preserved {
                        self.builder.tag(WebTag::new(&tag, TagType::End));
                    }
                }
            }
        }
    }

    /// Emits the events for entering `node`. Returns the node's handle and
    /// its preserved tag name when the walk has to descend into its children.
    fn enter(
        &mut self,
        node: &NodeRef,
        parent: NodeHandle,
        depth: usize,
    ) -> Option<(NodeHandle, Option<String>)> {
        if node.is_text() {
            let handle = self.table.push_text(parent);
            self.builder.text_node(&node.text(), handle);
            return None;
        }
        if !node.is_element() {
            return None;
        }
        if depth > self.max_depth {
            self.hit_depth_limit();
            return None;
        }
        let tag = dom::tag_name(node)?;

        let style = InlineStyle::parse(&dom::attr(node, "style").unwrap_or_default());
        if is_hidden(node, &tag, &style) {
            log::trace!("skipping hidden <{tag}>");
            return None;
        }

        let handle = self.table.push_element(parent, &tag);

        let mut cx = EmbedContext {
            table: &mut self.table,
            base_url: self.base_url,
        };
        if let Some(element) = embeds::extract(node, &tag, handle, &mut cx) {
            self.builder.embed(element);
            return None;
        }

        if is_sharing_widget(node) {
            log::trace!("skipping sharing widget <{tag}>");
            return None;
        }

        match tag.as_str() {
            "a" if dom::attr(node, "href").is_some_and(|h| h.contains("action=edit&section=")) => {
                return None;
            }
            "span" if dom::attr(node, "class").as_deref() == Some("mw-editsection") => return None,
            "br" => {
                self.builder.line_break(handle);
                return None;
            }
            "hr" => {
                self.builder.embed(WebElement::Break { is_content: false });
                return None;
            }
            "table" if classify_table(node) == TableType::Data => {
                self.builder.data_table(WebTable {
                    node: handle,
                    is_content: false,
                });
                return None;
            }
            "video" => {
                self.builder.embed(WebElement::Video(WebVideo {
                    node: handle,
                    width: dimension(node, "width"),
                    height: dimension(node, "height"),
                    is_content: false,
                }));
                return None;
            }
            t if SKIPPED_TAGS.contains(&t) => {
                self.builder.skip_element();
                return None;
            }
            t if IGNORED_TAGS.contains(&t) => return None,
            _ => {}
        }

        let nestable = can_be_nested(&tag);
        if nestable {
            self.builder.tag(WebTag::new(&tag, TagType::Start));
        }

        let class = dom::attr(node, "class").unwrap_or_default();
        let id = dom::attr(node, "id").unwrap_or_default();
        let action = ElementAction::for_element(&ElementInfo {
            tag: &tag,
            display: style.display_for(&tag),
            floated: style.is_floated(),
            class: &class,
            id: &id,
            has_href: node.has_attr("href"),
        });
        self.builder.start_element(action);

        Some((handle, nestable.then_some(tag)))
    }

    fn hit_depth_limit(&mut self) {
        if !self.depth_limit_hit {
            self.depth_limit_hit = true;
            let message = format!(
                "tree deeper than {} elements; deeper content ignored",
                self.max_depth
            );
            log::warn!("{message}");
            self.warnings.push(message);
        }
    }
}

fn is_sharing_widget(node: &NodeRef) -> bool {
    dom::attr(node, "class").is_some_and(|c| SHARING_CLASSES.contains(&c.as_str()))
        || dom::attr(node, "data-component").as_deref() == Some("share")
}

fn dimension(node: &NodeRef, attribute: &str) -> u32 {
    dom::attr(node, attribute)
        .and_then(|v| v.trim().trim_end_matches("px").parse().ok())
        .unwrap_or(0)
}
