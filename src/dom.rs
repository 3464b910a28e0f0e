//! DOM access for the core.
//!
//! Text blocks keep back-references to the first and last non-whitespace text
//! node they were built from. The filters only ever ask structural questions
//! about those nodes (parent, depth, common ancestors, tag names), so the core
//! talks to the tree through the small [`DomTree`] trait and opaque
//! [`NodeHandle`]s instead of owning a parsed document.
//!
//! [`NodeTable`] is the arena implementation: the converter mirrors every
//! visited `dom_query` node into it, and tests build trees by hand with
//! [`NodeTable::push_element`] / [`NodeTable::push_text`].

use dom_query::NodeRef;

/// Opaque handle to a node of some external tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeHandle(usize);

impl NodeHandle {
    /// Wraps a raw arena index.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Raw arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Read-only structural queries over a tree.
///
/// Only `parent`, `tag_name`, `is_text` and `document_element` are required;
/// everything else derives from them.
pub trait DomTree {
    /// Parent of `node`, `None` at the root.
    fn parent(&self, node: NodeHandle) -> Option<NodeHandle>;

    /// Lowercase tag name for elements, `None` for other node kinds.
    fn tag_name(&self, node: NodeHandle) -> Option<&str>;

    /// True for text nodes.
    fn is_text(&self, node: NodeHandle) -> bool;

    /// The `<html>` element, if the tree has one.
    fn document_element(&self) -> Option<NodeHandle>;

    /// True for element nodes.
    fn is_element(&self, node: NodeHandle) -> bool {
        self.tag_name(node).is_some()
    }

    /// Parent of `node` if it is an element.
    fn parent_element(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.parent(node).filter(|&p| self.is_element(p))
    }

    /// Number of ancestors of `node`.
    fn depth(&self, node: NodeHandle) -> usize {
        let mut depth = 0;
        let mut current = self.parent(node);
        while let Some(p) = current {
            depth += 1;
            current = self.parent(p);
        }
        depth
    }

    /// Ancestors of `node`, nearest first.
    fn ancestors(&self, node: NodeHandle) -> Vec<NodeHandle> {
        let mut out = Vec::new();
        let mut current = self.parent(node);
        while let Some(p) = current {
            out.push(p);
            current = self.parent(p);
        }
        out
    }

    /// True if `ancestor` is `node` or one of its ancestors.
    fn contains(&self, ancestor: NodeHandle, node: NodeHandle) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    /// Deepest node containing both `a` and `b`.
    fn nearest_common_ancestor(&self, a: NodeHandle, b: NodeHandle) -> Option<NodeHandle> {
        let mut current = Some(a);
        while let Some(n) = current {
            if self.contains(n, b) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    /// True if any ancestor of `node` is a `tag` element.
    fn has_ancestor_tag(&self, node: NodeHandle, tag: &str) -> bool {
        self.ancestors(node)
            .into_iter()
            .any(|a| self.tag_name(a) == Some(tag))
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Document,
    Element(String),
    Text,
}

#[derive(Debug, Clone)]
struct NodeData {
    parent: Option<NodeHandle>,
    kind: NodeKind,
}

/// Arena of nodes implementing [`DomTree`].
///
/// Handle `0` is the document node once [`NodeTable::new`] has run.
#[derive(Debug, Clone)]
pub struct NodeTable {
    nodes: Vec<NodeData>,
    document_element: Option<NodeHandle>,
}

impl NodeTable {
    /// A table holding only the document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                parent: None,
                kind: NodeKind::Document,
            }],
            document_element: None,
        }
    }

    /// A table with no nodes at all. Every query answers `None`/`false`.
    #[must_use]
    pub const fn detached() -> Self {
        Self {
            nodes: Vec::new(),
            document_element: None,
        }
    }

    /// The document node.
    #[must_use]
    pub const fn root(&self) -> NodeHandle {
        NodeHandle(0)
    }

    /// Number of nodes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the table holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends an element under `parent`. Tag names are stored lowercase.
    pub fn push_element(&mut self, parent: NodeHandle, tag: &str) -> NodeHandle {
        let handle = self.push(parent, NodeKind::Element(tag.to_ascii_lowercase()));
        if self.document_element.is_none() && parent == self.root() {
            self.document_element = Some(handle);
        }
        handle
    }

    /// Appends a text node under `parent`.
    pub fn push_text(&mut self, parent: NodeHandle) -> NodeHandle {
        self.push(parent, NodeKind::Text)
    }

    fn push(&mut self, parent: NodeHandle, kind: NodeKind) -> NodeHandle {
        let handle = NodeHandle(self.nodes.len());
        self.nodes.push(NodeData {
            parent: Some(parent),
            kind,
        });
        handle
    }
}

impl Default for NodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree for NodeTable {
    fn parent(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    fn tag_name(&self, node: NodeHandle) -> Option<&str> {
        match self.nodes.get(node.0).map(|n| &n.kind) {
            Some(NodeKind::Element(tag)) => Some(tag.as_str()),
            _ => None,
        }
    }

    fn is_text(&self, node: NodeHandle) -> bool {
        matches!(self.nodes.get(node.0).map(|n| &n.kind), Some(NodeKind::Text))
    }

    fn document_element(&self) -> Option<NodeHandle> {
        self.document_element
    }
}

/// Tree used by documents built without a DOM (hand-made blocks in tests,
/// callers feeding their own event stream).
pub static DETACHED: NodeTable = NodeTable::detached();

// === dom_query adapters ===

/// Lowercase tag name of a `dom_query` element.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Attribute value as an owned string.
#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Whitespace separated class names.
#[must_use]
pub fn class_list(node: &NodeRef) -> Vec<String> {
    node.attr("class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// True if the element carries class `name`.
#[must_use]
pub fn has_class(node: &NodeRef, name: &str) -> bool {
    node.attr("class")
        .is_some_and(|c| c.split_whitespace().any(|cls| cls == name))
}
