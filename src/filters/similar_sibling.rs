//! Promotes non-content blocks that are DOM siblings of nearby content.
//!
//! Each block gets a canonical node: the highest ancestor of its first text
//! node that contains neither the previous block's last node nor the next
//! block's first node. Two blocks are siblings when their canonical nodes
//! share a parent.

use crate::document::{TextBlock, TextDocument};
use crate::dom::{DomTree, NodeHandle};
use crate::labels::Label;

use super::Filter;

/// Configurable sibling expansion; build it with [`SimilarSiblingContentExpansion::builder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarSiblingContentExpansion {
    allow_cross_titles: bool,
    allow_cross_headings: bool,
    allow_mixed_tags: bool,
    max_link_density: f64,
    max_block_distance: usize,
}

/// Builder for [`SimilarSiblingContentExpansion`].
///
/// Defaults: nothing crosses titles or headings, tags must match, link
/// density must be `0.0` and blocks must be adjacent-only (distance `0`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarSiblingContentExpansionBuilder {
    allow_cross_titles: bool,
    allow_cross_headings: bool,
    allow_mixed_tags: bool,
    max_link_density: f64,
    max_block_distance: usize,
}

impl SimilarSiblingContentExpansionBuilder {
    /// Lets the scan continue past title blocks.
    #[must_use]
    pub const fn allow_cross_titles(mut self) -> Self {
        self.allow_cross_titles = true;
        self
    }

    /// Lets the scan continue past heading blocks.
    #[must_use]
    pub const fn allow_cross_headings(mut self) -> Self {
        self.allow_cross_headings = true;
        self
    }

    /// Treats siblings with different tag names as similar.
    #[must_use]
    pub const fn allow_mixed_tags(mut self) -> Self {
        self.allow_mixed_tags = true;
        self
    }

    /// Highest link density a promoted block may have.
    #[must_use]
    pub const fn max_link_density(mut self, density: f64) -> Self {
        self.max_link_density = density;
        self
    }

    /// Furthest apart, in blocks, a pair may be.
    #[must_use]
    pub const fn max_block_distance(mut self, distance: usize) -> Self {
        self.max_block_distance = distance;
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub const fn build(self) -> SimilarSiblingContentExpansion {
        SimilarSiblingContentExpansion {
            allow_cross_titles: self.allow_cross_titles,
            allow_cross_headings: self.allow_cross_headings,
            allow_mixed_tags: self.allow_mixed_tags,
            max_link_density: self.max_link_density,
            max_block_distance: self.max_block_distance,
        }
    }
}

impl SimilarSiblingContentExpansion {
    /// Starts from the strictest configuration.
    #[must_use]
    pub fn builder() -> SimilarSiblingContentExpansionBuilder {
        SimilarSiblingContentExpansionBuilder::default()
    }

    fn blocks_expansion(&self, block: &TextBlock) -> bool {
        (!self.allow_cross_titles && block.has_label(Label::Title))
            || (!self.allow_cross_headings && block.has_label(Label::Heading))
    }

    fn allow_expand_from(block: &TextBlock) -> bool {
        block.is_content()
            && !block.has_label(Label::StrictlyNotContent)
            && !block.has_label(Label::Title)
    }

    fn allow_expand_to(&self, block: &TextBlock) -> bool {
        block.link_density() <= self.max_link_density
            && !block.is_content()
            && !block.has_label(Label::StrictlyNotContent)
            && !block.has_label(Label::Title)
    }

    fn is_similar(&self, dom: &dyn DomTree, left: Option<NodeHandle>, right: Option<NodeHandle>) -> bool {
        let (Some(left), Some(right)) = (left, right) else {
            return false;
        };
        if !self.allow_mixed_tags && !same_tag(dom, left, right) {
            return false;
        }
        match (dom.parent(left), dom.parent(right)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

fn same_tag(dom: &dyn DomTree, left: NodeHandle, right: NodeHandle) -> bool {
    match (dom.tag_name(left), dom.tag_name(right)) {
        (Some(a), Some(b)) => a == b,
        (None, None) => dom.is_text(left) == dom.is_text(right),
        _ => false,
    }
}

fn contains(dom: &dyn DomTree, ancestor: NodeHandle, node: Option<NodeHandle>) -> bool {
    node.is_some_and(|n| dom.contains(ancestor, n))
}

/// Canonical node of every block, `None` for blocks without DOM references.
fn canonical_reps(blocks: &[TextBlock], dom: &dyn DomTree) -> Vec<Option<NodeHandle>> {
    let doc_node = dom.document_element();
    (0..blocks.len())
        .map(|i| {
            let next = match blocks.get(i + 1) {
                Some(b) => b.first_non_whitespace_node(),
                None => doc_node,
            };
            let prev = if i == 0 {
                doc_node
            } else {
                blocks[i - 1].last_non_whitespace_node()
            };

            let mut current = blocks[i].first_non_whitespace_node()?;
            while let Some(parent) = dom.parent(current) {
                if contains(dom, parent, prev) || contains(dom, parent, next) {
                    break;
                }
                current = parent;
            }
            Some(current)
        })
        .collect()
}

impl Filter for SimilarSiblingContentExpansion {
    fn name(&self) -> &'static str {
        "SimilarSiblingContentExpansion"
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        if doc.blocks().len() < 2 {
            return false;
        }
        let dom = doc.dom();
        let reps = canonical_reps(doc.blocks(), dom);
        let blocks = doc.blocks_mut();
        let distance = self.max_block_distance;

        // Content blocks that may still absorb a sibling, and non-content
        // blocks that may still be absorbed. Only `[begin, end)` is live.
        let mut good = vec![0; blocks.len()];
        let (mut good_begin, mut good_end) = (0, 0);
        let mut bad = vec![0; blocks.len()];
        let (mut bad_begin, mut bad_end) = (0, 0);

        let mut changes = false;
        for i in 0..blocks.len() {
            if self.blocks_expansion(&blocks[i]) {
                good_begin = good_end;
                bad_begin = bad_end;
                continue;
            }

            if Self::allow_expand_from(&blocks[i]) {
                good[good_end] = i;
                good_end += 1;
                let mut j = bad_begin;
                while j < bad_end {
                    let b = bad[j];
                    if i - b > distance {
                        if j == bad_begin {
                            bad_begin += 1;
                        }
                    } else if self.is_similar(dom, reps[i], reps[b]) {
                        changes = true;
                        blocks[b].set_is_content(true);
                        bad[j] = bad[bad_begin];
                        bad_begin += 1;
                    }
                    j += 1;
                }
            } else if self.allow_expand_to(&blocks[i]) {
                let mut matched = false;
                let mut j = good_begin;
                while j < good_end {
                    let g = good[j];
                    if i - g > distance {
                        if j == good_begin {
                            good_begin += 1;
                        }
                    } else if self.is_similar(dom, reps[i], reps[g]) {
                        changes = true;
                        blocks[i].set_is_content(true);
                        good[j] = good[good_begin];
                        good_begin += 1;
                        matched = true;
                        break;
                    }
                    j += 1;
                }
                if matched {
                    good[good_end] = i;
                    good_end += 1;
                } else {
                    bad[bad_end] = i;
                    bad_end += 1;
                }
            }
        }
        changes
    }
}
