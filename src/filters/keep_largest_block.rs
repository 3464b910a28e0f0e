use crate::document::{TextBlock, TextDocument};
use crate::dom::{DomTree, NodeHandle};
use crate::labels::Label;

use super::Filter;

/// Keeps only the content block with the most words.
///
/// The winner is labelled [`Label::VeryLikelyContent`]; every other block
/// becomes boilerplate labelled [`Label::MightBeContent`]. With sibling
/// expansion the blocks whose text elements are DOM siblings of the winner
/// (chained outwards in both directions) are restored as content and
/// labelled [`Label::SiblingOfMainContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepLargestBlockFilter {
    expand_to_siblings: bool,
}

impl KeepLargestBlockFilter {
    /// Keeps the largest block only.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            expand_to_siblings: false,
        }
    }

    /// Keeps the largest block and restores its chain of DOM siblings.
    #[must_use]
    pub const fn expand_to_siblings() -> Self {
        Self {
            expand_to_siblings: true,
        }
    }
}

impl Default for KeepLargestBlockFilter {
    fn default() -> Self {
        Self::new()
    }
}

fn text_element(dom: &dyn DomTree, node: Option<NodeHandle>) -> Option<NodeHandle> {
    node.and_then(|n| dom.parent_element(n))
}

fn is_sibling(dom: &dyn DomTree, a: Option<NodeHandle>, b: Option<NodeHandle>) -> bool {
    let parent = |e: Option<NodeHandle>| e.and_then(|n| dom.parent_element(n));
    match (parent(a), parent(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

fn promote_sibling(block: &mut TextBlock) {
    block.set_is_content(true);
    block.add_label(Label::SiblingOfMainContent);
}

fn expand_later(dom: &dyn DomTree, blocks: &mut [TextBlock], largest: usize) {
    let mut frontier = text_element(dom, blocks[largest].last_non_whitespace_node());
    for candidate in &mut blocks[largest + 1..] {
        let element = text_element(dom, candidate.first_non_whitespace_node());
        if is_sibling(dom, frontier, element) {
            promote_sibling(candidate);
            frontier = text_element(dom, candidate.last_non_whitespace_node());
        }
    }
}

fn expand_earlier(dom: &dyn DomTree, blocks: &mut [TextBlock], largest: usize) {
    let mut frontier = text_element(dom, blocks[largest].first_non_whitespace_node());
    for candidate in blocks[..largest].iter_mut().rev() {
        let element = text_element(dom, candidate.last_non_whitespace_node());
        if is_sibling(dom, frontier, element) {
            promote_sibling(candidate);
            frontier = text_element(dom, candidate.first_non_whitespace_node());
        }
    }
}

impl Filter for KeepLargestBlockFilter {
    fn name(&self) -> &'static str {
        "KeepLargestBlockFilter"
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        let dom = doc.dom();
        let blocks = doc.blocks_mut();
        if blocks.len() < 2 {
            return false;
        }

        let mut largest: Option<usize> = None;
        for (i, block) in blocks.iter().enumerate() {
            if block.is_content()
                && largest.is_none_or(|l| block.num_words() > blocks[l].num_words())
            {
                largest = Some(i);
            }
        }

        for (i, block) in blocks.iter_mut().enumerate() {
            if Some(i) == largest {
                block.set_is_content(true);
                block.add_label(Label::VeryLikelyContent);
            } else {
                block.set_is_content(false);
                block.add_label(Label::MightBeContent);
            }
        }

        if let Some(largest) = largest.filter(|_| self.expand_to_siblings) {
            expand_later(dom, blocks, largest);
            expand_earlier(dom, blocks, largest);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeTable;
    use crate::filters::test_support::{block, doc, flags};

    #[test]
    fn test_largest_block_wins() {
        let mut d = doc(vec![block(0, 5, 0, true), block(1, 50, 0, true), block(2, 5, 0, true)]);
        assert!(KeepLargestBlockFilter::new().process(&mut d));
        assert_eq!(flags(&d), vec![false, true, false]);
        assert!(d.blocks()[1].has_label(Label::VeryLikelyContent));
        assert!(d.blocks()[0].has_label(Label::MightBeContent));
        assert!(d.blocks()[2].has_label(Label::MightBeContent));
    }

    #[test]
    fn test_first_largest_wins_ties() {
        let mut d = doc(vec![block(0, 20, 0, true), block(1, 20, 0, true)]);
        KeepLargestBlockFilter::new().process(&mut d);
        assert_eq!(flags(&d), vec![true, false]);
    }

    #[test]
    fn test_no_content_demotes_everything() {
        let mut d = doc(vec![block(0, 20, 0, false), block(1, 20, 0, false)]);
        assert!(KeepLargestBlockFilter::expand_to_siblings().process(&mut d));
        assert!(d.blocks().iter().all(|b| b.has_label(Label::MightBeContent)));
        assert_eq!(flags(&d), vec![false, false]);
    }

    #[test]
    fn test_sibling_expansion_chains_outwards() {
        // <body><div><p/><p/><p/></div><aside><p/></aside></body>
        let mut dom = NodeTable::new();
        let html = dom.push_element(dom.root(), "html");
        let body = dom.push_element(html, "body");
        let div = dom.push_element(body, "div");
        let mut texts = Vec::new();
        for _ in 0..3 {
            let p = dom.push_element(div, "p");
            texts.push(dom.push_text(p));
        }
        let aside = dom.push_element(body, "aside");
        let p = dom.push_element(aside, "p");
        texts.push(dom.push_text(p));

        let blocks = [(5, true), (50, true), (5, false), (8, false)]
            .iter()
            .zip(&texts)
            .enumerate()
            .map(|(i, (&(words, content), &node))| {
                let mut b = block(i, words, 0, content);
                b.set_nodes(node, node);
                b
            })
            .collect();
        let mut d = TextDocument::new(blocks, &dom);

        assert!(KeepLargestBlockFilter::expand_to_siblings().process(&mut d));
        assert_eq!(flags(&d), vec![true, true, true, false]);
        assert!(d.blocks()[0].has_label(Label::SiblingOfMainContent));
        assert!(d.blocks()[2].has_label(Label::SiblingOfMainContent));
        assert!(!d.blocks()[1].has_label(Label::SiblingOfMainContent));
    }

    #[test]
    fn test_single_block_is_untouched() {
        let mut d = doc(vec![block(0, 5, 0, true)]);
        assert!(!KeepLargestBlockFilter::new().process(&mut d));
        assert!(d.blocks()[0].labels().is_empty());
    }
}
