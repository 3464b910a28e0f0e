use crate::document::TextDocument;
use crate::labels::Label;

use super::Filter;

/// Promotes link-free list items directly following the main content.
///
/// Items must be nested deeper than the main block, carry
/// [`Label::MightBeContent`] and [`Label::Li`], and follow it without any
/// other block in between; the first block breaking the run ends it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListAtEndFilter;

impl Filter for ListAtEndFilter {
    fn name(&self) -> &'static str {
        "ListAtEndFilter"
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        let mut changes = false;
        let mut tag_level: Option<usize> = None;
        for block in doc.blocks_mut() {
            if block.is_content() && block.has_label(Label::VeryLikelyContent) {
                tag_level = Some(block.tag_level());
            } else if tag_level.is_some_and(|level| block.tag_level() > level)
                && block.has_label(Label::MightBeContent)
                && block.has_label(Label::Li)
                && block.link_density() == 0.0
            {
                block.set_is_content(true);
                changes = true;
            } else {
                tag_level = None;
            }
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextBlock;
    use crate::filters::test_support::{block, doc, flags};

    fn item(offset: usize, anchor_words: usize) -> TextBlock {
        let mut b = block(offset, 4, anchor_words, false);
        b.set_tag_level(5);
        b.add_label(Label::MightBeContent);
        b.add_label(Label::Li);
        b
    }

    fn main(offset: usize) -> TextBlock {
        let mut b = block(offset, 200, 0, true);
        b.set_tag_level(3);
        b.add_label(Label::VeryLikelyContent);
        b
    }

    #[test]
    fn test_trailing_list_is_promoted() {
        let mut d = doc(vec![main(0), item(1, 0), item(2, 0)]);
        assert!(ListAtEndFilter.process(&mut d));
        assert_eq!(flags(&d), vec![true, true, true]);
    }

    #[test]
    fn test_linked_item_breaks_the_run() {
        let mut d = doc(vec![main(0), item(1, 0), item(2, 1), item(3, 0)]);
        assert!(ListAtEndFilter.process(&mut d));
        assert_eq!(flags(&d), vec![true, true, false, false]);
    }

    #[test]
    fn test_list_before_main_block_is_ignored() {
        let mut d = doc(vec![item(0, 0), main(1)]);
        assert!(!ListAtEndFilter.process(&mut d));
    }
}
