use crate::document::{TextBlock, TextDocument};
use crate::labels::Label;

use super::Filter;

/// Fuses headings into the content block that follows them.
///
/// A heading directly followed by content is merged into it and loses its
/// [`Label::Heading`]; if the heading itself was boilerplate the merged block
/// is marked [`Label::BoilerplateHeadingFused`]. A content heading followed by
/// boilerplate is demoted instead. Title and strictly-not-content blocks are
/// never touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingFusion;

impl HeadingFusion {
    fn is_protected(block: &TextBlock) -> bool {
        block.has_label(Label::StrictlyNotContent) || block.has_label(Label::Title)
    }
}

impl Filter for HeadingFusion {
    fn name(&self) -> &'static str {
        "HeadingFusion"
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        let blocks = doc.blocks_mut();
        if blocks.len() < 2 {
            return false;
        }

        let mut changes = false;
        let mut i = 1;
        while i < blocks.len() {
            let (prev, curr) = (&blocks[i - 1], &blocks[i]);
            if !prev.has_label(Label::Heading) || Self::is_protected(prev) || Self::is_protected(curr)
            {
                i += 1;
                continue;
            }

            if curr.is_content() {
                let heading_was_content = prev.is_content();
                let body = blocks.remove(i);
                let merged = &mut blocks[i - 1];
                merged.merge_next(&body);
                merged.remove_label(Label::Heading);
                if !heading_was_content {
                    merged.add_label(Label::BoilerplateHeadingFused);
                }
                changes = true;
                // the merged block is now `prev` for the block that moved into `i`
            } else {
                if prev.is_content() {
                    blocks[i - 1].set_is_content(false);
                    changes = true;
                }
                i += 1;
            }
        }
        changes
    }
}
