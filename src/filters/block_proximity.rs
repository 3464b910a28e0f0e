use crate::document::TextDocument;
use crate::labels::Label;

use super::Filter;

/// Neighbouring content blocks at most this many blocks apart are fused.
const MAX_BLOCK_DISTANCE: i32 = 1;

/// Merges adjacent content blocks.
///
/// Blocks only merge when they agree on [`Label::StrictlyNotContent`] and
/// [`Label::Title`]. Before boilerplate removal a block carrying
/// [`Label::BoilerplateHeadingFused`] is never merged into its predecessor;
/// afterwards both blocks must sit at the same tag level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockProximityFusion {
    post_filtering: bool,
}

impl BlockProximityFusion {
    /// Variant run before non-content blocks are removed.
    #[must_use]
    pub const fn pre_filtering() -> Self {
        Self {
            post_filtering: false,
        }
    }

    /// Variant run after non-content blocks are removed.
    #[must_use]
    pub const fn post_filtering() -> Self {
        Self {
            post_filtering: true,
        }
    }
}

impl Filter for BlockProximityFusion {
    fn name(&self) -> &'static str {
        if self.post_filtering {
            "BlockProximityFusion(post)"
        } else {
            "BlockProximityFusion(pre)"
        }
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        let blocks = doc.blocks_mut();
        if blocks.len() < 2 {
            return false;
        }

        let mut changes = false;
        let mut i = 1;
        while i < blocks.len() {
            let (prev, block) = (&blocks[i - 1], &blocks[i]);
            if !prev.is_content() || !block.is_content() {
                i += 1;
                continue;
            }

            let diff = block.offset_blocks_start() - prev.offset_blocks_end() - 1;
            if diff > MAX_BLOCK_DISTANCE {
                i += 1;
                continue;
            }

            let mut ok = if self.post_filtering {
                prev.tag_level() == block.tag_level()
            } else {
                !block.has_label(Label::BoilerplateHeadingFused)
            };
            ok &= prev.has_label(Label::StrictlyNotContent)
                == block.has_label(Label::StrictlyNotContent);
            ok &= prev.has_label(Label::Title) == block.has_label(Label::Title);

            if ok {
                let next = blocks.remove(i);
                blocks[i - 1].merge_next(&next);
                changes = true;
            } else {
                i += 1;
            }
        }
        changes
    }
}
