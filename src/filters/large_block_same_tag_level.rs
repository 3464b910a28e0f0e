use crate::document::TextDocument;
use crate::labels::Label;

use super::Filter;

/// Blocks with at least this many words are promoted.
const MIN_WORDS: usize = 100;

/// Promotes long blocks nested as deep as the main content block.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargeBlockSameTagLevelToContentFilter;

impl Filter for LargeBlockSameTagLevelToContentFilter {
    fn name(&self) -> &'static str {
        "LargeBlockSameTagLevelToContentFilter"
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        let Some(tag_level) = doc
            .blocks()
            .iter()
            .find(|b| b.is_content() && b.has_label(Label::VeryLikelyContent))
            .map(|b| b.tag_level())
        else {
            return false;
        };

        let mut changes = false;
        for block in doc.blocks_mut() {
            if !block.is_content() && block.num_words() >= MIN_WORDS && block.tag_level() == tag_level
            {
                block.set_is_content(true);
                changes = true;
            }
        }
        changes
    }
}
