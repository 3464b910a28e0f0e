//! Filters behind the non-article profiles.

use crate::document::TextDocument;

use super::Filter;

/// Marks every block as content.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkEverythingContentFilter;

impl Filter for MarkEverythingContentFilter {
    fn name(&self) -> &'static str {
        "MarkEverythingContentFilter"
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        let mut changes = false;
        for block in doc.blocks_mut() {
            changes |= block.set_is_content(true);
        }
        changes
    }
}

/// Demotes content blocks with fewer than `min_words` words.
#[derive(Debug, Clone, Copy)]
pub struct MinWordsFilter {
    min_words: usize,
}

impl MinWordsFilter {
    /// Filter with the given threshold.
    #[must_use]
    pub const fn new(min_words: usize) -> Self {
        Self { min_words }
    }
}

impl Filter for MinWordsFilter {
    fn name(&self) -> &'static str {
        "MinWordsFilter"
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        let mut changes = false;
        for block in doc.blocks_mut() {
            if block.is_content() && block.num_words() < self.min_words {
                block.set_is_content(false);
                changes = true;
            }
        }
        changes
    }
}
