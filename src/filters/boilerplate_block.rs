use crate::document::{TextBlock, TextDocument};
use crate::labels::Label;

use super::Filter;

/// Drops non-content blocks from the document.
///
/// The keep-title variant spares [`Label::Title`] and
/// [`Label::ArticleMetadata`] blocks so later filters can still anchor on
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoilerplateBlockFilter {
    keep_title: bool,
}

impl BoilerplateBlockFilter {
    /// Variant sparing title and article-metadata blocks.
    #[must_use]
    pub const fn keep_title() -> Self {
        Self { keep_title: true }
    }

    /// Variant dropping every non-content block.
    #[must_use]
    pub const fn plain() -> Self {
        Self { keep_title: false }
    }

    fn keeps(&self, block: &TextBlock) -> bool {
        block.is_content()
            || (self.keep_title
                && (block.has_label(Label::Title) || block.has_label(Label::ArticleMetadata)))
    }
}

impl Filter for BoilerplateBlockFilter {
    fn name(&self) -> &'static str {
        if self.keep_title {
            "BoilerplateBlockFilter(keep title)"
        } else {
            "BoilerplateBlockFilter"
        }
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        let blocks = doc.blocks_mut();
        let before = blocks.len();
        blocks.retain(|b| self.keeps(b));
        blocks.len() != before
    }
}
