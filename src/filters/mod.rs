//! Block classification filters.
//!
//! Every filter walks a [`TextDocument`] once, flips content flags, adds or
//! removes labels and may merge neighbouring blocks. Filters are run in a
//! fixed order by an [`Extractor`](crate::extractors::Extractor) profile;
//! later filters rely on the labels earlier ones leave behind.
//!
//! All filters are total: an empty document (or one with a single block,
//! where the filter compares neighbours) is left untouched and reported as
//! unchanged.

mod block_proximity;
mod boilerplate_block;
mod expand_title;
mod heading_fusion;
mod keep_largest_block;
mod label_to_boilerplate;
mod large_block_same_tag_level;
mod list_at_end;
mod rules_classifier;
mod similar_sibling;
mod simple;
mod terminating_blocks;
mod title_match;

pub use block_proximity::BlockProximityFusion;
pub use boilerplate_block::BoilerplateBlockFilter;
pub use expand_title::ExpandTitleToContentFilter;
pub use heading_fusion::HeadingFusion;
pub use keep_largest_block::KeepLargestBlockFilter;
pub use label_to_boilerplate::LabelToBoilerplateFilter;
pub use large_block_same_tag_level::LargeBlockSameTagLevelToContentFilter;
pub use list_at_end::ListAtEndFilter;
pub use rules_classifier::{DensityRulesClassifier, NumWordsRulesClassifier};
pub use similar_sibling::{SimilarSiblingContentExpansion, SimilarSiblingContentExpansionBuilder};
pub use simple::{MarkEverythingContentFilter, MinWordsFilter};
pub use terminating_blocks::TerminatingBlocksFinder;
pub use title_match::DocumentTitleMatchClassifier;

use crate::document::TextDocument;

/// One classification step over a text document.
pub trait Filter {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    /// Runs the filter, returning whether any block changed.
    fn process(&self, doc: &mut TextDocument<'_>) -> bool;
}

/// Runs `filters` in order, returning whether any of them changed the document.
///
/// Every filter runs even after an earlier one reported a change.
pub fn run_all(filters: &[Box<dyn Filter>], doc: &mut TextDocument<'_>) -> bool {
    let mut changed = false;
    for filter in filters {
        let step = filter.process(doc);
        log::debug!(
            "{}: changed={}, {} blocks, {} content words",
            filter.name(),
            step,
            doc.blocks().len(),
            doc.count_words_in_content()
        );
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("after {}:\n{}", filter.name(), doc.debug_string());
        }
        changed |= step;
    }
    changed
}
