//! Extraction profiles: fixed, ordered filter pipelines.

use crate::document::TextDocument;
use crate::filters::{
    run_all, BlockProximityFusion, BoilerplateBlockFilter, DocumentTitleMatchClassifier,
    ExpandTitleToContentFilter, Filter, HeadingFusion, KeepLargestBlockFilter,
    LabelToBoilerplateFilter, LargeBlockSameTagLevelToContentFilter, ListAtEndFilter,
    MarkEverythingContentFilter, MinWordsFilter, NumWordsRulesClassifier,
    SimilarSiblingContentExpansion, TerminatingBlocksFinder,
};

/// Which pipeline classifies the blocks of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Extractor {
    /// Full news/article heuristics.
    #[default]
    Article,
    /// Every block is content.
    KeepEverything,
    /// Every block with at least this many words is content.
    KeepEverythingWithMinWords(usize),
}

impl Extractor {
    /// The filters of this profile, in execution order.
    #[must_use]
    pub fn pipeline(&self) -> Vec<Box<dyn Filter>> {
        match *self {
            Self::Article => vec![
                Box::new(TerminatingBlocksFinder),
                Box::new(DocumentTitleMatchClassifier),
                Box::new(NumWordsRulesClassifier),
                Box::new(LabelToBoilerplateFilter::strictly_not_content()),
                Box::new(
                    SimilarSiblingContentExpansion::builder()
                        .allow_cross_headings()
                        .max_link_density(0.5)
                        .max_block_distance(10)
                        .build(),
                ),
                Box::new(
                    SimilarSiblingContentExpansion::builder()
                        .allow_cross_headings()
                        .allow_mixed_tags()
                        .max_block_distance(10)
                        .build(),
                ),
                Box::new(HeadingFusion),
                Box::new(BlockProximityFusion::pre_filtering()),
                Box::new(BoilerplateBlockFilter::keep_title()),
                Box::new(BlockProximityFusion::post_filtering()),
                Box::new(KeepLargestBlockFilter::expand_to_siblings()),
                Box::new(ExpandTitleToContentFilter),
                Box::new(LargeBlockSameTagLevelToContentFilter),
                Box::new(ListAtEndFilter),
                Box::new(BoilerplateBlockFilter::plain()),
            ],
            Self::KeepEverything => vec![Box::new(MarkEverythingContentFilter)],
            Self::KeepEverythingWithMinWords(min_words) => vec![
                Box::new(MarkEverythingContentFilter),
                Box::new(MinWordsFilter::new(min_words)),
            ],
        }
    }

    /// Classifies `doc` in place, returning whether any filter changed it.
    pub fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        log::debug!("running {:?} pipeline over {} blocks", self, doc.blocks().len());
        run_all(&self.pipeline(), doc)
    }
}
