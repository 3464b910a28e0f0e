//! Decision-tree classifiers over `(previous, current, next)` block triplets.
//!
//! The thresholds come from a trained model and are kept verbatim. Both ends
//! of the sequence are padded with the empty sentinel blocks so every block
//! has a neighbour on each side.

use crate::document::{TextBlock, TextDocument, EMPTY_END, EMPTY_START};

use super::Filter;

/// Runs `decide` on every block with its neighbours and stores the result
/// as the block's content flag. Returns whether any flag changed.
fn classify_triplets(
    doc: &mut TextDocument<'_>,
    decide: fn(&TextBlock, &TextBlock, &TextBlock) -> bool,
) -> bool {
    let blocks = doc.blocks();
    let decisions: Vec<bool> = (0..blocks.len())
        .map(|i| {
            let prev = if i == 0 { &EMPTY_START } else { &blocks[i - 1] };
            let next = blocks.get(i + 1).unwrap_or(&EMPTY_END);
            decide(prev, &blocks[i], next)
        })
        .collect();

    let mut changes = false;
    for (block, is_content) in doc.blocks_mut().iter_mut().zip(decisions) {
        changes |= block.set_is_content(is_content);
    }
    changes
}

/// Classifies blocks by link density and word counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumWordsRulesClassifier;

impl NumWordsRulesClassifier {
    fn decide(prev: &TextBlock, curr: &TextBlock, next: &TextBlock) -> bool {
        if curr.link_density() <= 0.333_333 {
            if prev.link_density() <= 0.555_556 {
                if curr.num_words() <= 16 {
                    if next.num_words() <= 15 {
                        prev.num_words() > 4
                    } else {
                        true
                    }
                } else {
                    true
                }
            } else if curr.num_words() <= 40 {
                next.num_words() > 17
            } else {
                true
            }
        } else {
            false
        }
    }
}

impl Filter for NumWordsRulesClassifier {
    fn name(&self) -> &'static str {
        "NumWordsRulesClassifier"
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        classify_triplets(doc, Self::decide)
    }
}

/// Classifies blocks by link density and text density.
#[derive(Debug, Clone, Copy, Default)]
pub struct DensityRulesClassifier;

impl DensityRulesClassifier {
    fn decide(prev: &TextBlock, curr: &TextBlock, next: &TextBlock) -> bool {
        if curr.link_density() <= 0.333_333 {
            if prev.link_density() <= 0.555_556 {
                if curr.text_density() <= 9.0 {
                    if next.text_density() <= 10.0 {
                        prev.text_density() > 4.0
                    } else {
                        true
                    }
                } else {
                    next.text_density() != 0.0
                }
            } else {
                next.text_density() > 11.0
            }
        } else {
            false
        }
    }
}

impl Filter for DensityRulesClassifier {
    fn name(&self) -> &'static str {
        "DensityRulesClassifier"
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        classify_triplets(doc, Self::decide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{block, doc, flags};

    #[test]
    fn test_num_words_content_path() {
        let prev = block(0, 10, 0, false);
        let curr = block(1, 20, 0, false);
        let next = block(2, 20, 0, false);
        assert!(NumWordsRulesClassifier::decide(&prev, &curr, &next));
    }

    #[test]
    fn test_num_words_short_isolated_block() {
        let prev = block(0, 3, 0, false);
        let curr = block(1, 5, 0, false);
        let next = block(2, 5, 0, false);
        assert!(!NumWordsRulesClassifier::decide(&prev, &curr, &next));
        let prev = block(0, 5, 0, false);
        assert!(NumWordsRulesClassifier::decide(&prev, &curr, &next));
    }

    #[test]
    fn test_num_words_after_link_list() {
        let links = block(0, 10, 10, false);
        let curr = block(1, 30, 0, false);
        assert!(!NumWordsRulesClassifier::decide(&links, &curr, &block(2, 17, 0, false)));
        assert!(NumWordsRulesClassifier::decide(&links, &curr, &block(2, 18, 0, false)));
        assert!(NumWordsRulesClassifier::decide(&links, &block(1, 41, 0, false), &EMPTY_END));
    }

    #[test]
    fn test_link_heavy_block_is_boilerplate() {
        let curr = block(1, 30, 20, true);
        assert!(!NumWordsRulesClassifier::decide(&EMPTY_START, &curr, &EMPTY_END));
        assert!(!DensityRulesClassifier::decide(&EMPTY_START, &curr, &EMPTY_END));
    }

    #[test]
    fn test_num_words_process_uses_sentinels() {
        let mut d = doc(vec![block(0, 30, 0, false), block(1, 2, 2, true)]);
        assert!(NumWordsRulesClassifier.process(&mut d));
        assert_eq!(flags(&d), vec![true, false]);
        assert!(!NumWordsRulesClassifier.process(&mut d));

        let mut single = doc(vec![block(0, 3, 0, false)]);
        assert!(!NumWordsRulesClassifier.process(&mut single));
    }

    #[test]
    fn test_density_rules() {
        // one 80-column line each, so text density equals word count
        let dense = block(1, 12, 0, false);
        assert!(DensityRulesClassifier::decide(&EMPTY_START, &dense, &block(2, 3, 0, false)));
        assert!(!DensityRulesClassifier::decide(&EMPTY_START, &dense, &EMPTY_END));

        let sparse = block(1, 5, 0, false);
        assert!(!DensityRulesClassifier::decide(&block(0, 3, 0, false), &sparse, &block(2, 5, 0, false)));
        assert!(DensityRulesClassifier::decide(&block(0, 5, 0, false), &sparse, &block(2, 5, 0, false)));
        assert!(DensityRulesClassifier::decide(&EMPTY_START, &sparse, &block(2, 11, 0, false)));

        let after_links = block(0, 4, 4, false);
        assert!(DensityRulesClassifier::decide(&after_links, &sparse, &block(2, 12, 0, false)));
        assert!(!DensityRulesClassifier::decide(&after_links, &sparse, &block(2, 11, 0, false)));
    }
}
