//! Invariants of text blocks over generated inputs.

use proptest::prelude::*;

use rs_distiller::document::TextBlock;
use rs_distiller::dom::NodeHandle;
use rs_distiller::webdocument::WebTextBuilder;
use rs_distiller::words::count_words;

/// Words and punctuation tokens, some of them inside links.
fn runs() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec(("[a-z]{1,8}|[-.,;!?]{1,3}| {1,3}", any::<bool>()), 0..40)
}

fn build(runs: &[(String, bool)]) -> Option<TextBlock> {
    let mut builder = WebTextBuilder::new();
    for (i, (text, in_anchor)) in runs.iter().enumerate() {
        if *in_anchor {
            builder.enter_anchor();
        }
        builder.text_node(text, NodeHandle::from_index(i + 1), 1);
        if *in_anchor {
            builder.exit_anchor();
        }
    }
    builder.flush(0).map(|t| TextBlock::from_web_text(&t, 0))
}

proptest! {
    #[test]
    fn link_density_is_a_ratio(runs in runs()) {
        if let Some(block) = build(&runs) {
            let ld = block.link_density();
            prop_assert!((0.0..=1.0).contains(&ld));
            prop_assert!(block.num_words_in_anchor_text() <= block.num_words());
            if block.num_words_in_anchor_text() == 0 {
                prop_assert_eq!(ld, 0.0);
            }
        }
    }

    #[test]
    fn builder_counts_match_the_tokenizer(runs in runs()) {
        if let Some(block) = build(&runs) {
            prop_assert_eq!(block.num_words(), count_words(block.text()));
        }
    }

    #[test]
    fn merge_adds_counts_and_ors_content(
        (a_words, a_anchor) in (0usize..200).prop_flat_map(|w| (Just(w), 0..=w)),
        (b_words, b_anchor) in (0usize..200).prop_flat_map(|w| (Just(w), 0..=w)),
        a_content in any::<bool>(),
        b_content in any::<bool>(),
    ) {
        let mut a = TextBlock::new("a", a_words, a_anchor, 0);
        a.set_is_content(a_content);
        let mut b = TextBlock::new("b", b_words, b_anchor, 1);
        b.set_is_content(b_content);

        a.merge_next(&b);
        prop_assert_eq!(a.num_words(), a_words + b_words);
        prop_assert_eq!(a.num_words_in_anchor_text(), a_anchor + b_anchor);
        prop_assert_eq!(a.is_content(), a_content || b_content);
        prop_assert_eq!(a.offset_blocks_start(), 0);
        prop_assert_eq!(a.offset_blocks_end(), 1);
        prop_assert!((0.0..=1.0).contains(&a.link_density()));
    }
}
