//! Finds blocks that announce the end of the article.

use crate::document::TextDocument;
use crate::labels::Label;
use crate::patterns::TERMINATING_TEXT;

use super::Filter;

/// Blocks longer than this are never terminating markers.
const MAX_WORDS: usize = 14;

/// Labels short "Comments", "Add your comment", "Reader views" and similar
/// blocks as [`Label::StrictlyNotContent`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminatingBlocksFinder;

impl TerminatingBlocksFinder {
    fn is_terminating(text: &str, link_density: f64) -> bool {
        if text.chars().count() >= 8 {
            TERMINATING_TEXT.is_match(text)
        } else {
            (link_density == 1.0 && text == "Comment") || text == "Shares"
        }
    }
}

impl Filter for TerminatingBlocksFinder {
    fn name(&self) -> &'static str {
        "TerminatingBlocksFinder"
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        let mut changes = false;
        for block in doc.blocks_mut() {
            if block.num_words() > MAX_WORDS {
                continue;
            }
            if Self::is_terminating(block.text().trim(), block.link_density()) {
                block.add_label(Label::StrictlyNotContent);
                changes = true;
            }
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextBlock;

    fn run(text: &str, words: usize, anchor_words: usize) -> bool {
        let mut doc = TextDocument::detached(vec![TextBlock::new(text, words, anchor_words, 0)]);
        let changed = TerminatingBlocksFinder.process(&mut doc);
        assert_eq!(changed, doc.blocks()[0].has_label(Label::StrictlyNotContent));
        changed
    }

    #[test]
    fn test_comment_markers() {
        assert!(run("Comments", 1, 0));
        assert!(run("  Post a comment ", 3, 0));
        assert!(run("24 comments", 2, 0));
        assert!(run("Reader views on this story", 5, 0));
    }

    #[test]
    fn test_short_exact_markers() {
        assert!(run("Shares", 1, 0));
        assert!(run("Shares", 1, 1));
        assert!(run("Comment", 1, 1));
        assert!(!run("Comment", 1, 0));
    }

    #[test]
    fn test_regular_text_is_untouched() {
        assert!(!run("The council approved the budget", 5, 0));
        assert!(!run("Home", 1, 1));
    }

    #[test]
    fn test_long_blocks_are_skipped() {
        let text = format!("Comments {}", vec!["word"; 14].join(" "));
        assert!(!run(&text, 15, 0));
    }
}
