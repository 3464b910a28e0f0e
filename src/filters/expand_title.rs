use crate::document::TextDocument;
use crate::labels::Label;

use super::Filter;

/// Restores the blocks between the title and the first content block.
///
/// Only blocks demoted by the largest-block pass ([`Label::MightBeContent`])
/// are promoted; the title itself is included when it carries that label.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandTitleToContentFilter;

impl Filter for ExpandTitleToContentFilter {
    fn name(&self) -> &'static str {
        "ExpandTitleToContentFilter"
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        let mut title = None;
        let mut content_start = None;
        for (i, block) in doc.blocks().iter().enumerate() {
            if block.has_label(Label::Title) {
                title = Some(i);
            }
            if block.is_content() {
                content_start = Some(i);
                break;
            }
        }

        let (Some(title), Some(content_start)) = (title, content_start) else {
            return false;
        };
        if content_start <= title {
            return false;
        }

        let mut changes = false;
        for block in &mut doc.blocks_mut()[title..content_start] {
            if block.has_label(Label::MightBeContent) {
                changes |= block.set_is_content(true);
            }
        }
        changes
    }
}
