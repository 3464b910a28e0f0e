use crate::document::TextDocument;
use crate::labels::Label;

use super::Filter;

/// Demotes every content block carrying one label.
#[derive(Debug, Clone, Copy)]
pub struct LabelToBoilerplateFilter {
    label: Label,
}

impl LabelToBoilerplateFilter {
    /// Demotes blocks carrying `label`.
    #[must_use]
    pub const fn new(label: Label) -> Self {
        Self { label }
    }

    /// Demotes [`Label::StrictlyNotContent`] blocks.
    #[must_use]
    pub const fn strictly_not_content() -> Self {
        Self::new(Label::StrictlyNotContent)
    }
}

impl Filter for LabelToBoilerplateFilter {
    fn name(&self) -> &'static str {
        "LabelToBoilerplateFilter"
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        let mut changes = false;
        for block in doc.blocks_mut() {
            if block.is_content() && block.has_label(self.label) {
                block.set_is_content(false);
                changes = true;
            }
        }
        changes
    }
}
