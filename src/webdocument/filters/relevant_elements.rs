//! Carries content status onto non-text elements.

use crate::webdocument::{WebDocument, WebElement};

/// Marks every non-text element that follows a content text, up to the next
/// non-content text, as content. Returns whether anything changed.
pub fn process(document: &mut WebDocument) -> bool {
    let mut changes = false;
    let mut in_content = false;
    for element in document.elements_mut() {
        if element.is_content() {
            in_content = true;
        } else if matches!(element, WebElement::Text(_)) {
            in_content = false;
        } else if in_content {
            element.set_is_content(true);
            changes = true;
        }
    }
    changes
}
