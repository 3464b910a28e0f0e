//! Keeps list and quote markup balanced around content.
//!
//! A preserved tag pair becomes content when anything between its start and
//! end tags is content; the decision then bubbles up so every enclosing pair
//! is retained too.

use crate::webdocument::{WebDocument, WebElement};

/// Marks every preserved tag pair that encloses content as content.
pub fn process(document: &mut WebDocument) {
    let elements = document.elements_mut();
    let mut is_content = false;
    // Depth below which every open tag already has content inside it.
    let mut stack_mark: isize = -1;
    let mut open_tags: Vec<usize> = Vec::new();

    for i in 0..elements.len() {
        match &elements[i] {
            WebElement::Tag(tag) if tag.is_start_tag() => {
                elements[i].set_is_content(is_content);
                open_tags.push(i);
                is_content = false;
            }
            WebElement::Tag(tag) => {
                let Some(start) = open_tags.pop() else {
                    log::debug!("unbalanced end tag </{}> at {}", tag.tag_name, i);
                    continue;
                };
                is_content |= stack_mark >= open_tags.len() as isize;
                if is_content {
                    stack_mark = open_tags.len() as isize - 1;
                }
                let was_content = elements[start].is_content();
                elements[start].set_is_content(is_content);
                elements[i].set_is_content(is_content);
                is_content = was_content;
            }
            other => {
                if !is_content {
                    is_content = other.is_content();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webdocument::{TagType, WebTag, WebText};

    fn text(is_content: bool) -> WebElement {
        WebElement::Text(WebText {
            is_content,
            ..WebText::default()
        })
    }

    fn start(name: &str) -> WebElement {
        WebElement::Tag(WebTag::new(name, TagType::Start))
    }

    fn end(name: &str) -> WebElement {
        WebElement::Tag(WebTag::new(name, TagType::End))
    }

    fn flags(doc: &WebDocument) -> Vec<bool> {
        doc.elements().iter().map(WebElement::is_content).collect()
    }

    fn list(items: &[bool]) -> WebDocument {
        let mut doc = WebDocument::new();
        doc.push(text(false));
        doc.push(start("ul"));
        for &item in items {
            doc.push(start("li"));
            doc.push(text(item));
            doc.push(end("li"));
        }
        doc.push(end("ul"));
        doc
    }

    #[test]
    fn test_list_with_content_items_is_retained() {
        let mut doc = list(&[true, true, true]);
        process(&mut doc);
        let f = flags(&doc);
        assert!(!f[0]);
        assert!(f[1], "<ul> start");
        assert!(f[f.len() - 1], "</ul> end");
        assert!(f[2] && f[4], "first <li> pair");
    }

    #[test]
    fn test_partial_list_keeps_only_content_items() {
        let mut doc = list(&[false, true, false]);
        process(&mut doc);
        let f = flags(&doc);
        assert!(f[1] && f[f.len() - 1]);
        // li #1 and #3 have no content inside
        assert!(!f[2] && !f[4]);
        assert!(f[5] && f[7]);
        assert!(!f[8] && !f[10]);
    }

    #[test]
    fn test_list_without_content_is_dropped() {
        let mut doc = list(&[false, false]);
        process(&mut doc);
        assert!(flags(&doc).iter().all(|&c| !c));
    }

    #[test]
    fn test_nested_content_propagates_outward() {
        let mut doc = WebDocument::new();
        doc.push(start("blockquote"));
        doc.push(start("ul"));
        doc.push(start("li"));
        doc.push(text(true));
        doc.push(end("li"));
        doc.push(end("ul"));
        doc.push(text(false));
        doc.push(end("blockquote"));
        process(&mut doc);
        let f = flags(&doc);
        assert!(f[0] && f[7], "blockquote");
        assert!(f[1] && f[5], "ul");
        assert!(f[2] && f[4], "li");
    }

    #[test]
    fn test_stray_end_tag_is_ignored() {
        let mut doc = WebDocument::new();
        doc.push(end("li"));
        doc.push(text(true));
        process(&mut doc);
        assert_eq!(flags(&doc), vec![false, true]);
    }
}
