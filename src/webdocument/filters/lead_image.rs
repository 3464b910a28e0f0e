//! Picks the image that best represents the article.

use crate::dom::{DomTree, NodeHandle};
use crate::webdocument::{WebDocument, WebElement};

use super::image_scorers::{
    AreaScorer, DimensionsRatioScorer, DomDistanceScorer, HasFigureScorer, ImageScorer,
};

/// Lowest summed score an image needs to become the lead image.
pub const MINIMUM_ACCEPTED_SCORE: u32 = 26;

/// Marks the best-scoring image ahead of the article text as content.
///
/// Returns whether an image was promoted.
pub fn process(document: &mut WebDocument, dom: &dyn DomTree) -> bool {
    match find(document, dom) {
        Some(index) => {
            document.elements_mut()[index].set_is_content(true);
            true
        }
        None => false,
    }
}

/// Element index of the best-scoring lead image candidate.
///
/// Only images and figures that are not content yet and come before the
/// first content text or content image are candidates.
#[must_use]
pub fn find(document: &WebDocument, dom: &dyn DomTree) -> Option<usize> {
    let mut candidates: Vec<usize> = Vec::new();
    let mut first_content: Option<NodeHandle> = None;

    for (i, element) in document.elements().iter().enumerate() {
        match element {
            WebElement::Text(text) if text.is_content => {
                first_content = Some(text.first_non_whitespace_node());
                break;
            }
            WebElement::Image(_) | WebElement::Figure(_) => {
                if element.is_content() {
                    break;
                }
                candidates.push(i);
            }
            _ => {}
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let scorers: [&dyn ImageScorer; 4] = [
        &AreaScorer::new(25, 75_000, 200_000),
        &DimensionsRatioScorer::new(25),
        &DomDistanceScorer::new(25, first_content),
        &HasFigureScorer::new(15),
    ];

    let mut best: Option<(usize, u32)> = None;
    for &index in &candidates {
        let Some(image) = document.elements()[index].as_image() else {
            continue;
        };
        let score: u32 = scorers.iter().map(|s| s.image_score(image, dom)).sum();
        log::debug!("lead image candidate {} scored {}", image.src, score);
        if score >= MINIMUM_ACCEPTED_SCORE && best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }

    let (index, score) = best?;
    log::debug!("lead image at element {index} with score {score}");
    Some(index)
}
