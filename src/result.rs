//! Result types for extraction output.

use serde::{Deserialize, Serialize};

use crate::webdocument::{WebElement, WebImage};

/// An image kept as part of the main content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    /// Image URL, resolved against the page address when one was given.
    pub src: String,

    /// Alt text from `<img alt="...">`.
    pub alt: Option<String>,

    /// Caption of the enclosing `<figure>`.
    pub caption: Option<String>,

    /// Declared width in pixels, `0` when unknown.
    pub width: u32,

    /// Declared height in pixels, `0` when unknown.
    pub height: u32,

    /// Whether this image was picked as the lead image.
    pub is_lead: bool,
}

impl ImageData {
    pub(crate) fn from_image(image: &WebImage, caption: Option<&str>) -> Self {
        Self {
            src: image.src.clone(),
            alt: image.alt.clone(),
            caption: caption.map(str::to_string),
            width: image.width,
            height: image.height,
            is_lead: false,
        }
    }

    /// Image data of an `Image` or `Figure` element.
    pub(crate) fn from_element(element: &WebElement) -> Option<Self> {
        match element {
            WebElement::Image(image) => Some(Self::from_image(image, None)),
            WebElement::Figure(figure) => {
                Some(Self::from_image(&figure.image, figure.caption.as_deref()))
            }
            _ => None,
        }
    }
}

/// Result of content extraction from an HTML document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractResult {
    /// Main content as plain text, one block per line.
    pub content_text: String,

    /// First candidate title, if any.
    pub title: Option<String>,

    /// The image chosen to represent the page.
    pub lead_image: Option<ImageData>,

    /// Content images in document order, the lead image included.
    pub images: Vec<ImageData>,

    /// Number of words in the content blocks.
    pub word_count: usize,

    /// Number of text blocks left after classification.
    pub block_count: usize,

    /// Problems met during extraction that did not stop it.
    pub warnings: Vec<String>,
}

impl ExtractResult {
    /// True when no content text was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content_text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeHandle;
    use crate::webdocument::WebFigure;

    #[test]
    fn test_image_data_from_figure() {
        let mut image = WebImage::new(NodeHandle::from_index(2), "a.jpg", 640, 400);
        image.alt = Some("River".to_string());
        let figure = WebElement::Figure(WebFigure {
            image,
            caption: Some("The flood".to_string()),
        });
        let data = ImageData::from_element(&figure);
        assert_eq!(
            data,
            Some(ImageData {
                src: "a.jpg".to_string(),
                alt: Some("River".to_string()),
                caption: Some("The flood".to_string()),
                width: 640,
                height: 400,
                is_lead: false,
            })
        );
        assert!(ImageData::from_element(&WebElement::Break { is_content: true }).is_none());
    }

    #[test]
    fn test_empty_result() {
        assert!(ExtractResult::default().is_empty());
        let result = ExtractResult {
            content_text: "Body\n".to_string(),
            ..ExtractResult::default()
        };
        assert!(!result.is_empty());
    }
}
