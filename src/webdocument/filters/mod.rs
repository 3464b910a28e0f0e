//! Passes over the whole web document, run after block classification.
//!
//! Order matters: [`relevant_elements`] extends text decisions to images
//! and tables, [`lead_image`] may then promote one image ahead of the
//! article, and [`nested_element_retainer`] finally balances the preserved
//! list and quote tags around whatever ended up as content.

pub mod image_scorers;
pub mod lead_image;
pub mod nested_element_retainer;
pub mod relevant_elements;

pub use image_scorers::{
    AreaScorer, DimensionsRatioScorer, DomDistanceScorer, HasFigureScorer, ImageScorer,
};
pub use lead_image::MINIMUM_ACCEPTED_SCORE;
