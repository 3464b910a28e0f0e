//! Independent heuristics scoring lead-image candidates.
//!
//! Each scorer has a maximum and is clamped to it; the lead-image pass sums
//! the scores of all scorers for a candidate.

use crate::dom::{DomTree, NodeHandle};
use crate::webdocument::WebImage;

/// One lead-image heuristic.
pub trait ImageScorer {
    /// Upper bound of [`ImageScorer::image_score`].
    fn max_score(&self) -> u32;

    /// Raw, unclamped score.
    fn compute_score(&self, image: &WebImage, dom: &dyn DomTree) -> u32;

    /// Score clamped to [`ImageScorer::max_score`].
    fn image_score(&self, image: &WebImage, dom: &dyn DomTree) -> u32 {
        let score = self.compute_score(image, dom);
        log::trace!(
            "{}: {}/{}",
            std::any::type_name::<Self>()
                .rsplit("::")
                .next()
                .unwrap_or_default(),
            score,
            self.max_score()
        );
        score.min(self.max_score())
    }
}

/// Linear ramp over the declared pixel area.
#[derive(Debug, Clone, Copy)]
pub struct AreaScorer {
    pub max_score: u32,
    pub min_area: u64,
    pub max_area: u64,
}

impl AreaScorer {
    /// Ramps from 0 at `min_area` to `max_score` at `max_area`.
    #[must_use]
    pub const fn new(max_score: u32, min_area: u64, max_area: u64) -> Self {
        Self {
            max_score,
            min_area,
            max_area,
        }
    }
}

impl ImageScorer for AreaScorer {
    fn max_score(&self) -> u32 {
        self.max_score
    }

    fn compute_score(&self, image: &WebImage, _dom: &dyn DomTree) -> u32 {
        let area = image.area();
        if area < self.min_area || self.max_area <= self.min_area {
            return 0;
        }
        let ramp = (area - self.min_area) as f32 / (self.max_area - self.min_area) as f32;
        ((ramp * self.max_score as f32) as u32).min(self.max_score)
    }
}

/// Favours wide images; the sweet spot is a 1.45 to 1.8 width/height ratio.
#[derive(Debug, Clone, Copy)]
pub struct DimensionsRatioScorer {
    pub max_score: u32,
}

impl DimensionsRatioScorer {
    /// Scorer worth at most `max_score`.
    #[must_use]
    pub const fn new(max_score: u32) -> Self {
        Self { max_score }
    }
}

impl ImageScorer for DimensionsRatioScorer {
    fn max_score(&self) -> u32 {
        self.max_score
    }

    fn compute_score(&self, image: &WebImage, _dom: &dyn DomTree) -> u32 {
        if image.height == 0 {
            return 0;
        }
        let ratio = image.width as f32 / image.height as f32;
        let multiplier = if ratio > 1.45 && ratio < 1.8 {
            1.0
        } else if ratio > 1.3 && ratio < 2.2 {
            0.4
        } else {
            0.0
        };
        (self.max_score as f32 * multiplier) as u32
    }
}

/// Closeness in the tree to the first content text.
#[derive(Debug, Clone, Copy)]
pub struct DomDistanceScorer {
    pub max_score: u32,
    pub first_content: Option<NodeHandle>,
}

impl DomDistanceScorer {
    /// Scores by tree distance to `first_content`; nothing when it is `None`.
    #[must_use]
    pub const fn new(max_score: u32, first_content: Option<NodeHandle>) -> Self {
        Self {
            max_score,
            first_content,
        }
    }
}

impl ImageScorer for DomDistanceScorer {
    fn max_score(&self) -> u32 {
        self.max_score
    }

    fn compute_score(&self, image: &WebImage, dom: &dyn DomTree) -> u32 {
        let Some(first) = self.first_content else {
            return 0;
        };
        let Some(common) = dom.nearest_common_ancestor(first, image.node) else {
            return 0;
        };
        let depth_diff = dom.depth(first).saturating_sub(dom.depth(common));
        let multiplier = match depth_diff {
            0..=3 => 1.0,
            4..=5 => 0.6,
            6..=7 => 0.2,
            _ => 0.0,
        };
        (self.max_score as f32 * multiplier) as u32
    }
}

/// Full score for images inside a `<figure>`.
#[derive(Debug, Clone, Copy)]
pub struct HasFigureScorer {
    pub max_score: u32,
}

impl HasFigureScorer {
    /// Scorer worth `max_score` when it applies.
    #[must_use]
    pub const fn new(max_score: u32) -> Self {
        Self { max_score }
    }
}

impl ImageScorer for HasFigureScorer {
    fn max_score(&self) -> u32 {
        self.max_score
    }

    fn compute_score(&self, image: &WebImage, dom: &dyn DomTree) -> u32 {
        if dom.has_ancestor_tag(image.node, "figure") {
            self.max_score
        } else {
            0
        }
    }
}
