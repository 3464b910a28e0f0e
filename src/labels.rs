//! Structural and semantic labels attached to text blocks.

use std::fmt;

/// A label carried by a [`TextBlock`](crate::document::TextBlock).
///
/// Labels are added by element classification and by the filters. They are
/// only ever removed explicitly (heading fusion drops [`Label::Heading`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// Block matches one of the candidate page titles.
    Title,
    /// Byline, date line or similar.
    ArticleMetadata,
    /// Demoted by the largest-block pass, may be promoted again.
    MightBeContent,
    /// The largest content block.
    VeryLikelyContent,
    /// Inside a list item.
    Li,
    /// Inside any heading element.
    Heading,
    /// Inside `<h1>`.
    H1,
    /// Inside `<h2>`.
    H2,
    /// Inside `<h3>`.
    H3,
    /// A boilerplate heading merged into the block that followed it.
    BoilerplateHeadingFused,
    /// Never content (navigation, asides, comment sections).
    StrictlyNotContent,
    /// Promoted because it is a DOM sibling of the main content.
    SiblingOfMainContent,
}

impl Label {
    /// Canonical upper-case name used in debug output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::ArticleMetadata => "ARTICLE_METADATA",
            Self::MightBeContent => "MIGHT_BE_CONTENT",
            Self::VeryLikelyContent => "VERY_LIKELY_CONTENT",
            Self::Li => "LI",
            Self::Heading => "HEADING",
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::BoilerplateHeadingFused => "BOILERPLATE_HEADING_FUSED",
            Self::StrictlyNotContent => "STRICTLY_NOT_CONTENT",
            Self::SiblingOfMainContent => "SIBLING_OF_MAIN_CONTENT",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display() {
        assert_eq!(Label::StrictlyNotContent.to_string(), "STRICTLY_NOT_CONTENT");
        assert_eq!(Label::H2.to_string(), "H2");
    }
}
