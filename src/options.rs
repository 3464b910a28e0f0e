//! Configuration options for content extraction.
//!
//! The `Options` struct picks the extraction profile and switches the
//! passes that run after block classification on or off.

use url::Url;

use crate::error::{Error, Result};
use crate::extractors::Extractor;

/// Configuration options for content extraction.
///
/// All fields are public. Use `Default::default()` for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_distiller::{Extractor, Options};
///
/// let options = Options {
///     profile: Extractor::KeepEverythingWithMinWords(5),
///     find_lead_image: false,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Filter pipeline classifying the blocks.
    ///
    /// Default: `Extractor::Article`
    pub profile: Extractor,

    /// Titles the page is known under (for instance from a feed entry).
    ///
    /// Blocks matching one of them are labelled as the title. When empty,
    /// the text of the `<title>` element is used.
    ///
    /// Default: empty
    pub candidate_titles: Vec<String>,

    /// Score the images ahead of the main content and keep the best one.
    ///
    /// Default: `true`
    pub find_lead_image: bool,

    /// Keep list and quote start/end tags around content items.
    ///
    /// Default: `true`
    pub retain_nested_elements: bool,

    /// Address of the page; relative image sources are resolved against it.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Elements nested deeper than this are ignored, with a warning.
    ///
    /// Default: `512`
    pub max_tree_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            profile: Extractor::Article,
            candidate_titles: Vec::new(),
            find_lead_image: true,
            retain_nested_elements: true,
            base_url: None,
            max_tree_depth: 512,
        }
    }
}

impl Options {
    /// Checks the options for values extraction cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] for an unparsable `base_url` or a
    /// zero `max_tree_depth`.
    pub fn validate(&self) -> Result<()> {
        if self.max_tree_depth == 0 {
            return Err(Error::InvalidOptions(
                "max_tree_depth must be positive".to_string(),
            ));
        }
        self.parsed_base_url().map(|_| ())
    }

    /// `base_url` parsed, `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] when `base_url` is not an absolute URL.
    pub fn parsed_base_url(&self) -> Result<Option<Url>> {
        self.base_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw)
                    .map_err(|err| Error::InvalidOptions(format!("base_url {raw:?}: {err}")))
            })
            .transpose()
    }
}
