//! # rs-distiller
//!
//! Main content extraction for web pages, in the boilerpipe / DOM distiller
//! tradition.
//!
//! A page is cut into text blocks wherever the rendering would start a new
//! line. Each block carries shallow text statistics (word count, link
//! density, text density) and structural labels (heading, list item,
//! title). A fixed pipeline of filters then classifies the blocks as
//! content or boilerplate, merges related ones and keeps the main article
//! together with its headline. A final pass picks the image that best
//! represents the article.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_distiller::extract;
//!
//! let html = r#"<html><head><title>Rivers rise</title></head><body>
//! <nav><a href="/">Home</a> <a href="/news">News</a></nav>
//! <h1>Rivers rise</h1>
//! <p>After three days of rain the rivers across the valley rose above their banks,
//! flooding fields and closing the main road between the two towns for the night.</p>
//! </body></html>"#;
//!
//! let result = extract(html)?;
//! assert!(result.content_text.contains("rivers across the valley"));
//! assert!(!result.content_text.contains("Home"));
//! # Ok::<(), rs_distiller::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`converter`] turns HTML into element and text events.
//! - [`webdocument`] builds text runs, images and embeds from those events.
//! - [`document`] is the block view the [`filters`] work on.
//! - [`extractors`] bundles the filters into extraction profiles.
//!
//! Callers with their own DOM can skip the converter: drive a
//! [`webdocument::WebDocumentBuilder`] directly and implement
//! [`dom::DomTree`] over their tree.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Word counting and text tokenization.
pub mod words;

/// Closed set of block labels.
pub mod labels;

/// Node handles and the tree query trait.
pub mod dom;

/// Text blocks and the text document.
pub mod document;

/// Web document elements, the block builder and the post passes.
pub mod webdocument;

/// The block classification filters.
pub mod filters;

/// Extraction profiles.
pub mod extractors;

/// HTML to block-builder events.
pub mod converter;

/// Charset sniffing and decoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractors::Extractor;
pub use options::Options;
pub use result::{ExtractResult, ImageData};

/// Extracts main content from an HTML document using default options.
///
/// # Errors
///
/// Fails only when the page cannot be turned into a tree with a root element.
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts main content from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_distiller::{extract_with_options, Extractor, Options};
///
/// let html = "<html><body><p>Short note.</p><p>Another one.</p></body></html>";
/// let options = Options {
///     profile: Extractor::KeepEverything,
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.content_text, "Short note.\nAnother one.\n");
/// # Ok::<(), rs_distiller::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidOptions`] when `options` fail validation and
/// [`Error::ParseError`] when the page has no root element.
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options)
}

/// Extracts main content from raw HTML bytes.
///
/// The charset comes from a byte order mark, a `<meta charset>` or an
/// `http-equiv` content type, in that order, and defaults to UTF-8.
/// Malformed sequences are replaced with U+FFFD.
///
/// # Example
///
/// ```rust
/// use rs_distiller::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9 society \
/// met every morning to argue about the news, the weather and the price of bread in \
/// the old town square.</p></body></html>";
/// let result = extract_bytes(html)?;
/// assert!(result.content_text.contains("Caf\u{e9} society"));
/// # Ok::<(), rs_distiller::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::EncodingError`] for an undecodable charset, otherwise
/// fails like [`extract`].
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts main content from raw HTML bytes with custom options.
///
/// # Errors
///
/// Fails like [`extract_bytes`] and [`extract_with_options`].
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html = encoding::decode_html(html)?;
    extract_with_options(&html, options)
}
