//! Charset sniffing and decoding of raw page bytes.
//!
//! A byte order mark wins; otherwise the first kilobyte is searched for a
//! `<meta charset>` or `http-equiv` content type declaration. Pages without
//! either are read as UTF-8.

use encoding_rs::{Encoding, REPLACEMENT, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// How much of the page is searched for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static META_CONTENT_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#)
        .expect("valid regex")
});

/// Encoding of `html` and the length of its byte order mark.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> (&'static Encoding, usize) {
    if let Some(found) = Encoding::for_bom(html) {
        return found;
    }
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    let declared = META_CONTENT_TYPE
        .captures(&head)
        .or_else(|| META_CHARSET.captures(&head))
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()));
    // A UTF-16 label inside an ASCII-compatible page means UTF-8.
    match declared {
        Some(encoding) if encoding.output_encoding() == UTF_8 && encoding != UTF_8 => (UTF_8, 0),
        Some(encoding) => (encoding, 0),
        None => (UTF_8, 0),
    }
}

/// Decodes `html` into UTF-8, replacing malformed sequences with U+FFFD.
///
/// # Errors
///
/// Returns [`Error::EncodingError`] when the page declares a charset that
/// the web platform refuses to decode (ISO-2022-KR and friends).
pub fn decode_html(html: &[u8]) -> Result<String> {
    let (encoding, bom_length) = sniff_encoding(html);
    if encoding == REPLACEMENT {
        return Err(Error::EncodingError(
            "page declares an undecodable charset".to_string(),
        ));
    }
    let (decoded, had_errors) = encoding.decode_without_bom_handling(&html[bom_length..]);
    if had_errors {
        log::debug!("malformed {} sequences replaced", encoding.name());
    }
    Ok(decoded.into_owned())
}
