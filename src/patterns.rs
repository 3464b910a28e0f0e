//! Compiled regex patterns used by the classifiers and the converter.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Block Classification
// =============================================================================

/// Short blocks that mark the start of a comment section or page footer.
///
/// Matched against trimmed text of blocks with at most 14 words.
pub static TERMINATING_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(^(comments|© reuters|please rate this|post a comment|\d+\s+(comments|users responded in))|what you think\.\.\.|add your comment|add comment|reader views|have your say|reader comments|rätta artikeln|^thanks for your comments - this feedback is now closed$)",
    )
    .expect("TERMINATING_TEXT regex")
});

/// Punctuation stripped from a block before the second title comparison.
pub static TITLE_REMOVE_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\?!\.\-:]+").expect("TITLE_REMOVE_CHARACTERS regex"));

/// Separator sets used to cut a page title into its longest meaningful part.
///
/// Applied in order; each produces at most one candidate.
pub static TITLE_LONGEST_PART_SPLITS: LazyLock<[Regex; 6]> = LazyLock::new(|| {
    [
        Regex::new(r"[ ]*[\|»|-][ ]*").expect("TITLE_SPLIT_DASH regex"),
        Regex::new(r"[ ]*[\|»|:][ ]*").expect("TITLE_SPLIT_COLON regex"),
        Regex::new(r"[ ]*[\|»|:\(\)][ ]*").expect("TITLE_SPLIT_PAREN regex"),
        Regex::new(r"[ ]*[\|»|:\(\)\-][ ]*").expect("TITLE_SPLIT_PAREN_DASH regex"),
        Regex::new(r"[ ]*[\|»|,|:\(\)\-][ ]*").expect("TITLE_SPLIT_COMMA regex"),
        Regex::new(r"[ ]*[\|»|,|:\(\)\-\x{a0}][ ]*").expect("TITLE_SPLIT_NBSP regex"),
    ]
});

/// `" | "` separated title segments.
pub static TITLE_PIPE_SEGMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]+[\|][ ]+").expect("TITLE_PIPE_SEGMENTS regex"));

/// `" - "` separated title segments.
pub static TITLE_DASH_SEGMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]+[\-][ ]+").expect("TITLE_DASH_SEGMENTS regex"));

/// Trailing `" - Site Name"` suffix.
pub static TITLE_TRAILING_SITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" - [^\-]+$").expect("TITLE_TRAILING_SITE regex"));

/// Leading `"Site Name - "` prefix.
pub static TITLE_LEADING_SITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\-]+ - ").expect("TITLE_LEADING_SITE regex"));

// =============================================================================
// Element Classification
// =============================================================================

/// Class or id naming a comment section.
pub static COMMENT_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bcomments?\b").expect("COMMENT_CLASS regex"));

/// A single `property: value` declaration inside an inline `style` attribute.
pub static STYLE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*([a-z-]+)\s*:\s*([^;]*)").expect("STYLE_DECLARATION regex")
});
