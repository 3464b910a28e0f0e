//! Labels blocks that repeat the page title.

use std::collections::HashSet;

use regex::Regex;

use crate::document::TextDocument;
use crate::labels::Label;
use crate::patterns::{
    TITLE_DASH_SEGMENTS, TITLE_LEADING_SITE, TITLE_LONGEST_PART_SPLITS, TITLE_PIPE_SEGMENTS,
    TITLE_REMOVE_CHARACTERS, TITLE_TRAILING_SITE,
};
use crate::words::count_words;

use super::Filter;

/// Segments shorter than this are not kept as title variants on their own.
const MIN_SEGMENT_WORDS: usize = 4;

/// Marks blocks whose normalized text equals one of the candidate titles, or
/// a variant derived from them (site name stripped, longest segment, ...),
/// with [`Label::Title`].
///
/// Does nothing when the document carries no candidate titles.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTitleMatchClassifier;

impl DocumentTitleMatchClassifier {
    /// Every normalized title variant derived from `titles`.
    #[must_use]
    pub fn potential_titles(titles: &[String]) -> HashSet<String> {
        let mut potential = HashSet::new();
        for title in titles {
            add_title_variants(&mut potential, title);
        }
        potential
    }
}

impl Filter for DocumentTitleMatchClassifier {
    fn name(&self) -> &'static str {
        "DocumentTitleMatchClassifier"
    }

    fn process(&self, doc: &mut TextDocument<'_>) -> bool {
        let Some(titles) = doc.candidate_titles() else {
            return false;
        };
        let potential = Self::potential_titles(titles);
        let mut changes = false;

        for block in doc.blocks_mut() {
            let text = normalize(block.text());
            if potential.contains(&text) {
                block.add_label(Label::Title);
                changes = true;
            }

            let stripped = TITLE_REMOVE_CHARACTERS.replace_all(&text, "");
            if potential.contains(stripped.trim()) {
                block.add_label(Label::Title);
                changes = true;
            }
        }
        changes
    }
}

fn normalize(text: &str) -> String {
    text.replace('\u{a0}', " ")
        .replace('\'', "")
        .trim()
        .to_lowercase()
}

fn add_title_variants(potential: &mut HashSet<String>, title: &str) {
    let title = normalize(title);
    if title.is_empty() || !potential.insert(title.clone()) {
        return;
    }

    for pattern in TITLE_LONGEST_PART_SPLITS.iter() {
        if let Some(part) = longest_part(&title, pattern) {
            potential.insert(part);
        }
    }

    add_segments(potential, &title, &TITLE_PIPE_SEGMENTS);
    add_segments(potential, &title, &TITLE_DASH_SEGMENTS);

    potential.insert(TITLE_TRAILING_SITE.replace(&title, "").into_owned());
    potential.insert(TITLE_LEADING_SITE.replace(&title, "").into_owned());
}

/// Splits like `String.split` in most languages: trailing empty parts are dropped.
fn split_parts<'t>(title: &'t str, pattern: &Regex) -> Vec<&'t str> {
    let mut parts: Vec<&str> = pattern.split(title).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

/// The part with the most words (or, failing that, the most characters).
fn longest_part(title: &str, pattern: &Regex) -> Option<String> {
    let parts = split_parts(title, pattern);
    if parts.len() == 1 {
        return None;
    }

    let mut longest_words = 0;
    let mut longest = "";
    for part in parts {
        if part.contains(".com") {
            continue;
        }
        let words = count_words(part);
        if words > longest_words || part.chars().count() > longest.chars().count() {
            longest_words = words;
            longest = part;
        }
    }

    if longest.is_empty() {
        None
    } else {
        Some(longest.trim().to_string())
    }
}

fn add_segments(potential: &mut HashSet<String>, title: &str, pattern: &Regex) {
    let parts = split_parts(title, pattern);
    if parts.len() == 1 {
        return;
    }
    for part in parts {
        if !part.contains(".com") && count_words(part) >= MIN_SEGMENT_WORDS {
            potential.insert(part.to_string());
        }
    }
}
