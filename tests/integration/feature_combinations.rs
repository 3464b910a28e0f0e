//! Option combinations
//!
//! The same fixture run through different profiles and post-pass toggles.

use rs_distiller::{extract, extract_with_options, ExtractResult, Extractor, Options};

use super::fixture;

fn run(options: &Options) -> ExtractResult {
    match extract_with_options(&fixture("news_article.html"), options) {
        Ok(result) => result,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_default_options_match_extract() {
    let via_options = run(&Options::default());
    match extract(&fixture("news_article.html")) {
        Ok(direct) => {
            assert_eq!(direct.content_text, via_options.content_text);
            assert_eq!(direct.images, via_options.images);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_lead_image_disabled() {
    let result = run(&Options {
        find_lead_image: false,
        ..Options::default()
    });

    assert!(result.lead_image.is_none());
    assert!(result.images.iter().all(|i| !i.is_lead));
    assert!(result.content_text.contains("Contractors arrived"));
}

#[test]
fn test_base_url_resolves_lead_image() {
    let result = run(&Options {
        base_url: Some("https://coastal.example/news/2024/harbour".to_string()),
        ..Options::default()
    });

    let src = result.lead_image.map(|i| i.src);
    assert_eq!(src.as_deref(), Some("https://coastal.example/images/harbour-wall.jpg"));
}

#[test]
fn test_caller_titles_replace_the_title_element() {
    let result = run(&Options {
        candidate_titles: vec!["Harbour wall repairs begin after winter storms".to_string()],
        ..Options::default()
    });

    assert_eq!(
        result.title.as_deref(),
        Some("Harbour wall repairs begin after winter storms")
    );
    assert!(result
        .content_text
        .starts_with("Harbour wall repairs begin after winter storms\n"));
}

#[test]
fn test_nested_retainer_does_not_change_text() {
    let with = run(&Options::default());
    let without = run(&Options {
        retain_nested_elements: false,
        ..Options::default()
    });

    assert_eq!(with.content_text, without.content_text);
    assert_eq!(with.word_count, without.word_count);
}

#[test]
fn test_keep_everything_keeps_the_furniture() {
    let result = run(&Options {
        profile: Extractor::KeepEverything,
        ..Options::default()
    });

    for text in ["Coastal Times", "Contractors arrived", "About time too", "Most read", "Privacy"] {
        assert!(result.content_text.contains(text), "missing {text:?}");
    }
    assert!(result.images.iter().any(|i| i.src == "/images/harbour-wall.jpg"));
}

#[test]
fn test_min_words_profile_keeps_long_blocks_only() {
    let result = run(&Options {
        profile: Extractor::KeepEverythingWithMinWords(10),
        ..Options::default()
    });

    assert!(result.content_text.contains("Contractors arrived"));
    assert!(result.content_text.contains("About time too"));
    assert!(!result.content_text.contains("Harbour wall repairs begin after winter storms"));
    assert!(!result.content_text.contains("Ferry timetable"));
}

#[test]
fn test_shallow_depth_limit_keeps_nothing_but_warns() {
    let result = run(&Options {
        max_tree_depth: 2,
        ..Options::default()
    });

    assert!(result.is_empty());
    assert_eq!(result.warnings.len(), 1);
    assert!(result.title.is_some());
}
