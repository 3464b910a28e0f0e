//! Edge case integration tests
//!
//! Unusual inputs, boundary conditions and error handling.

use rs_distiller::{extract, extract_bytes, extract_with_options, Error, Options};

/// A paragraph long enough to be classified as content on its own.
const LONG: &str = "The ferry company confirmed that the morning crossing would run as normal \
                    despite the strong winds forecast for the rest of the week along the coast.";

#[test]
fn test_extract_empty_input() {
    for html in ["", "   ", "<html></html>", "<html><body></body></html>"] {
        match extract(html) {
            Ok(result) => {
                assert!(result.is_empty(), "{html:?} produced {:?}", result.content_text);
                assert_eq!(result.word_count, 0);
                assert!(result.lead_image.is_none());
            }
            Err(err) => panic!("expected Ok(_) for {html:?}, got Err({err:?})"),
        }
    }
}

#[test]
fn test_extract_no_body() {
    let html = "<html><head><title>No Body</title></head></html>";

    match extract(html) {
        Ok(result) => {
            assert!(result.content_text.is_empty());
            assert_eq!(result.title.as_deref(), Some("No Body"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_extract_malformed_html() {
    let html = format!("<html><body><p>{LONG}<div>Nested<p>Badly</body>");

    match extract(&html) {
        Ok(result) => assert!(result.content_text.contains("The ferry company confirmed")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_extract_only_scripts_and_styles() {
    let html = "<html><head><style>p { color: red; }</style></head><body>\
                <script>document.write('hello world from a script');</script>\
                <noscript>Please enable JavaScript to read this page properly.</noscript>\
                <template><p>Template text</p></template></body></html>";

    match extract(html) {
        Ok(result) => assert!(result.is_empty()),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_extract_deeply_nested_html() {
    let mut html = String::from("<html><body>");
    for i in 0..50 {
        html.push_str(&format!("<div class='level-{i}'>"));
    }
    html.push_str(&format!("<p>{LONG}</p>"));
    html.push_str(&"</div>".repeat(50));
    html.push_str("</body></html>");

    match extract(&html) {
        Ok(result) => {
            assert!(result.content_text.contains("The ferry company"));
            assert!(result.warnings.is_empty());
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_tree_deeper_than_limit_is_cut_with_a_warning() {
    let html = format!(
        "<html><body><p>{LONG}</p>{}<p>Buried text that sits below the limit.</p>{}</body></html>",
        "<div>".repeat(40),
        "</div>".repeat(40)
    );
    let options = Options {
        max_tree_depth: 16,
        ..Options::default()
    };

    match extract_with_options(&html, &options) {
        Ok(result) => {
            assert!(result.content_text.contains("The ferry company"));
            assert!(!result.content_text.contains("Buried text"));
            assert_eq!(result.warnings.len(), 1);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_raised_depth_limit_handles_very_deep_pages() {
    let html = format!(
        "<html><body>{}{LONG}{}</body></html>",
        "<span>".repeat(1900),
        "</span>".repeat(1900)
    );
    let options = Options {
        max_tree_depth: 2000,
        ..Options::default()
    };

    match extract_with_options(&html, &options) {
        Ok(result) => {
            assert!(result.content_text.contains("The ferry company confirmed"));
            assert_eq!(result.word_count, 26);
            assert!(result.warnings.is_empty());
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_extract_very_large_document() {
    let paragraphs: String = (0..2000)
        .map(|i| format!("<p>Paragraph {i}: {LONG}</p>\n"))
        .collect();
    let html = format!("<html><body><article>{paragraphs}</article></body></html>");

    match extract(&html) {
        Ok(result) => {
            assert!(result.content_text.contains("Paragraph 0:"));
            assert!(result.content_text.contains("Paragraph 1999:"));
            assert!(result.word_count > 2000 * 20);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_html_entities_are_decoded() {
    let html = "<html><body><p>Fish &amp; chips cost &pound;9 at the harbour kiosk, which opens \
                at noon &lt;every&gt; day from April until the end of the summer season.</p>\
                </body></html>";

    match extract(html) {
        Ok(result) => {
            assert!(result.content_text.contains("Fish & chips cost £9"));
            assert!(result.content_text.contains("<every>"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_non_latin_text() {
    let html = "<html><body><p>Паромная компания подтвердила что утренний рейс пройдёт как обычно \
                несмотря на сильный ветер который синоптики обещают на всю оставшуюся неделю \
                вдоль побережья.</p></body></html>";

    match extract(html) {
        Ok(result) => {
            assert!(result.content_text.starts_with("Паромная компания"));
            assert_eq!(result.word_count, 22);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_bytes_with_utf8_bom() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(format!("<html><body><p>{LONG}</p></body></html>").as_bytes());

    match extract_bytes(&bytes) {
        Ok(result) => assert!(result.content_text.starts_with("The ferry company")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_zero_depth_is_rejected() {
    let options = Options {
        max_tree_depth: 0,
        ..Options::default()
    };

    assert!(matches!(
        extract_with_options("<p>text</p>", &options),
        Err(Error::InvalidOptions(_))
    ));
}
