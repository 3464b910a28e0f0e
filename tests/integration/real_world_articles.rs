//! Realistic article pages
//!
//! Each page mixes the main story with the furniture news sites wrap around
//! it: navigation, sharing widgets, comment threads, link lists and footers.

use rs_distiller::{extract, extract_bytes, ExtractResult};

use super::fixture;

fn news_article() -> ExtractResult {
    match extract(&fixture("news_article.html")) {
        Ok(result) => result,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_news_article_keeps_the_story() {
    let result = news_article();

    assert!(result
        .content_text
        .starts_with("Harbour wall repairs begin after winter storms\n"));
    assert!(result.content_text.contains("By Ana Ferreira"));
    assert!(result.content_text.contains("Contractors arrived at the harbour on Monday"));
    assert!(result.content_text.contains("Funding\nMost of the money for the repairs"));
    assert!(result.content_text.contains("while the cranes are working."));
}

#[test]
fn test_news_article_drops_the_furniture() {
    let content = news_article().content_text;

    for boilerplate in [
        "Coastal Times",
        "Weather",
        "Share on social media",
        "Comments",
        "About time too",
        "Most read",
        "Ferry timetable",
        "Privacy",
        "adSlots",
    ] {
        assert!(!content.contains(boilerplate), "{boilerplate:?} leaked into:\n{content}");
    }
}

#[test]
fn test_news_article_metadata() {
    let result = news_article();

    assert_eq!(
        result.title.as_deref(),
        Some("Harbour wall repairs begin after winter storms - Coastal Times")
    );
    assert_eq!(result.word_count, rs_distiller::words::count_words(&result.content_text));
    assert!(result.block_count >= 2);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_news_article_hero_is_the_lead_image() {
    let result = news_article();

    match result.lead_image {
        Some(lead) => {
            assert_eq!(lead.src, "/images/harbour-wall.jpg");
            assert_eq!((lead.width, lead.height), (960, 600));
            assert_eq!(lead.alt.as_deref(), Some("Workers on the harbour wall"));
            assert_eq!(lead.caption.as_deref(), Some("Work started on Monday morning"));
            assert!(lead.is_lead);
        }
        None => panic!("expected a lead image"),
    }
    assert_eq!(result.images.iter().filter(|i| i.is_lead).count(), 1);
}

#[test]
fn test_blog_post_with_list_keeps_list_items() {
    let html = r#"<html><head><title>Five things to pack for a wet walk</title></head><body>
        <div class="post">
          <h1>Five things to pack for a wet walk</h1>
          <p>Rain is never far away on the hills, so it pays to plan ahead before you leave the car park
             and to check the forecast again the night before you set out on a long route.</p>
          <ul>
            <li>A waterproof jacket with a hood that actually fits over a hat and still lets you see.</li>
            <li>Spare socks in a sealed bag so your feet stay warm when the path turns to a stream.</li>
            <li>A flask of something hot to drink when you stop for lunch on an exposed ridge.</li>
          </ul>
          <p>Whatever you take, keep the heavy items close to your back and the snacks somewhere you
             can reach them without taking the rucksack off in the middle of a downpour.</p>
        </div>
        <div class="related"><a href="/a">Best boots</a> <a href="/b">Map reading</a></div>
        </body></html>"#;

    match extract(html) {
        Ok(result) => {
            assert!(result.content_text.contains("Rain is never far away"));
            assert!(result.content_text.contains("Spare socks in a sealed bag"));
            assert!(result.content_text.contains("keep the heavy items close"));
            assert!(!result.content_text.contains("Best boots"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn test_latin1_article_bytes() {
    let mut bytes = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=iso-8859-1\">\
        </head><body><p>La r".to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(
        b"gion a connu des pluies abondantes pendant tout le mois et les rivi",
    );
    bytes.push(0xE8);
    bytes.extend_from_slice(b"res sont sorties de leur lit dans plusieurs villages.</p></body></html>");

    match extract_bytes(&bytes) {
        Ok(result) => {
            assert!(result.content_text.contains("La région a connu"));
            assert!(result.content_text.contains("les rivières sont sorties"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
