//! Performance benchmarks for rs-distiller.
//!
//! Run with: `cargo bench`
//!
//! Covers a small synthetic page, the integration fixture, the alternative
//! profiles, and synthetic pages of growing size for throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_distiller::filters::Filter;
use rs_distiller::{extract, extract_with_options, Extractor, Options};
use std::fs;

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Tide tables revised for spring - Coastal Times</title>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <figure><img src="/tide.jpg" width="800" height="450" alt="Low tide"></figure>
        <h1>Tide tables revised for spring</h1>
        <p class="byline">By Sam Okafor</p>
        <p>The harbour office has published revised tide tables for the spring months after a
        survey found the old predictions were running almost twenty minutes early.</p>
        <p>Skippers are asked to download the new tables before planning any trips around the
        headland, where the channel is shallow at low water.</p>
        <p>Printed copies will be available from the harbour office and the chandlery on the
        quay from the start of next week.</p>
    </article>
    <aside>
        <h3>Related</h3>
        <ul>
            <li><a href="/a">Harbour dues rise</a></li>
            <li><a href="/b">New pontoon opens</a></li>
        </ul>
    </aside>
    <footer>
        <p><a href="/privacy">Privacy</a></p>
    </footer>
</body>
</html>
"#;

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_with_options(c: &mut Criterion) {
    let options = Options {
        find_lead_image: false,
        retain_nested_elements: false,
        ..Options::default()
    };

    c.bench_function("extract_with_options", |b| {
        b.iter(|| extract_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

fn bench_profiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("profiles");
    for profile in [
        Extractor::Article,
        Extractor::KeepEverything,
        Extractor::KeepEverythingWithMinWords(10),
    ] {
        let options = Options {
            profile,
            ..Options::default()
        };
        let id = format!("{profile:?}");
        group.bench_function(id, |b| {
            b.iter(|| extract_with_options(black_box(SAMPLE_HTML), black_box(&options)));
        });
    }
    group.finish();
}

/// The integration fixture, when the crate sources are available.
fn bench_fixture(c: &mut Criterion) {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/integration/fixtures/news_article.html");
    if let Ok(html) = fs::read_to_string(path) {
        let mut group = c.benchmark_group("fixture");
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_function("news_article", |b| {
            b.iter(|| extract(black_box(&html)));
        });
        group.finish();
    }
}

fn synthetic_page(paragraphs: usize) -> String {
    let mut html = String::from("<html><head><title>Synthetic</title></head><body><nav>");
    for i in 0..20 {
        html.push_str(&format!("<a href=\"/s{i}\">Section {i}</a> "));
    }
    html.push_str("</nav><div class=\"story\">");
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<p>Paragraph {i} describes the work on the sea defences in some detail, \
             listing the contractors, the cost so far and the expected finish date.</p>"
        ));
        if i % 10 == 0 {
            html.push_str(&format!("<h2>Part {i}</h2>"));
        }
    }
    html.push_str("</div><div id=\"comments\">");
    for i in 0..paragraphs / 4 {
        html.push_str(&format!("<p>Comment {i}: great article, thanks for sharing.</p>"));
    }
    html.push_str("</div></body></html>");
    html
}

fn bench_page_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_size");
    for paragraphs in [10, 100, 1000] {
        let html = synthetic_page(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &html, |b, html| {
            b.iter(|| extract(black_box(html)));
        });
    }
    group.finish();
}

/// The article pipeline alone, over the text document of a large page.
fn bench_pipeline_only(c: &mut Criterion) {
    let html = synthetic_page(500);
    let Ok(conversion) = rs_distiller::converter::DomConverter::new(None, 512).convert_html(&html)
    else {
        return;
    };
    let web = conversion.document;
    let dom = conversion.dom;

    c.bench_function("article_pipeline", |b| {
        b.iter(|| {
            let mut doc = web.create_text_document_view(&dom);
            let filters = Extractor::Article.pipeline();
            for filter in &filters {
                filter.process(black_box(&mut doc));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_extract_with_options,
    bench_profiles,
    bench_fixture,
    bench_page_sizes,
    bench_pipeline_only
);
criterion_main!(benches);
