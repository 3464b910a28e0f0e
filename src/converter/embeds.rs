//! Images, figures and third-party embeds recognised before generic handling.

use std::collections::BTreeMap;

use dom_query::NodeRef;
use url::Url;

use crate::dom::{self, NodeHandle, NodeTable};
use crate::webdocument::{EmbedKind, WebElement, WebEmbed, WebFigure, WebImage};

/// Attributes lazy loaders keep the real image URL in, checked in order.
const LAZY_IMAGE_ATTRIBUTES: [&str; 4] = ["data-src", "data-original", "datasrc", "data-url"];

/// Tags the extractors below look at; anything else skips them entirely.
pub const EMBED_TAGS: [&str; 6] = ["img", "picture", "figure", "span", "iframe", "blockquote"];

/// Context shared by the extractors: where to mirror nested nodes and how
/// to resolve relative image sources.
pub struct EmbedContext<'a> {
    pub table: &'a mut NodeTable,
    pub base_url: Option<&'a Url>,
}

/// Tries every extractor on `node` (already mirrored as `handle`).
pub fn extract(
    node: &NodeRef,
    tag: &str,
    handle: NodeHandle,
    cx: &mut EmbedContext<'_>,
) -> Option<WebElement> {
    if !EMBED_TAGS.contains(&tag) {
        return None;
    }
    match tag {
        "img" | "picture" => image(node, handle, cx).map(WebElement::Image),
        "figure" => figure(node, handle, cx),
        "span" => lazy_placeholder(node, handle, cx).map(WebElement::Image),
        "iframe" => youtube(node, handle).or_else(|| vimeo(node, handle)),
        "blockquote" => tweet(node, handle),
        _ => None,
    }
}

fn image(node: &NodeRef, handle: NodeHandle, cx: &EmbedContext<'_>) -> Option<WebImage> {
    let img = first_element_inclusive(node, "img")?;
    Some(image_from_attributes(&img, handle, cx.base_url))
}

fn image_from_attributes(img: &NodeRef, handle: NodeHandle, base_url: Option<&Url>) -> WebImage {
    let lazy = LAZY_IMAGE_ATTRIBUTES
        .iter()
        .find_map(|a| dom::attr(img, a).filter(|v| !v.is_empty()));
    let (src, width, height) = match lazy {
        Some(src) => (src, 0, 0),
        None => (
            dom::attr(img, "src").unwrap_or_default(),
            dimension(img, "width"),
            dimension(img, "height"),
        ),
    };
    let mut image = WebImage::new(handle, resolve_src(&src, base_url), width, height);
    image.alt = dom::attr(img, "alt").filter(|a| !a.trim().is_empty());
    image
}

fn figure(node: &NodeRef, handle: NodeHandle, cx: &mut EmbedContext<'_>) -> Option<WebElement> {
    let holder = first_element(node, "picture").or_else(|| first_element(node, "img"))?;
    let img = first_element_inclusive(&holder, "img")?;
    let image_handle = mirror_path(cx.table, node, handle, &holder);
    let image = image_from_attributes(&img, image_handle, cx.base_url);

    let caption_text = match first_element(node, "figcaption") {
        Some(caption) => caption.text(),
        None => node.text(),
    };
    let caption = Some(collapse_whitespace(&caption_text)).filter(|c| !c.is_empty());
    Some(WebElement::Figure(WebFigure { image, caption }))
}

fn lazy_placeholder(node: &NodeRef, handle: NodeHandle, cx: &EmbedContext<'_>) -> Option<WebImage> {
    if !dom::attr(node, "class").is_some_and(|c| c.contains("lazy-image-placeholder")) {
        return None;
    }
    let src = dom::attr(node, "data-src").unwrap_or_default();
    Some(WebImage::new(
        handle,
        resolve_src(&src, cx.base_url),
        dimension(node, "data-width"),
        dimension(node, "data-height"),
    ))
}

fn youtube(node: &NodeRef, handle: NodeHandle) -> Option<WebElement> {
    let url = embed_url(node, "src", "youtube.com")?;
    let id = last_path_segment(&url, Some("embed"))?;
    let mut params = query_params(&url);
    params.insert("videoid".to_string(), id.clone());
    log::trace!("youtube embed {id}");
    Some(embed(handle, EmbedKind::YouTube, id, params))
}

fn vimeo(node: &NodeRef, handle: NodeHandle) -> Option<WebElement> {
    let url = embed_url(node, "src", "player.vimeo.com")?;
    let id = last_path_segment(&url, Some("video"))?;
    log::trace!("vimeo embed {id}");
    Some(embed(handle, EmbedKind::Vimeo, id, query_params(&url)))
}

fn tweet(node: &NodeRef, handle: NodeHandle) -> Option<WebElement> {
    if !dom::attr(node, "class").is_some_and(|c| c.contains("twitter-tweet")) {
        return None;
    }
    let anchor = descendants(node)
        .into_iter()
        .filter(|d| dom::tag_name(d).as_deref() == Some("a"))
        .last()?;
    let url = embed_url(&anchor, "href", "twitter.com")?;
    let id = last_path_segment(&url, None)?;
    let mut params = BTreeMap::new();
    params.insert("tweetid".to_string(), id.clone());
    log::trace!("twitter embed {id}");
    Some(embed(handle, EmbedKind::Twitter, id, params))
}

fn embed(node: NodeHandle, kind: EmbedKind, id: String, params: BTreeMap<String, String>) -> WebElement {
    WebElement::Embed(WebEmbed {
        node,
        kind,
        id,
        params,
        is_content: false,
    })
}

/// Parses the `attribute` URL of `node` if its host is `root_domain` or a
/// subdomain of it. Scheme-relative URLs are read as https.
fn embed_url(node: &NodeRef, attribute: &str, root_domain: &str) -> Option<Url> {
    let raw = dom::attr(node, attribute)?;
    let raw = raw.trim();
    let url = if raw.starts_with("//") {
        Url::parse(&format!("https:{raw}")).ok()?
    } else {
        Url::parse(raw).ok()?
    };
    let host = url.host_str()?;
    let matches = host == root_domain
        || host
            .strip_suffix(root_domain)
            .is_some_and(|prefix| prefix.ends_with('.'));
    matches.then_some(url)
}

/// Last non-empty path segment, `None` if `stop` is reached first.
fn last_path_segment(url: &Url, stop: Option<&str>) -> Option<String> {
    for segment in url.path().split('/').rev() {
        if Some(segment) == stop {
            return None;
        }
        if !segment.is_empty() {
            return Some(segment.to_string());
        }
    }
    None
}

fn query_params(url: &Url) -> BTreeMap<String, String> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Resolves a relative `src` against the page URL.
pub(crate) fn resolve_src(src: &str, base_url: Option<&Url>) -> String {
    let src = src.trim();
    if src.is_empty() || src.starts_with("data:") || src.starts_with('#') {
        return src.to_string();
    }
    if src.starts_with("//") {
        return format!("https:{src}");
    }
    match base_url {
        Some(base) => base.join(src).map_or_else(|_| src.to_string(), String::from),
        None => src.to_string(),
    }
}

/// Pixel dimension from an attribute like `640` or `640px`; 0 when absent.
fn dimension(node: &NodeRef, attribute: &str) -> u32 {
    dom::attr(node, attribute)
        .and_then(|v| {
            let digits: String = v.trim().chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        })
        .unwrap_or(0)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Element descendants of `node` in document order.
pub(crate) fn descendants<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeRef<'a>> = node.children().into_iter().rev().collect();
    while let Some(current) = stack.pop() {
        if current.is_element() {
            stack.extend(current.children().into_iter().rev());
            out.push(current);
        }
    }
    out
}

fn first_element<'a>(node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    descendants(node)
        .into_iter()
        .find(|d| dom::tag_name(d).as_deref() == Some(tag))
}

fn first_element_inclusive<'a>(node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    if dom::tag_name(node).as_deref() == Some(tag) {
        return Some(node.clone());
    }
    first_element(node, tag)
}

/// Mirrors the elements from `ancestor` (already mirrored as `ancestor_handle`)
/// down to `target` and returns the handle of `target`.
fn mirror_path(
    table: &mut NodeTable,
    ancestor: &NodeRef,
    ancestor_handle: NodeHandle,
    target: &NodeRef,
) -> NodeHandle {
    let mut chain = vec![target.clone()];
    let mut current = target.parent();
    while let Some(parent) = current {
        if parent.id == ancestor.id {
            break;
        }
        current = parent.parent();
        chain.push(parent);
    }
    chain.iter().rev().fold(ancestor_handle, |parent, element| {
        table.push_element(parent, &dom::tag_name(element).unwrap_or_default())
    })
}
