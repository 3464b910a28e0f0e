//! Display and visibility of elements without a layout engine.
//!
//! The converter only sees markup, so the `display` of an element comes from
//! its inline `style` if present, else from the HTML user-agent default for
//! its tag.

use dom_query::NodeRef;

use crate::patterns::STYLE_DECLARATION;

/// User-agent default `display` of an HTML tag.
#[must_use]
pub fn default_display(tag: &str) -> &'static str {
    match tag {
        "address" | "article" | "aside" | "blockquote" | "body" | "center" | "dd" | "details"
        | "dialog" | "dir" | "div" | "dl" | "dt" | "fieldset" | "figcaption" | "figure"
        | "footer" | "form" | "frameset" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "header"
        | "hgroup" | "hr" | "html" | "legend" | "listing" | "main" | "menu" | "nav" | "ol"
        | "optgroup" | "p" | "plaintext" | "pre" | "search" | "section" | "summary" | "ul"
        | "xmp" => "block",
        "li" => "list-item",
        "table" => "table",
        "caption" => "table-caption",
        "colgroup" => "table-column-group",
        "col" => "table-column",
        "thead" => "table-header-group",
        "tbody" => "table-row-group",
        "tfoot" => "table-footer-group",
        "tr" => "table-row",
        "td" | "th" => "table-cell",
        "button" | "input" | "select" | "textarea" | "meter" | "progress" => "inline-block",
        "area" | "base" | "basefont" | "datalist" | "head" | "link" | "meta" | "noembed"
        | "noframes" | "param" | "rp" | "script" | "style" | "template" | "title" => "none",
        _ => "inline",
    }
}

/// The declarations of an inline `style` attribute the converter cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub display: Option<String>,
    pub visibility: Option<String>,
    pub opacity: Option<String>,
    pub float: Option<String>,
}

impl InlineStyle {
    /// Parses `style`; later declarations override earlier ones and
    /// `!important` is ignored.
    #[must_use]
    pub fn parse(style: &str) -> Self {
        let mut parsed = Self::default();
        for caps in STYLE_DECLARATION.captures_iter(style) {
            let value = caps[2]
                .trim()
                .trim_end_matches("!important")
                .trim()
                .to_ascii_lowercase();
            let slot = match caps[1].to_ascii_lowercase().as_str() {
                "display" => &mut parsed.display,
                "visibility" => &mut parsed.visibility,
                "opacity" => &mut parsed.opacity,
                "float" => &mut parsed.float,
                _ => continue,
            };
            *slot = Some(value);
        }
        parsed
    }

    /// Effective `display` of a `tag` carrying this style.
    #[must_use]
    pub fn display_for<'a>(&'a self, tag: &str) -> &'a str {
        self.display.as_deref().unwrap_or_else(|| default_display(tag))
    }

    /// True for any `float` other than `none`.
    #[must_use]
    pub fn is_floated(&self) -> bool {
        self.float.as_deref().is_some_and(|f| f != "none")
    }

    fn hides(&self) -> bool {
        self.display.as_deref() == Some("none")
            || matches!(self.visibility.as_deref(), Some("hidden" | "collapse"))
            || self
                .opacity
                .as_deref()
                .and_then(|o| o.parse::<f32>().ok())
                .is_some_and(|o| o <= 0.0)
    }
}

/// True when `node` (a `tag` element styled `style`) and its subtree are not rendered.
#[must_use]
pub fn is_hidden(node: &NodeRef, tag: &str, style: &InlineStyle) -> bool {
    if node.has_attr("hidden") || style.hides() {
        return true;
    }
    if node
        .attr("aria-hidden")
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    {
        return true;
    }
    if tag == "input"
        && node
            .attr("type")
            .is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
    {
        return true;
    }
    style.display.is_none() && default_display(tag) == "none"
}
