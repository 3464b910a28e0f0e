//! Data table versus layout table, from markup alone.
//!
//! Rules are tried in order and the first one that applies decides. The
//! style and rendered-width rules of browser heuristics need a layout
//! engine and are not applied.

use dom_query::NodeRef;

use crate::dom;

use super::embeds::descendants;

/// Outcome of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableType {
    Data,
    Layout,
}

const LANDMARK_ROLES: [&str; 8] = [
    "application",
    "banner",
    "complementary",
    "contentinfo",
    "form",
    "main",
    "navigation",
    "search",
];

const DATA_CELL_ROLES: [&str; 5] = ["gridcell", "columnheader", "row", "rowgroup", "rowheader"];

/// Classifies a `<table>` element.
#[must_use]
pub fn classify(table: &NodeRef) -> TableType {
    let (kind, reason) = classify_with_reason(table);
    log::trace!("table classified {kind:?}: {reason}");
    kind
}

fn classify_with_reason(table: &NodeRef) -> (TableType, &'static str) {
    use TableType::{Data, Layout};

    if in_editable_area(table) {
        return (Layout, "inside editable area");
    }

    let role = dom::attr(table, "role")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if role == "presentation" {
        return (Layout, "role=presentation");
    }
    if role == "grid" || role == "treegrid" || LANDMARK_ROLES.contains(&role.as_str()) {
        return (Data, "table role");
    }

    let own = direct_descendants(table);
    let has_data_role = own.iter().any(|d| {
        dom::attr(d, "role").is_some_and(|r| {
            let r = r.to_ascii_lowercase();
            DATA_CELL_ROLES.contains(&r.as_str()) || LANDMARK_ROLES.contains(&r.as_str())
        })
    });
    if has_data_role {
        return (Data, "cell role");
    }

    if dom::attr(table, "datatable").as_deref() == Some("0") {
        return (Layout, "datatable=0");
    }
    if own.iter().any(|d| is_tag(d, "table")) {
        return (Layout, "nested table");
    }

    let rows: Vec<&NodeRef> = own.iter().filter(|d| is_tag(d, "tr")).collect();
    if rows.len() <= 1 {
        return (Layout, "single row");
    }
    let cols = rows
        .iter()
        .map(|row| {
            row.children()
                .iter()
                .filter(|c| is_tag(c, "td") || is_tag(c, "th"))
                .count()
        })
        .max()
        .unwrap_or(0);
    if cols <= 1 {
        return (Layout, "single column");
    }

    let has_caption = own
        .iter()
        .any(|d| is_tag(d, "caption") && !d.text().trim().is_empty());
    if has_caption || own.iter().any(|d| is_tag(d, "thead") || is_tag(d, "tfoot")) {
        return (Data, "caption, thead or tfoot");
    }
    let header = own
        .iter()
        .find(|d| is_tag(d, "colgroup") || is_tag(d, "col") || is_tag(d, "th"));
    if let Some(header) = header {
        if !is_tag(header, "th") || !header.text().trim().is_empty() {
            return (Data, "column headers");
        }
    }

    let cells: Vec<&NodeRef> = own.iter().filter(|d| is_tag(d, "td")).collect();
    let marked_cell = cells.iter().any(|td| {
        td.has_attr("abbr") || td.has_attr("headers") || td.has_attr("scope") || {
            let inner = descendants(td);
            inner.len() == 1 && is_tag(&inner[0], "abbr")
        }
    });
    if marked_cell {
        return (Data, "cell abbreviations");
    }

    if table.has_attr("summary") {
        return (Data, "summary attribute");
    }
    if cols >= 5 {
        return (Data, "five or more columns");
    }
    if rows.len() >= 20 {
        return (Data, "twenty or more rows");
    }
    if cells.len() <= 10 {
        return (Layout, "ten or fewer cells");
    }

    let embeds = descendants(table).iter().any(|d| {
        matches!(
            dom::tag_name(d).as_deref(),
            Some("embed" | "object" | "applet" | "iframe")
        )
    });
    if embeds {
        return (Layout, "embedded content");
    }

    (Data, "default")
}

fn is_tag(node: &NodeRef, tag: &str) -> bool {
    dom::tag_name(node).as_deref() == Some(tag)
}

fn in_editable_area(table: &NodeRef) -> bool {
    let mut current = table.parent();
    while let Some(node) = current {
        if node.is_element()
            && (is_tag(&node, "input")
                || dom::attr(&node, "contenteditable")
                    .is_some_and(|v| v.eq_ignore_ascii_case("true")))
        {
            return true;
        }
        current = node.parent();
    }
    false
}

/// Element descendants whose nearest enclosing table is `table`. Nested
/// tables are included but not entered.
fn direct_descendants<'a>(table: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeRef<'a>> = table.children().into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        if !node.is_element() {
            continue;
        }
        if !is_tag(&node, "table") {
            stack.extend(node.children().into_iter().rev());
        }
        out.push(node);
    }
    out
}
