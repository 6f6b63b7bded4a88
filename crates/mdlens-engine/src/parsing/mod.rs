//! First pass: turns raw markdown text into a flat, typed element sequence.
//!
//! The parser walks the document line by line with a small amount of block
//! state (a list-nesting stack and the indent recorded when the current list
//! began). Inline spans are delegated to [`scan_inline`]. The parser is
//! total: malformed input degrades to plain paragraphs, it never fails.

pub mod inline;
mod line;
mod list;

pub use inline::scan_inline;
pub use list::{INDENT_UNIT, ListContext, ListStack};

use crate::models::{Element, ElementKind, ListAttrs, ListGroupId};

/// Parses a whole document into the flat element sequence.
///
/// Blank or whitespace-only input yields an empty sequence. Blank lines
/// reset the list stack and emit the empty-text paragraph sentinel; plain
/// lines followed by another non-blank line emit the `"\n"` continuation
/// sentinel.
pub fn parse(content: &str) -> Vec<Element> {
    if content.trim().is_empty() {
        return vec![];
    }

    let lines: Vec<&str> = content.lines().collect();
    let mut out = Vec::new();
    let mut stack = ListStack::new();
    let mut root_indent = 0;

    let mut i = 0;
    while i < lines.len() {
        let raw = lines[i];
        let indent = line::indent_width(raw);
        let trimmed = raw.trim_end();
        if stack.is_empty() {
            root_indent = 0;
        }

        if trimmed.trim().is_empty() {
            stack.clear();
            out.push(Element::new(ElementKind::Paragraph, ""));
            i += 1;
            continue;
        }

        if let Some((level, text)) = line::heading(trimmed) {
            out.push(Element::new(ElementKind::Heading { level }, text));
            i += 1;
            continue;
        }

        if line::is_table_row(trimmed) {
            let mut end = i;
            while end < lines.len() && line::is_table_row(lines[end]) {
                end += 1;
            }
            for row in &lines[i..end] {
                let cells = line::split_cells(row);
                if line::is_divider_row(&cells) {
                    continue;
                }
                out.push(Element::new(ElementKind::Table { cells }, *row));
            }
            i = end;
            continue;
        }

        if let Some(item) = line::detect_list_item(raw) {
            if stack.is_empty() {
                root_indent = indent;
            }
            let depth = indent.saturating_sub(root_indent) / INDENT_UNIT;
            let level = stack.enter(depth, item.ordered);
            let attrs = ListAttrs {
                ordered: item.ordered,
                marker: stack.marker(item.ordered, level),
                level,
                group: ListGroupId::new(),
            };
            push_list_fragments(&mut out, &item.body, attrs);
            i += 1;
            continue;
        }

        stack.clear();
        out.extend(scan_inline(trimmed));
        if i + 1 < lines.len() && !lines[i + 1].trim().is_empty() {
            out.push(Element::new(ElementKind::Paragraph, "\n"));
        }
        i += 1;
    }
    out
}

/// Emits the fragments of one list item, all tagged with the same group.
///
/// The first scanned fragment is re-tagged as the `ListItem` head; the rest
/// keep their own kind so inline styling and images inside the item survive.
/// A body the scanner has nothing for (blank) becomes a bare head.
fn push_list_fragments(out: &mut Vec<Element>, body: &str, attrs: ListAttrs) {
    let mut fragments = scan_inline(body);
    if fragments.is_empty() {
        out.push(Element::new(ElementKind::ListItem, body).with_list(attrs));
        return;
    }
    for (n, frag) in fragments.iter_mut().enumerate() {
        if n == 0 {
            frag.kind = ElementKind::ListItem;
        }
        frag.list = Some(attrs.clone());
    }
    out.extend(fragments);
}
