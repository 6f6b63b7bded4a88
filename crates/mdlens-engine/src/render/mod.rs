//! Second pass: folds the flat element sequence into display-ready items.
//!
//! A forward walk with a paragraph accumulator. Grouped constructs are
//! folded greedily: contiguous table elements become one table, fragments
//! sharing a list group id become one list item. Heading texts, table cells
//! and list bodies go back through the inline scanner, which is pure and
//! safe to call on substrings.

use crate::models::{Cell, Element, ElementKind, InlineStyle, RenderItem, StyledText};
use crate::parsing::{parse, scan_inline};

/// Parses `content` and assembles the result into render items.
pub fn render(content: &str) -> Vec<RenderItem> {
    assemble(&parse(content))
}

/// Folds a flat element sequence into grouped render items.
pub fn assemble(elements: &[Element]) -> Vec<RenderItem> {
    let mut out = Vec::new();
    let mut paragraph = StyledText::default();

    let mut idx = 0;
    while idx < elements.len() {
        let e = &elements[idx];
        match &e.kind {
            ElementKind::Image { src } => {
                flush_paragraph(&mut paragraph, &mut out);
                out.push(image_item(src, &e.text));
                idx += 1;
            }
            ElementKind::Heading { level } => {
                flush_paragraph(&mut paragraph, &mut out);
                push_header(&e.text, *level, &mut out);
                idx += 1;
            }
            ElementKind::Table { .. } => {
                flush_paragraph(&mut paragraph, &mut out);
                idx = consume_table(elements, idx, &mut out);
            }
            ElementKind::ListItem => {
                flush_paragraph(&mut paragraph, &mut out);
                idx = consume_list_item(elements, idx, &mut out);
            }
            ElementKind::Paragraph
            | ElementKind::Bold
            | ElementKind::Italic
            | ElementKind::Strikethrough => {
                append_loose(e, &mut paragraph, &mut out);
                idx += 1;
            }
        }
    }
    flush_paragraph(&mut paragraph, &mut out);
    out
}

/// Folds inline fragments into one styled text buffer.
///
/// Images contribute their alt text (or an `[img]` placeholder) as plain
/// text; use [`assemble`] where images should surface as standalone items.
pub fn styled_text_of(elements: &[Element]) -> StyledText {
    let mut styled = StyledText::default();
    for e in elements {
        match &e.kind {
            ElementKind::Image { .. } => {
                let alt = if e.text.trim().is_empty() {
                    "[img]"
                } else {
                    &e.text
                };
                styled.push_styled(alt, None);
            }
            kind => styled.push_styled(&e.text, style_of(kind)),
        }
    }
    styled
}

fn style_of(kind: &ElementKind) -> Option<InlineStyle> {
    match kind {
        ElementKind::Bold => Some(InlineStyle::Bold),
        ElementKind::Italic => Some(InlineStyle::Italic),
        ElementKind::Strikethrough => Some(InlineStyle::Strikethrough),
        _ => None,
    }
}

/// Appends one loose inline fragment to the paragraph accumulator.
///
/// An empty-text `Paragraph` is the blank-line sentinel: flush what is
/// pending and emit an [`RenderItem::EmptyLine`]. Everything else (including
/// the `"\n"` continuation sentinel) is appended with its inline style, which
/// joins adjacent lines without a break.
fn append_loose(e: &Element, paragraph: &mut StyledText, out: &mut Vec<RenderItem>) {
    if matches!(e.kind, ElementKind::Paragraph) && e.text.is_empty() {
        flush_paragraph(paragraph, out);
        out.push(RenderItem::EmptyLine);
    } else {
        paragraph.push_styled(&e.text, style_of(&e.kind));
    }
}

fn flush_paragraph(paragraph: &mut StyledText, out: &mut Vec<RenderItem>) {
    if !paragraph.is_empty() {
        out.push(RenderItem::Paragraph {
            text: std::mem::take(paragraph),
        });
    }
}

fn image_item(src: &str, text: &str) -> RenderItem {
    RenderItem::Image {
        url: src.to_string(),
        alt: non_blank(text),
    }
}

fn non_blank(text: &str) -> Option<String> {
    (!text.trim().is_empty()).then(|| text.to_string())
}

/// Re-scans the heading text so inline styling survives into the header;
/// inline images are pulled out as standalone items ahead of it.
fn push_header(text: &str, level: u8, out: &mut Vec<RenderItem>) {
    let mut styled = StyledText::default();
    for frag in scan_inline(text) {
        if let ElementKind::Image { src } = &frag.kind {
            out.push(image_item(src, &frag.text));
        } else {
            styled.push_styled(&frag.text, style_of(&frag.kind));
        }
    }
    out.push(RenderItem::Header {
        text: styled,
        level,
    });
}

/// Consumes a contiguous run of table elements into one table item.
fn consume_table(elements: &[Element], start: usize, out: &mut Vec<RenderItem>) -> usize {
    let mut rows = Vec::new();
    let mut idx = start;
    while idx < elements.len() {
        let ElementKind::Table { cells } = &elements[idx].kind else {
            break;
        };
        rows.push(cells.iter().map(|cell| assemble_cell(cell)).collect());
        idx += 1;
    }
    out.push(RenderItem::Table { rows });
    idx
}

fn assemble_cell(cell: &str) -> Cell {
    let fragments = scan_inline(cell);
    if let [
        Element {
            kind: ElementKind::Image { src },
            text,
            ..
        },
    ] = fragments.as_slice()
    {
        return Cell::Image {
            url: src.clone(),
            alt: non_blank(text),
        };
    }
    Cell::Text(styled_text_of(&fragments))
}

/// Folds every fragment sharing the head's group id into one list item.
///
/// All fragment text lands in the styled buffer; the last image fragment is
/// additionally emitted as a standalone item right after the list item.
fn consume_list_item(elements: &[Element], start: usize, out: &mut Vec<RenderItem>) -> usize {
    let Some(attrs) = elements[start].list.clone() else {
        return start + 1;
    };

    let mut text = StyledText::default();
    let mut trailing_image = None;
    let mut idx = start;
    while idx < elements.len() {
        let cur = &elements[idx];
        if cur.list.as_ref().map(|a| a.group) != Some(attrs.group) {
            break;
        }
        text.push_styled(&cur.text, style_of(&cur.kind));
        if let ElementKind::Image { src } = &cur.kind {
            trailing_image = Some(image_item(src, &cur.text));
        }
        idx += 1;
    }

    out.push(RenderItem::ListItem {
        text,
        ordered: attrs.ordered,
        level: attrs.level,
        marker: attrs.marker,
    });
    if let Some(image) = trailing_image {
        out.push(image);
    }
    idx
}
