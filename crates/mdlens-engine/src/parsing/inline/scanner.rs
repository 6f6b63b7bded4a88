use crate::models::{Element, ElementKind};

use super::cursor::Cursor;

const IMAGE_OPEN: &str = "![";
const BOLD_STAR: &str = "**";
const BOLD_UNDERSCORE: &str = "__";
const STRIKE: &str = "~~";
const ESCAPE: char = '\\';

/// Scans one line (or table cell) into an ordered run of inline elements.
///
/// Blank input yields an empty sequence. Plain text accumulates in a buffer
/// that is flushed as a `Paragraph` element whenever a styled construct
/// matches; unmatched delimiters fall through as literal text, so the
/// scanner never fails.
///
/// Constructs are tried in priority order: image, bold, strikethrough,
/// italic, escape. Bold spans are scanned recursively with inner `Paragraph`
/// fragments re-tagged as `Bold`, so `**bold _inner_ bold**` yields a
/// Bold/Italic/Bold triple. Strikethrough and italic take their inner text
/// literally.
pub fn scan_inline(text: &str) -> Vec<Element> {
    if text.trim().is_empty() {
        return vec![];
    }

    let mut out = Vec::new();
    let mut buf = String::new();
    let mut cur = Cursor::new(text);

    while !cur.eof() {
        if try_image(&mut cur, &mut buf, &mut out)
            || try_bold(&mut cur, &mut buf, &mut out)
            || try_strikethrough(&mut cur, &mut buf, &mut out)
            || try_italic(&mut cur, &mut buf, &mut out)
            || try_escape(&mut cur, &mut buf)
        {
            continue;
        }
        if let Some(c) = cur.bump() {
            buf.push(c);
        }
    }

    flush_plain(&mut buf, &mut out);
    out
}

/// Drains the plain-text buffer into a `Paragraph` element, if non-empty.
fn flush_plain(buf: &mut String, out: &mut Vec<Element>) {
    if !buf.is_empty() {
        out.push(Element::new(ElementKind::Paragraph, std::mem::take(buf)));
    }
}

/// `![alt](url)`. Requires the closing `]` to be immediately followed by
/// `(`; anything less falls through as plain text.
fn try_image(cur: &mut Cursor, buf: &mut String, out: &mut Vec<Element>) -> bool {
    if !cur.starts_with(IMAGE_OPEN) {
        return false;
    }
    let start = cur.pos();
    let Some(alt_end) = cur.find_char_from(']', start + 2) else {
        return false;
    };
    if cur.char_at(alt_end + 1) != Some('(') {
        return false;
    }
    let url_start = alt_end + 2;
    let Some(url_end) = cur.find_char_from(')', url_start) else {
        return false;
    };

    flush_plain(buf, out);
    let alt = cur.slice(start + 2, alt_end);
    let url = cur.slice(url_start, url_end);
    let text = if alt.trim().is_empty() { url } else { alt };
    out.push(Element::new(
        ElementKind::Image {
            src: url.to_string(),
        },
        text,
    ));
    cur.seek(url_end + 1);
    true
}

/// `**…**` or `__…__`. The inner text is scanned recursively; resulting
/// `Paragraph` fragments become `Bold`, everything else passes through.
fn try_bold(cur: &mut Cursor, buf: &mut String, out: &mut Vec<Element>) -> bool {
    let delim = if cur.starts_with(BOLD_STAR) {
        BOLD_STAR
    } else if cur.starts_with(BOLD_UNDERSCORE) {
        BOLD_UNDERSCORE
    } else {
        return false;
    };
    let start = cur.pos();
    let Some(end) = cur.find_from(delim, start + 2) else {
        return false;
    };

    flush_plain(buf, out);
    for frag in scan_inline(cur.slice(start + 2, end)) {
        out.push(match frag.kind {
            ElementKind::Paragraph => Element {
                kind: ElementKind::Bold,
                ..frag
            },
            _ => frag,
        });
    }
    cur.seek(end + 2);
    true
}

/// `~~…~~`, inner text taken literally.
fn try_strikethrough(cur: &mut Cursor, buf: &mut String, out: &mut Vec<Element>) -> bool {
    if !cur.starts_with(STRIKE) {
        return false;
    }
    let start = cur.pos();
    let Some(end) = cur.find_from(STRIKE, start + 2) else {
        return false;
    };

    flush_plain(buf, out);
    out.push(Element::new(
        ElementKind::Strikethrough,
        cur.slice(start + 2, end),
    ));
    cur.seek(end + 2);
    true
}

/// Single `*` or `_`. Skipped when the matched close is immediately
/// followed by the same char, so half of a bold marker is never swallowed.
fn try_italic(cur: &mut Cursor, buf: &mut String, out: &mut Vec<Element>) -> bool {
    let delim = match cur.peek() {
        Some(c @ ('*' | '_')) => c,
        _ => return false,
    };
    let start = cur.pos();
    let Some(end) = cur.find_char_from(delim, start + 1) else {
        return false;
    };
    if cur.char_at(end + 1) == Some(delim) {
        return false;
    }

    flush_plain(buf, out);
    out.push(Element::new(ElementKind::Italic, cur.slice(start + 1, end)));
    cur.seek(end + 1);
    true
}

/// Backslash followed by any char appends that char literally. A trailing
/// backslash is left for the default branch.
fn try_escape(cur: &mut Cursor, buf: &mut String) -> bool {
    if cur.peek() != Some(ESCAPE) {
        return false;
    }
    let saved = cur.clone();
    cur.bump();
    match cur.bump() {
        Some(c) => {
            buf.push(c);
            true
        }
        None => {
            *cur = saved;
            false
        }
    }
}
