//! Maps engine render items onto ratatui lines. Kept free of terminal
//! state so the mapping is testable headless.

use mdlens_engine::{Cell, InlineStyle, RenderItem, StyledText};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Converts assembled render items into styled terminal lines.
pub fn items_to_lines(items: &[RenderItem]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for item in items {
        match item {
            RenderItem::Header { text, level } => {
                let prefix = Span::styled(
                    format!("{} ", "#".repeat(*level as usize)),
                    Style::default().fg(Color::Cyan),
                );
                let base = Style::default().add_modifier(Modifier::BOLD);
                lines.extend(prefixed(prefix, styled_lines(text, base)));
            }
            RenderItem::Paragraph { text } => {
                lines.extend(styled_lines(text, Style::default()));
            }
            RenderItem::ListItem {
                text,
                level,
                marker,
                ..
            } => {
                let prefix = Span::styled(
                    format!("{}{marker} ", "  ".repeat(*level)),
                    Style::default().fg(Color::Blue),
                );
                lines.extend(prefixed(prefix, styled_lines(text, Style::default())));
            }
            RenderItem::Image { url, alt } => {
                let label = match alt {
                    Some(alt) => format!("[image: {alt}] ({url})"),
                    None => format!("[image] ({url})"),
                };
                lines.push(Line::from(Span::styled(
                    label,
                    Style::default().fg(Color::Magenta),
                )));
            }
            RenderItem::Table { rows } => {
                lines.extend(table_lines(rows));
            }
            RenderItem::EmptyLine => lines.push(Line::default()),
        }
    }
    lines
}

fn modifier_of(style: InlineStyle) -> Modifier {
    match style {
        InlineStyle::Bold => Modifier::BOLD,
        InlineStyle::Italic => Modifier::ITALIC,
        InlineStyle::Strikethrough => Modifier::CROSSED_OUT,
    }
}

/// Cuts one line of `st` (byte range `start..end`) into spans at style
/// boundaries. Ranges never overlap, so a single forward walk suffices.
fn styled_spans(st: &StyledText, start: usize, end: usize, base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut pos = start;
    for range in st.ranges.iter().filter(|r| r.start < end && r.end > start) {
        let from = range.start.max(start);
        let to = range.end.min(end);
        if from > pos {
            spans.push(Span::styled(st.text[pos..from].to_string(), base));
        }
        spans.push(Span::styled(
            st.text[from..to].to_string(),
            base.add_modifier(modifier_of(range.style)),
        ));
        pos = to;
    }
    if pos < end {
        spans.push(Span::styled(st.text[pos..end].to_string(), base));
    }
    if spans.is_empty() {
        spans.push(Span::styled(String::new(), base));
    }
    spans
}

/// Splits a styled text on newlines into one ratatui line each.
fn styled_lines(st: &StyledText, base: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for raw in st.text.split('\n') {
        let end = offset + raw.len();
        lines.push(Line::from(styled_spans(st, offset, end, base)));
        offset = end + 1;
    }
    lines
}

/// Prepends `prefix` to the first line and indents continuations to match.
fn prefixed(prefix: Span<'static>, body: Vec<Line<'static>>) -> Vec<Line<'static>> {
    let indent = " ".repeat(prefix.content.chars().count());
    body.into_iter()
        .enumerate()
        .map(|(n, line)| {
            let lead = if n == 0 {
                prefix.clone()
            } else {
                Span::raw(indent.clone())
            };
            let mut spans = vec![lead];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(st) => st.text.clone(),
        Cell::Image { alt, .. } => format!("[{}]", alt.as_deref().unwrap_or("img")),
    }
}

/// Renders table rows with columns padded to their widest cell.
fn table_lines(rows: &[Vec<Cell>]) -> Vec<Line<'static>> {
    let columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(cell_text(cell).chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            let mut spans = Vec::new();
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    spans.push(Span::raw(" │ "));
                }
                let shown = cell_text(cell);
                let pad = widths[column].saturating_sub(shown.chars().count());
                match cell {
                    Cell::Text(st) => {
                        spans.extend(styled_spans(st, 0, st.text.len(), Style::default()));
                    }
                    Cell::Image { .. } => {
                        spans.push(Span::styled(shown, Style::default().fg(Color::Magenta)));
                    }
                }
                if pad > 0 {
                    spans.push(Span::raw(" ".repeat(pad)));
                }
            }
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdlens_engine::render;
    use pretty_assertions::assert_eq;

    fn flat_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn styled_ranges_become_modifiers() {
        let lines = items_to_lines(&render("**bold** middle *lean*"));
        assert_eq!(lines.len(), 1);
        let spans = &lines[0].spans;
        assert_eq!(flat_text(&lines[0]), "bold middle lean");
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert!(
            spans
                .last()
                .unwrap()
                .style
                .add_modifier
                .contains(Modifier::ITALIC)
        );
    }

    #[test]
    fn strikethrough_maps_to_crossed_out() {
        let lines = items_to_lines(&render("~~gone~~"));
        assert!(
            lines[0].spans[0]
                .style
                .add_modifier
                .contains(Modifier::CROSSED_OUT)
        );
    }

    #[test]
    fn list_items_indent_by_level_and_show_marker() {
        let lines = items_to_lines(&render("- top\n    - inner"));
        assert_eq!(flat_text(&lines[0]), "- top");
        assert_eq!(flat_text(&lines[1]), "  -- inner");
    }

    #[test]
    fn ordered_markers_carry_counters() {
        let lines = items_to_lines(&render("1. first\n2. second"));
        assert_eq!(flat_text(&lines[0]), "1. first");
        assert_eq!(flat_text(&lines[1]), "2. second");
    }

    #[test]
    fn headers_are_prefixed_and_bold() {
        let lines = items_to_lines(&render("## Section"));
        assert_eq!(flat_text(&lines[0]), "## Section");
        assert!(
            lines[0].spans[1]
                .style
                .add_modifier
                .contains(Modifier::BOLD)
        );
    }

    #[test]
    fn multi_line_paragraph_splits_into_lines() {
        let lines = items_to_lines(&render("one\ntwo"));
        assert_eq!(lines.len(), 2);
        assert_eq!(flat_text(&lines[0]), "one");
        assert_eq!(flat_text(&lines[1]), "two");
    }

    #[test]
    fn empty_line_renders_blank() {
        let lines = items_to_lines(&render("a\n\nb"));
        assert_eq!(lines.len(), 3);
        assert_eq!(flat_text(&lines[1]), "");
    }

    #[test]
    fn table_columns_pad_to_widest_cell() {
        let lines = items_to_lines(&render("| a | long |\n|---|---|\n| bbbb | c |"));
        assert_eq!(flat_text(&lines[0]), "a    │ long");
        assert_eq!(flat_text(&lines[1]), "bbbb │ c   ");
    }

    #[test]
    fn image_items_show_placeholder() {
        let lines = items_to_lines(&render("![a map](map.png)"));
        assert_eq!(flat_text(&lines[0]), "[image: a map] (map.png)");
    }
}
