//! Per-line classification: each helper inspects one line in isolation,
//! without reference to surrounding block state.

use regex::Regex;

/// A detected list marker with the text that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemLine {
    pub ordered: bool,
    pub body: String,
}

/// Width of the leading whitespace run, in characters. Zero for lines with
/// no non-whitespace character.
pub fn indent_width(line: &str) -> usize {
    line.chars().position(|c| !c.is_whitespace()).unwrap_or(0)
}

/// `# …` heading: returns the level (capped at 6) and the title with
/// surrounding whitespace and trailing `#` runs stripped.
pub fn heading(line: &str) -> Option<(u8, String)> {
    let content = line.trim_start();
    if !content.starts_with('#') {
        return None;
    }
    let level = content.chars().take_while(|&c| c == '#').count().min(6);
    let text = content[level..]
        .trim()
        .trim_end_matches('#')
        .trim()
        .to_string();
    Some((level as u8, text))
}

/// A table row needs at least two `|` and must start or end with one after
/// trimming.
pub fn is_table_row(line: &str) -> bool {
    line.contains('|')
        && (line.trim_start().starts_with('|') || line.trim_end().ends_with('|'))
        && line.matches('|').count() >= 2
}

/// Splits a table row into trimmed cell texts, outer pipes removed.
pub fn split_cells(row: &str) -> Vec<String> {
    row.trim()
        .trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// A divider row separates the header from the body: every cell is a
/// non-empty run of `-`/`:`.
pub fn is_divider_row(cells: &[String]) -> bool {
    cells
        .iter()
        .all(|cell| !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':'))
}

/// Detects `- `/`* `/`+ ` and `N.` list markers on the (untrimmed) line.
///
/// Lines opening with `**`/`__` are bold text, not bullets. The space after
/// the marker is optional, so `-text` is a list item with body `text`.
pub fn detect_list_item(line: &str) -> Option<ListItemLine> {
    use std::sync::OnceLock;

    static UNORDERED: OnceLock<Regex> = OnceLock::new();
    static ORDERED: OnceLock<Regex> = OnceLock::new();
    let unordered = UNORDERED
        .get_or_init(|| Regex::new(r"^[*+-]\s?(.*)$").expect("Invalid unordered marker regex"));
    let ordered =
        ORDERED.get_or_init(|| Regex::new(r"^\d+\.\s?(.*)$").expect("Invalid ordered marker regex"));

    let trimmed = line.trim_start();
    if trimmed.starts_with("**") || trimmed.starts_with("__") {
        return None;
    }
    if let Some(caps) = unordered.captures(trimmed) {
        return Some(ListItemLine {
            ordered: false,
            body: caps[1].to_string(),
        });
    }
    if let Some(caps) = ordered.captures(trimmed) {
        return Some(ListItemLine {
            ordered: true,
            body: caps[1].to_string(),
        });
    }
    None
}
