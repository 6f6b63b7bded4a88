//! Compact textual snapshots of assembled documents. The describe format
//! keeps one item per line so regressions show up as a readable diff.

use mdlens_engine::{Cell, RenderItem, StyledText, render};

fn describe(items: &[RenderItem]) -> String {
    items.iter().map(describe_item).collect::<Vec<_>>().join("\n")
}

fn describe_item(item: &RenderItem) -> String {
    match item {
        RenderItem::Header { text, level } => format!("header[{level}] {}", styled(text)),
        RenderItem::Paragraph { text } => format!("paragraph {}", styled(text)),
        RenderItem::ListItem {
            text,
            ordered,
            level,
            marker,
        } => {
            let kind = if *ordered { "ordered" } else { "bullet" };
            format!("list[{level}] {kind} <{marker}> {}", styled(text))
        }
        RenderItem::Image { url, alt } => match alt {
            Some(alt) => format!("image {url} alt={alt}"),
            None => format!("image {url}"),
        },
        RenderItem::Table { rows } => {
            let cells: Vec<String> = rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| match cell {
                            Cell::Text(st) => st.text.clone(),
                            Cell::Image { url, .. } => format!("img:{url}"),
                        })
                        .collect::<Vec<_>>()
                        .join(",")
                })
                .collect();
            format!("table {}", cells.join(" / "))
        }
        RenderItem::EmptyLine => "empty".to_string(),
    }
}

fn styled(text: &StyledText) -> String {
    let mut out = format!("{:?}", text.text);
    for range in &text.ranges {
        out.push_str(&format!(" {:?}@{}..{}", range.style, range.start, range.end));
    }
    out
}

#[test]
fn snapshot_styled_paragraph() {
    let items = render("**bold** *italic* ~~strike~~");
    insta::assert_snapshot!(describe(&items), @r#"paragraph "bold italic strike" Bold@0..4 Italic@5..11 Strikethrough@12..18"#);
}

#[test]
fn snapshot_mixed_document() {
    let items = render("# Title\n\nbody **bold**\n\n- one\n- two");
    insta::assert_snapshot!(describe(&items), @r#"
    header[1] "Title"
    empty
    paragraph "body bold" Bold@5..9
    empty
    list[0] bullet <-> "one"
    list[0] bullet <-> "two"
    "#);
}

#[test]
fn snapshot_table_document() {
    let items = render("| h | i |\n|---|---|\n| **x** | ![p](u) |");
    insta::assert_snapshot!(describe(&items), @"table h,i / x,img:u");
}

#[test]
fn snapshot_nested_ordered_list() {
    let items = render("1. first\n2. second\n    1. inner");
    insta::assert_snapshot!(describe(&items), @r#"
    list[0] ordered <1.> "first"
    list[0] ordered <2.> "second"
    list[1] ordered <2.1.> "inner"
    "#);
}
