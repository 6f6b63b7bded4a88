use serde::{Deserialize, Serialize};

/// Style tag for one range of a [`StyledText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineStyle {
    Bold,
    Italic,
    Strikethrough,
}

/// A half-open byte range of styled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRange {
    pub start: usize,
    pub end: usize,
    pub style: InlineStyle,
}

/// Text plus non-nesting style ranges, ready for a display layer to cut
/// into styled runs. Ranges are recorded in append order and never overlap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledText {
    pub text: String,
    pub ranges: Vec<StyleRange>,
}

impl StyledText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ranges: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends `text`, recording a style range over it when `style` is set.
    pub fn push_styled(&mut self, text: &str, style: Option<InlineStyle>) {
        let start = self.text.len();
        self.text.push_str(text);
        if let Some(style) = style {
            self.ranges.push(StyleRange {
                start,
                end: self.text.len(),
                style,
            });
        }
    }
}

/// One table cell: styled text or an image placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Text(StyledText),
    Image { url: String, alt: Option<String> },
}

/// A display-ready grouped unit produced by the render assembler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderItem {
    Header {
        text: StyledText,
        level: u8,
    },
    Paragraph {
        text: StyledText,
    },
    ListItem {
        text: StyledText,
        ordered: bool,
        level: usize,
        marker: String,
    },
    Image {
        url: String,
        alt: Option<String>,
    },
    Table {
        rows: Vec<Vec<Cell>>,
    },
    EmptyLine,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_styled_records_range_over_appended_text() {
        let mut st = StyledText::plain("plain ");
        st.push_styled("bold", Some(InlineStyle::Bold));
        st.push_styled(" tail", None);

        assert_eq!(st.text, "plain bold tail");
        assert_eq!(
            st.ranges,
            vec![StyleRange {
                start: 6,
                end: 10,
                style: InlineStyle::Bold
            }]
        );
    }

    #[test]
    fn empty_styled_text() {
        let st = StyledText::default();
        assert!(st.is_empty());
        assert!(st.ranges.is_empty());
    }
}
