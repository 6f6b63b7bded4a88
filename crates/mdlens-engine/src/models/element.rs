use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Correlates the fragments that together make up one list item.
///
/// A single source line like `- some **bold** text` parses into several
/// elements; they all carry the same group id so the assembler can fold them
/// back into one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListGroupId(Uuid);

impl ListGroupId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListGroupId {
    fn default() -> Self {
        Self::new()
    }
}

/// List bookkeeping shared by every fragment of one list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListAttrs {
    pub ordered: bool,
    /// Display marker: dotted counters (`1.2.`) for ordered items, a dash
    /// run (`--`) whose length encodes depth for unordered ones.
    pub marker: String,
    /// Zero-based nesting level.
    pub level: usize,
    pub group: ListGroupId,
}

/// Kind-specific data for one parsed element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementKind {
    Heading { level: u8 },
    Paragraph,
    Bold,
    Italic,
    Strikethrough,
    Image { src: String },
    ListItem,
    Table { cells: Vec<String> },
}

/// A flat unit produced by the block parser, consumed once by the assembler.
///
/// Two `Paragraph` sentinels thread block structure through the flat
/// sequence: empty text marks a blank line, a lone `"\n"` marks a paragraph
/// continuation without a break.
///
/// `list` is `Some` on every fragment belonging to a list item: the leading
/// `ListItem` fragment and any styled or image fragments that follow it on
/// the same source line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub text: String,
    pub list: Option<ListAttrs>,
}

impl Element {
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            list: None,
        }
    }

    pub fn with_list(mut self, attrs: ListAttrs) -> Self {
        self.list = Some(attrs);
        self
    }
}
