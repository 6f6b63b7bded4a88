use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::RenderItem;
use crate::render;

/// Unique identifier of a loaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// A markdown document: raw content plus where it was loaded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub content: String,
    pub path: PathBuf,
}

impl Document {
    pub fn new(content: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: DocumentId::new(),
            content: content.into(),
            path: path.into(),
        }
    }

    /// Display name: the file name without its `.md` extension.
    pub fn display_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .unwrap_or("Untitled")
    }

    /// Render items for the current content.
    pub fn render(&self) -> Vec<RenderItem> {
        render::render(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_strips_md_extension() {
        let doc = Document::new("", "/notes/weekly review.md");
        assert_eq!(doc.display_name(), "weekly review");
    }

    #[test]
    fn display_name_keeps_other_extensions() {
        let doc = Document::new("", "/notes/readme.txt");
        assert_eq!(doc.display_name(), "readme.txt");
    }

    #[test]
    fn display_name_of_pathless_document() {
        let doc = Document::new("", "");
        assert_eq!(doc.display_name(), "Untitled");
    }

    #[test]
    fn render_uses_current_content() {
        let doc = Document::new("# Title", "/tmp/t.md");
        let items = doc.render();
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], RenderItem::Header { level: 1, .. }));
    }
}
