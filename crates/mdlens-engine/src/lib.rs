pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use models::{Document, DocumentId, Element, ElementKind, ListAttrs, ListGroupId};
pub use models::{Cell, InlineStyle, RenderItem, StyleRange, StyledText};
pub use parsing::{parse, scan_inline};
pub use render::{assemble, render, styled_text_of};
