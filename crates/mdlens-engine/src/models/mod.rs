pub mod document;
pub mod element;
pub mod render_item;

pub use document::{Document, DocumentId};
pub use element::{Element, ElementKind, ListAttrs, ListGroupId};
pub use render_item::{Cell, InlineStyle, RenderItem, StyleRange, StyledText};
