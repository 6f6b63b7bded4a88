use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Document;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Document not found: {0}")]
    NotFound(PathBuf),
    #[error("Not a readable file: {0}")]
    NotAFile(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown document from disk.
pub fn load_document(path: &Path) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(IoError::NotAFile(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(Document::new(content, path))
}

/// Write a document's content back to its path, creating parent
/// directories as needed.
pub fn save_document(document: &Document) -> Result<(), IoError> {
    if let Some(parent) = document.path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&document.path, &document.content)?;
    Ok(())
}
