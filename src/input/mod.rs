use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Document is empty: {0}")]
    EmptyDocument(String),

    #[error("Invalid text encoding: {0}")]
    InvalidEncoding(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Raw text pulled from some source, not yet analyzed.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    /// Origin tag, e.g. `pdf:/books/a.pdf` or `clipboard`.
    pub source: String,
    /// Display name, usually the file name.
    pub name: String,
}

impl LoadedDocument {
    pub(crate) fn from_path(text: String, kind: &str, path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            text,
            source: format!("{}:{}", kind, path.display()),
            name,
        }
    }
}

/// Loads a document, picking the reader from the file extension.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let extension = Path::new(path)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());

    tracing::info!(path, "loading document");
    match extension.as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        None | Some("txt") | Some("md") | Some("text") => text::load(path),
        Some(other) => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_unsupported_extension() {
        let result = load("/tmp/archive.zip");
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(ext)) if ext == "zip"));
    }

    #[test]
    fn test_load_missing_text_file() {
        let result = load("/nonexistent/notes.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_extension_case_insensitive() {
        let result = load("/nonexistent/BOOK.PDF");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_loaded_document_name_from_path() {
        let doc = LoadedDocument::from_path(
            "hello".to_string(),
            "text",
            Path::new("/docs/story.txt"),
        );
        assert_eq!(doc.name, "story.txt");
        assert_eq!(doc.source, "text:/docs/story.txt");
    }
}
