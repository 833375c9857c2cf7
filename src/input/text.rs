use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Load a plain UTF-8 text file.
///
/// Whitespace-only files are rejected; the analysis itself would accept
/// them, but there is nothing to report on.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    let text =
        String::from_utf8(bytes).map_err(|_| LoadError::InvalidEncoding(path.to_path_buf()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyDocument(path.display().to_string()));
    }

    Ok(LoadedDocument::from_path(
        text.replace("\r\n", "\n"),
        "text",
        path,
    ))
}
