use super::{LoadError, LoadedDocument};

/// Load whatever text is on the system clipboard.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;
    from_text(text)
}

fn from_text(text: String) -> Result<LoadedDocument, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::EmptyDocument("clipboard".to_string()));
    }

    Ok(LoadedDocument {
        text,
        source: "clipboard".to_string(),
        name: "clipboard".to_string(),
    })
}
