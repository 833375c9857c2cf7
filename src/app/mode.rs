#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Waiting for a document
    Empty,
    /// A document is loaded and can be queried
    Loaded,
    Quit,
}
