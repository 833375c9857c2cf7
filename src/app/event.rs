use super::view::View;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    Show(View, Option<usize>),
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
