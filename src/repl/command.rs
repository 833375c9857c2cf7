use crate::app::AppEvent;
use crate::app::View;

/// Commands that can be parsed from REPL input
///
/// These commands map to AppEvent for handling in App core.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Quit the session
    Quit,

    /// Show help information
    Help,

    /// Load a file (txt, md, pdf, epub)
    LoadFile(String),

    /// Load from clipboard
    LoadClipboard,

    /// Show one view of the loaded document, with an optional size override
    Show(View, Option<usize>),

    /// Unknown/invalid command
    Unknown(String),
}

/// Convert a parsed REPL command into an AppEvent
pub fn command_to_app_event(command: ReplCommand) -> AppEvent {
    match command {
        ReplCommand::Quit => AppEvent::Quit,
        ReplCommand::Help => AppEvent::Help,
        ReplCommand::LoadFile(path) => AppEvent::LoadFile(path),
        ReplCommand::LoadClipboard => AppEvent::LoadClipboard,
        ReplCommand::Show(view, size) => AppEvent::Show(view, size),
        ReplCommand::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_to_app_event_quit() {
        assert_eq!(command_to_app_event(ReplCommand::Quit), AppEvent::Quit);
    }

    #[test]
    fn test_command_to_app_event_load_file() {
        let event = command_to_app_event(ReplCommand::LoadFile("test.txt".to_string()));
        assert_eq!(event, AppEvent::LoadFile("test.txt".to_string()));
    }

    #[test]
    fn test_command_to_app_event_show() {
        let event = command_to_app_event(ReplCommand::Show(View::Keywords, Some(3)));
        assert_eq!(event, AppEvent::Show(View::Keywords, Some(3)));
    }

    #[test]
    fn test_command_to_app_event_unknown() {
        let event = command_to_app_event(ReplCommand::Unknown("invalid".to_string()));
        assert!(matches!(event, AppEvent::InvalidCommand(_)));
    }
}
