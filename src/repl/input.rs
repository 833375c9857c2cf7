use crate::app::AppEvent;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = "inksight> ";

/// REPL input using rustyline
///
/// Provides:
/// - Command history for the session
/// - Arrow key navigation and line editing
pub struct ReplInput {
    editor: DefaultEditor,
}

impl ReplInput {
    pub fn new() -> Result<Self, ReadlineError> {
        let editor = DefaultEditor::new()?;
        Ok(Self { editor })
    }

    /// Read a line with the "inksight> " prompt
    ///
    /// Ctrl-D and Ctrl-C end the session with `Ok(None)`.
    pub fn readline(&mut self) -> Result<Option<String>, ReadlineError> {
        match self.editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Parses an input line and converts it to an AppEvent
    pub fn to_app_event(&self, line: &str) -> AppEvent {
        line_to_app_event(line)
    }
}

/// Blank lines are ignored rather than reported as unknown commands.
pub fn line_to_app_event(line: &str) -> AppEvent {
    use crate::repl::command::command_to_app_event;
    use crate::repl::parser::parse_repl_input;

    if line.trim().is_empty() {
        return AppEvent::None;
    }
    command_to_app_event(parse_repl_input(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;

    #[test]
    fn test_line_to_app_event() {
        assert_eq!(line_to_app_event(":quit"), AppEvent::Quit);
        assert_eq!(line_to_app_event("@@"), AppEvent::LoadClipboard);
        assert_eq!(
            line_to_app_event("@notes.txt"),
            AppEvent::LoadFile("notes.txt".to_string())
        );
    }

    #[test]
    fn test_blank_line_is_no_event() {
        assert_eq!(line_to_app_event(""), AppEvent::None);
        assert_eq!(line_to_app_event("   "), AppEvent::None);
    }

    #[test]
    fn test_sized_view_event() {
        assert_eq!(
            line_to_app_event(":keywords 3"),
            AppEvent::Show(View::Keywords, Some(3))
        );
    }
}
