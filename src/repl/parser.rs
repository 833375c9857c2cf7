use super::ReplCommand;
use crate::app::View;

/// Parse REPL input string into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - `:report`, `:keywords [n]`, `:bigrams [n]`, `:themes [n]`,
///   `:sentiment`, `:emotions`, `:sensory`, `:json` → Show a view
/// - `@filename` → Load file command
/// - `@@` or a bare `@` → Load clipboard
/// - Anything else → Unknown
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();

    if input.is_empty() {
        return ReplCommand::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        let name = parts.next().unwrap_or("");
        let arg = parts.next();

        // a size argument that is not a number makes the whole command invalid
        let size = match arg.map(str::parse::<usize>) {
            None => None,
            Some(Ok(n)) => Some(n),
            Some(Err(_)) => return ReplCommand::Unknown(input.to_string()),
        };
        if parts.next().is_some() {
            return ReplCommand::Unknown(input.to_string());
        }

        match (name, size) {
            ("q" | "quit", None) => ReplCommand::Quit,
            ("h" | "help", None) => ReplCommand::Help,
            (name, size) => match view_from_name(name) {
                Some(view) if size.is_none() || view.takes_size() => {
                    ReplCommand::Show(view, size)
                }
                _ => ReplCommand::Unknown(input.to_string()),
            },
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            ReplCommand::LoadClipboard
        } else {
            ReplCommand::LoadFile(filename.to_string())
        }
    } else {
        ReplCommand::Unknown(input.to_string())
    }
}

fn view_from_name(name: &str) -> Option<View> {
    match name {
        "report" => Some(View::Report),
        "keywords" | "kw" => Some(View::Keywords),
        "bigrams" => Some(View::Bigrams),
        "themes" => Some(View::Themes),
        "sentiment" => Some(View::Sentiment),
        "emotions" => Some(View::Emotions),
        "sensory" => Some(View::Sensory),
        "json" => Some(View::Json),
        _ => None,
    }
}
