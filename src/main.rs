use clap::Parser;
use tracing_subscriber::EnvFilter;

use inksight::app::{App, AppEvent, AppMode, View};
use inksight::engine::{AnalysisConfig, PaddingStrategy};
use inksight::repl::ReplInput;

/// Keyword, sentiment and emotion analytics for a document.
#[derive(Parser, Debug)]
#[command(name = "inksight", version, about)]
struct Cli {
    /// Document to analyze (txt, md, pdf, epub); starts the REPL when omitted
    path: Option<String>,

    /// Analyze the clipboard contents instead of a file
    #[arg(long, conflicts_with = "path")]
    clipboard: bool,

    /// Print the full analysis as JSON
    #[arg(long)]
    json: bool,

    /// Number of keywords to rank
    #[arg(long)]
    top: Option<usize>,

    /// Number of theme scatter points
    #[arg(long)]
    points: Option<usize>,

    /// Seed for theme point padding, making output reproducible
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::default();
        if let Some(n) = self.top {
            config = config.with_keyword_count(n);
        }
        if let Some(n) = self.points {
            config = config.with_theme_points(n);
        }
        if let Some(seed) = self.seed {
            config = config.with_padding(PaddingStrategy::Seeded(seed));
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app = App::new(cli.config());

    let load = match (&cli.path, cli.clipboard) {
        (Some(path), _) => Some(AppEvent::LoadFile(path.clone())),
        (None, true) => Some(AppEvent::LoadClipboard),
        (None, false) => None,
    };

    let Some(load) = load else {
        return run_repl(&mut app);
    };

    if let Some(message) = app.handle_event(load) {
        eprintln!("{}", message);
    }
    if app.mode != AppMode::Loaded {
        return Err("no document to analyze".into());
    }

    let views: &[View] = if cli.json {
        &[View::Json]
    } else {
        &[View::Report, View::Keywords, View::Sentiment, View::Emotions]
    };
    for &view in views {
        if let Some(output) = app.handle_event(AppEvent::Show(view, None)) {
            println!("{}", output);
        }
    }

    Ok(())
}

fn run_repl(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    println!("inksight: type :help for commands");
    let mut repl = ReplInput::new()?;

    while let Some(line) = repl.readline()? {
        let event = repl.to_app_event(&line);
        if let Some(output) = app.handle_event(event) {
            println!("{}", output);
        }
        if app.mode == AppMode::Quit {
            break;
        }
    }

    Ok(())
}
