use super::event::AppEvent;
use super::mode::AppMode;
use super::view::{
    render_bars, render_points, render_proportion, render_report, render_sensory,
    render_vector, View,
};
use crate::engine::{self, AnalysisConfig, DocumentReport};
use crate::input::{self, LoadError, LoadedDocument};

pub const HELP_TEXT: &str = "\
Commands:
  @path          load a text, markdown, PDF or EPUB file
  @@             load text from the clipboard
  :report        document overview
  :keywords [n]  top keywords
  :bigrams [n]   top bigrams
  :themes [n]    theme scatter points
  :sentiment     polarity split and timeline
  :emotions      emotion radar and counts
  :sensory       sensory vocabulary
  :json          full analysis as JSON
  :h, :help      this help
  :q, :quit      exit";

const NO_DOCUMENT: &str = "No document loaded. Use @path or @@ first.";

pub struct App {
    pub mode: AppMode,
    pub config: AnalysisConfig,
    document: Option<LoadedDocument>,
}

impl App {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            mode: AppMode::Empty,
            config,
            document: None,
        }
    }

    pub fn document(&self) -> Option<&LoadedDocument> {
        self.document.as_ref()
    }

    pub fn set_document(&mut self, document: LoadedDocument) {
        tracing::info!(source = %document.source, "document loaded");
        self.document = Some(document);
        self.mode = AppMode::Loaded;
    }

    /// Handle one event; returns text to show the user, if any.
    pub fn handle_event(&mut self, event: AppEvent) -> Option<String> {
        match event {
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                None
            }
            AppEvent::Help => Some(HELP_TEXT.to_string()),
            AppEvent::LoadFile(path) => Some(self.load_with(|| input::load(&path))),
            AppEvent::LoadClipboard => Some(self.load_with(input::clipboard::load)),
            AppEvent::Show(view, size) => Some(self.render(view, size)),
            AppEvent::InvalidCommand(command) => {
                Some(format!("Unknown command: {} (try :help)", command))
            }
            AppEvent::None => None,
        }
    }

    fn load_with<F>(&mut self, loader: F) -> String
    where
        F: FnOnce() -> Result<LoadedDocument, LoadError>,
    {
        match loader() {
            Ok(document) => {
                let message = format!(
                    "Loaded {} ({} words)",
                    document.name,
                    engine::word_count(&document.text)
                );
                self.set_document(document);
                message
            }
            Err(e) => {
                tracing::warn!(error = %e, "load failed");
                format!("Error: {}", e)
            }
        }
    }

    /// Render a view of the current document.
    pub fn render(&self, view: View, size: Option<usize>) -> String {
        let Some(document) = &self.document else {
            return NO_DOCUMENT.to_string();
        };
        let text = document.text.as_str();
        let config = &self.config;

        match view {
            View::Report => {
                render_report(&DocumentReport::build(&document.name, text, config))
            }
            View::Keywords => render_bars(
                "Keywords",
                &engine::keywords_bars_with(
                    text,
                    size.unwrap_or(config.keyword_count),
                    config.min_count,
                ),
            ),
            View::Bigrams => render_bars(
                "Bigrams",
                &engine::bigram_bars_with(
                    text,
                    size.unwrap_or(config.bigram_count),
                    config.min_count,
                ),
            ),
            View::Themes => render_points(
                "Theme points",
                &engine::theme_points(text, size.unwrap_or(config.theme_points), config.padding),
            ),
            View::Sentiment => {
                let mut out = render_proportion(
                    "Sentiment",
                    &engine::sentiment_donut_with(text, config.neutral_mass_divisor),
                );
                out.push_str(&render_bars(
                    "Positivity by part",
                    &engine::sentiment_timeline_bars_with(
                        text,
                        config.timeline_parts,
                        config.neutral_mass_divisor,
                    ),
                ));
                out
            }
            View::Emotions => {
                let mut out = render_vector("Emotions", &engine::emotion_radar(text));
                out.push_str(&render_bars(
                    "Emotion counts",
                    &engine::emotion_counts_bars(text),
                ));
                out
            }
            View::Sensory => {
                render_sensory(&engine::analyze_sensory_words(&engine::tokens(text)))
            }
            View::Json => {
                let analysis = engine::analyze(&document.name, text, config);
                serde_json::to_string_pretty(&analysis)
                    .unwrap_or_else(|e| format!("Error: {}", e))
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
