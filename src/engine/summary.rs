use serde::Serialize;

use super::config::AnalysisConfig;
use super::emotion::{self, Emotion};
use super::frequency::{top_n, unique_count};
use super::sentiment::{score_with_divisor, SentimentResult};
use super::sensory::{analyze_sensory_words, SensoryProfile};
use super::tokenizer::{read_time_minutes_at, tokens, word_count};

/// One-line overview: top keywords then the polarity split.
pub fn quick_summary(text: &str) -> String {
    quick_summary_with(text, &AnalysisConfig::default())
}

pub fn quick_summary_with(text: &str, config: &AnalysisConfig) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let tokens = tokens(text);
    let keywords: Vec<String> = top_n(&tokens, config.summary_keywords, 1)
        .into_iter()
        .map(|t| t.term)
        .collect();
    let sentiment = score_with_divisor(&tokens, config.neutral_mass_divisor);

    let mut out = String::new();
    if !keywords.is_empty() {
        out.push_str(&format!("Top themes: {}. ", keywords.join(", ")));
    }
    out.push_str(&format!(
        "Sentiment ~ {}% positive / {}% negative.",
        sentiment.positive, sentiment.negative
    ));
    out
}

/// Dashboard-level facts about a single document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    pub name: String,
    pub word_count: usize,
    pub read_time_minutes: usize,
    pub unique_tokens: usize,
    pub top_keyword: Option<String>,
    pub summary: String,
    pub sentiment: SentimentResult,
    pub dominant_emotion: Option<Emotion>,
    pub sensory: SensoryProfile,
}

impl DocumentReport {
    #[tracing::instrument(skip(text, config))]
    pub fn build(name: &str, text: &str, config: &AnalysisConfig) -> Self {
        let tokens = tokens(text);
        let words = word_count(text);

        let report = Self {
            name: name.to_string(),
            word_count: words,
            read_time_minutes: read_time_minutes_at(words, config.words_per_minute),
            unique_tokens: unique_count(&tokens),
            top_keyword: top_n(&tokens, 1, config.min_count)
                .into_iter()
                .next()
                .map(|t| t.term),
            summary: quick_summary_with(text, config),
            sentiment: score_with_divisor(&tokens, config.neutral_mass_divisor),
            dominant_emotion: emotion::score(&tokens).dominant(),
            sensory: analyze_sensory_words(&tokens),
        };
        tracing::debug!(words = report.word_count, unique = report.unique_tokens, "report built");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIVER: &str = "The river was calm and the night was bright. I love the home by the river.";

    #[test]
    fn test_quick_summary_empty() {
        assert_eq!(quick_summary(""), "");
        assert_eq!(quick_summary("  \n "), "");
    }

    #[test]
    fn test_quick_summary_format() {
        assert_eq!(
            quick_summary(RIVER),
            "Top themes: river, calm, night, bright, love. Sentiment ~ 100% positive / 0% negative."
        );
    }

    #[test]
    fn test_quick_summary_only_stopwords() {
        assert_eq!(
            quick_summary("the and of"),
            "Sentiment ~ 0% positive / 0% negative."
        );
    }

    #[test]
    fn test_report_fields() {
        let report = DocumentReport::build("river.txt", RIVER, &AnalysisConfig::default());
        assert_eq!(report.name, "river.txt");
        assert_eq!(report.word_count, 16);
        assert_eq!(report.read_time_minutes, 1);
        assert_eq!(report.unique_tokens, 6);
        assert_eq!(report.top_keyword.as_deref(), Some("river"));
        assert_eq!(report.sentiment.negative, 0);
        assert_eq!(report.dominant_emotion, None);
        assert_eq!(report.sensory.visual, 1);
    }

    #[test]
    fn test_report_empty_text() {
        let report = DocumentReport::build("empty", "", &AnalysisConfig::default());
        assert_eq!(report.word_count, 0);
        assert_eq!(report.read_time_minutes, 1);
        assert_eq!(report.unique_tokens, 0);
        assert_eq!(report.top_keyword, None);
        assert_eq!(report.summary, "");
    }
}
