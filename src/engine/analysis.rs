use serde::Serialize;

use super::chart::{
    bigram_bars_with, emotion_counts_bars, emotion_radar, keywords_bars_with,
    sentiment_donut_with, sentiment_timeline_bars_with, theme_points, ChartRecord,
};
use super::config::AnalysisConfig;
use super::emotion::emotional_arc;
use super::error::{decode_text, AnalysisError};
use super::summary::DocumentReport;
use super::tokenizer::tokens;

/// A named chart record, ready to hand to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedChart {
    pub name: &'static str,
    #[serde(flatten)]
    pub record: ChartRecord,
}

/// Everything the dashboard and feature pages show for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub report: DocumentReport,
    pub emotional_arc: Vec<usize>,
    pub charts: Vec<NamedChart>,
}

impl Analysis {
    pub fn chart(&self, name: &str) -> Option<&ChartRecord> {
        self.charts
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.record)
    }
}

#[tracing::instrument(skip(text, config))]
pub fn analyze(name: &str, text: &str, config: &AnalysisConfig) -> Analysis {
    let charts = vec![
        NamedChart {
            name: "keywords",
            record: ChartRecord::Bar(keywords_bars_with(
                text,
                config.keyword_count,
                config.min_count,
            )),
        },
        NamedChart {
            name: "bigrams",
            record: ChartRecord::Bar(bigram_bars_with(
                text,
                config.bigram_count,
                config.min_count,
            )),
        },
        NamedChart {
            name: "themes",
            record: ChartRecord::Points(theme_points(text, config.theme_points, config.padding)),
        },
        NamedChart {
            name: "sentiment",
            record: ChartRecord::Proportion(sentiment_donut_with(
                text,
                config.neutral_mass_divisor,
            )),
        },
        NamedChart {
            name: "sentiment_timeline",
            record: ChartRecord::Bar(sentiment_timeline_bars_with(
                text,
                config.timeline_parts,
                config.neutral_mass_divisor,
            )),
        },
        NamedChart {
            name: "emotions",
            record: ChartRecord::Vector(emotion_radar(text)),
        },
        NamedChart {
            name: "emotion_counts",
            record: ChartRecord::Bar(emotion_counts_bars(text)),
        },
    ];

    Analysis {
        report: DocumentReport::build(name, text, config),
        emotional_arc: emotional_arc(&tokens(text), config.arc_segments),
        charts,
    }
}

/// Boundary entry point for raw bytes; non-UTF-8 input fails before tokenizing.
pub fn analyze_bytes(
    name: &str,
    bytes: &[u8],
    config: &AnalysisConfig,
) -> Result<Analysis, AnalysisError> {
    let text = decode_text(bytes)?;
    Ok(analyze(name, text, config))
}
