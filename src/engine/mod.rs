pub mod analysis;
pub mod chart;
pub mod config;
pub mod emotion;
pub mod error;
pub mod frequency;
pub mod lexicon;
pub mod sensory;
pub mod sentiment;
pub mod summary;
pub mod tokenizer;

pub use analysis::{analyze, analyze_bytes, Analysis, NamedChart};
pub use chart::{
    bigram_bars, bigram_bars_with, emotion_counts_bars, emotion_radar, keywords_bars,
    keywords_bars_with, sentiment_donut, sentiment_donut_with, sentiment_timeline_bars,
    sentiment_timeline_bars_with, theme_points, BarData, ChartRecord, Point, PointData,
    ProportionData, VectorData,
};
pub use config::{AnalysisConfig, PaddingStrategy};
pub use emotion::{dominant_emotion, emotional_arc, emotions, Emotion, EmotionVector};
pub use error::AnalysisError;
pub use frequency::{bigrams, frequencies, top_n, unique_count, RankedTerm};
pub use sensory::{analyze_sensory_words, SensoryProfile};
pub use sentiment::{
    score_with_divisor, sentiment, sentiment_timeline, sentiment_timeline_with, SentimentResult,
};
pub use summary::{quick_summary, DocumentReport};
pub use tokenizer::{normalize, read_time_minutes, sentences, tokens, word_count, word_spans};
