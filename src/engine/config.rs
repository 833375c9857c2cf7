// Configuration for the inksight analysis pipeline and CLI
// Defaults mirror the values the dashboard has always used

/// How `theme_points` fills the remainder when a text has too few bigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingStrategy {
    /// Thread RNG; output differs between calls.
    #[default]
    Random,

    /// Seeded RNG; identical text and seed always give identical points.
    Seeded(u64),
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Keywords shown in the keyword bar chart (default 7)
    pub keyword_count: usize,

    /// Bigrams shown in the bigram bar chart (default 10)
    pub bigram_count: usize,

    /// Points in the theme scatter (default 25)
    pub theme_points: usize,

    /// Minimum count for a ranked term to be reported (default 1)
    pub min_count: usize,

    /// Reading speed used for the read time estimate (default 200)
    pub words_per_minute: usize,

    /// Tokens per unit of implicit neutral mass in sentiment (default 60)
    pub neutral_mass_divisor: usize,

    /// Chunks in the sentiment timeline (default 12)
    pub timeline_parts: usize,

    /// Segments in the emotional arc (default 20)
    pub arc_segments: usize,

    /// Keywords named in the quick summary (default 5)
    pub summary_keywords: usize,

    pub padding: PaddingStrategy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            keyword_count: 7,
            bigram_count: 10,
            theme_points: 25,
            min_count: 1,
            words_per_minute: 200,
            neutral_mass_divisor: 60,
            timeline_parts: 12,
            arc_segments: 20,
            summary_keywords: 5,
            padding: PaddingStrategy::Random,
        }
    }
}

impl AnalysisConfig {
    pub fn with_padding(mut self, padding: PaddingStrategy) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_keyword_count(mut self, n: usize) -> Self {
        self.keyword_count = n;
        self
    }

    pub fn with_theme_points(mut self, n: usize) -> Self {
        self.theme_points = n;
        self
    }

    pub fn with_min_count(mut self, n: usize) -> Self {
        self.min_count = n;
        self
    }

    pub fn with_neutral_mass_divisor(mut self, divisor: usize) -> Self {
        self.neutral_mass_divisor = divisor;
        self
    }
}
