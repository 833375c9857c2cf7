//! Plain-text views of analysis results for the terminal.

use crate::engine::{
    BarData, DocumentReport, PointData, ProportionData, SensoryProfile, VectorData,
};

/// What the user asked to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Report,
    Keywords,
    Bigrams,
    Themes,
    Sentiment,
    Emotions,
    Sensory,
    Json,
}

impl View {
    /// Views whose length can be set from the command line.
    pub fn takes_size(self) -> bool {
        matches!(self, View::Keywords | View::Bigrams | View::Themes)
    }
}

pub fn render_report(report: &DocumentReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Document:   {}\n", report.name));
    out.push_str(&format!("Words:      {}\n", report.word_count));
    out.push_str(&format!("Read time:  {} min\n", report.read_time_minutes));
    out.push_str(&format!("Unique:     {}\n", report.unique_tokens));
    out.push_str(&format!(
        "Top word:   {}\n",
        report.top_keyword.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!(
        "Sentiment:  {}% positive / {}% neutral / {}% negative\n",
        report.sentiment.positive,
        report.sentiment.neutral(),
        report.sentiment.negative
    ));
    out.push_str(&format!(
        "Emotion:    {}\n",
        report
            .dominant_emotion
            .map(|e| e.label())
            .unwrap_or("-")
    ));
    if !report.summary.is_empty() {
        out.push_str(&format!("\n{}\n", report.summary));
    }
    out
}

fn render_labelled(title: &str, labels: &[String], values: &[f64], precision: usize) -> String {
    let mut out = format!("{}\n", title);
    if labels.is_empty() {
        out.push_str("  (none)\n");
        return out;
    }
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    for (label, value) in labels.iter().zip(values) {
        out.push_str(&format!(
            "  {:<width$}  {:.precision$}\n",
            label,
            value,
            width = width,
            precision = precision
        ));
    }
    out
}

pub fn render_bars(title: &str, data: &BarData) -> String {
    render_labelled(title, &data.labels, &data.values, 0)
}

pub fn render_proportion(title: &str, data: &ProportionData) -> String {
    render_labelled(title, &data.labels, &data.values, 0)
}

pub fn render_vector(title: &str, data: &VectorData) -> String {
    render_labelled(title, &data.labels, &data.values, 2)
}

pub fn render_points(title: &str, data: &PointData) -> String {
    let mut out = format!("{}\n", title);
    for (i, p) in data.points.iter().enumerate() {
        out.push_str(&format!("  {:>3}  ({:.2}, {:.2})\n", i + 1, p.x, p.y));
    }
    out
}

pub fn render_sensory(profile: &SensoryProfile) -> String {
    format!(
        "Sensory words\n  visual     {}\n  auditory   {}\n  tactile    {}\n  olfactory  {}\n  gustatory  {}\n  emotion    {}\n",
        profile.visual,
        profile.auditory,
        profile.tactile,
        profile.olfactory,
        profile.gustatory,
        profile.emotion_word_hits
    )
}
