//! Chart-ready records for an external rendering layer.
//!
//! Every adapter takes raw text and returns plain data; nothing here knows
//! about a plotting library.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::config::PaddingStrategy;
use super::emotion::{self, Emotion};
use super::frequency::{bigrams, top_n, RankedTerm};
use super::sentiment::{score_with_divisor, sentiment_timeline_with, DEFAULT_NEUTRAL_DIVISOR};
use super::tokenizer::tokens;

const SCATTER_RANGE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BarData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PointData {
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProportionData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VectorData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartRecord {
    Bar(BarData),
    Points(PointData),
    Proportion(ProportionData),
    Vector(VectorData),
}

fn to_bars(ranked: Vec<RankedTerm>) -> BarData {
    let (labels, values) = ranked
        .into_iter()
        .map(|t| (t.term, t.count as f64))
        .unzip();
    BarData { labels, values }
}

pub fn keywords_bars(text: &str, n: usize) -> BarData {
    keywords_bars_with(text, n, 1)
}

/// Top `n` keywords seen at least `min_count` times.
pub fn keywords_bars_with(text: &str, n: usize, min_count: usize) -> BarData {
    to_bars(top_n(&tokens(text), n, min_count))
}

pub fn bigram_bars(text: &str, n: usize) -> BarData {
    bigram_bars_with(text, n, 1)
}

pub fn bigram_bars_with(text: &str, n: usize, min_count: usize) -> BarData {
    to_bars(bigrams(&tokens(text), n, min_count))
}

/// 31-multiplier rolling hash, wrapping at 32 bits.
///
/// Each code point contributes its first UTF-16 unit, so characters outside
/// the BMP add only their high surrogate.
fn rolling_hash(s: &str) -> u32 {
    let mut buf = [0u16; 2];
    s.chars().fold(0u32, |h, c| {
        let unit = c.encode_utf16(&mut buf)[0];
        h.wrapping_mul(31).wrapping_add(unit as u32)
    })
}

/// Scales a 16-bit half into [0,10), truncated to two decimals.
fn scale_half(half: u32) -> f64 {
    let v = (half & 0xffff) as f64 / 65536.0 * SCATTER_RANGE;
    (v * 100.0).floor() / 100.0
}

fn hash_point(term: &str) -> Point {
    let h = rolling_hash(term);
    Point {
        x: scale_half(h),
        y: scale_half(h >> 16),
    }
}

/// Exactly `count` scatter points: one per top bigram, then padding.
///
/// Bigram points are deterministic. Padding follows `padding`; with
/// [`PaddingStrategy::Random`] repeated calls differ.
pub fn theme_points(text: &str, count: usize, padding: PaddingStrategy) -> PointData {
    let mut points: Vec<Point> = bigrams(&tokens(text), count, 1)
        .iter()
        .map(|t| hash_point(&t.term))
        .collect();

    let missing = count - points.len();
    if missing > 0 {
        tracing::debug!(missing, ?padding, "padding theme points");
        match padding {
            PaddingStrategy::Random => pad(&mut points, count, &mut rand::thread_rng()),
            PaddingStrategy::Seeded(seed) => {
                pad(&mut points, count, &mut StdRng::seed_from_u64(seed))
            }
        }
    }

    PointData { points }
}

fn pad<R: Rng>(points: &mut Vec<Point>, count: usize, rng: &mut R) {
    while points.len() < count {
        points.push(Point {
            x: rng.gen_range(0.0..SCATTER_RANGE),
            y: rng.gen_range(0.0..SCATTER_RANGE),
        });
    }
}

pub fn sentiment_donut(text: &str) -> ProportionData {
    sentiment_donut_with(text, DEFAULT_NEUTRAL_DIVISOR)
}

/// Donut split with `divisor` tokens per unit of neutral mass.
pub fn sentiment_donut_with(text: &str, divisor: usize) -> ProportionData {
    let s = score_with_divisor(&tokens(text), divisor);
    ProportionData {
        labels: vec![
            "Positive".to_string(),
            "Neutral".to_string(),
            "Negative".to_string(),
        ],
        values: vec![s.positive as f64, s.neutral() as f64, s.negative as f64],
    }
}

fn emotion_labels() -> Vec<String> {
    Emotion::ALL.iter().map(|e| e.label().to_string()).collect()
}

pub fn emotion_radar(text: &str) -> VectorData {
    VectorData {
        labels: emotion_labels(),
        values: emotion::emotions(text).scores().to_vec(),
    }
}

/// Raw emotion hit counts, for a bar view next to the radar.
pub fn emotion_counts_bars(text: &str) -> BarData {
    BarData {
        labels: emotion_labels(),
        values: emotion::raw_counts(&tokens(text))
            .iter()
            .map(|&c| c as f64)
            .collect(),
    }
}

pub fn sentiment_timeline_bars(text: &str, parts: usize) -> BarData {
    sentiment_timeline_bars_with(text, parts, DEFAULT_NEUTRAL_DIVISOR)
}

pub fn sentiment_timeline_bars_with(text: &str, parts: usize, divisor: usize) -> BarData {
    let (labels, values) = sentiment_timeline_with(text, parts, divisor)
        .into_iter()
        .enumerate()
        .map(|(i, v)| (format!("Part {}", i + 1), v as f64))
        .unzip();
    BarData { labels, values }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_bars() {
        let bars = keywords_bars("apple banana apple cherry", 2);
        assert_eq!(bars.labels, vec!["apple", "banana"]);
        assert_eq!(bars.values, vec![2.0, 1.0]);
    }

    #[test]
    fn test_keywords_bars_empty_text() {
        assert_eq!(keywords_bars("", 7), BarData::default());
    }

    #[test]
    fn test_bigram_bars() {
        let bars = bigram_bars("red fox red fox", 1);
        assert_eq!(bars.labels, vec!["red fox"]);
        assert_eq!(bars.values, vec![2.0]);
    }

    #[test]
    fn test_rolling_hash_known_values() {
        assert_eq!(rolling_hash(""), 0);
        assert_eq!(rolling_hash("a"), 97);
        assert_eq!(rolling_hash("ab"), 97 * 31 + 98);
    }

    #[test]
    fn test_rolling_hash_astral_uses_high_surrogate() {
        // U+1F600 is D83D DE00 in UTF-16
        assert_eq!(rolling_hash("\u{1F600}"), 0xD83D);
        assert_eq!(rolling_hash("a\u{1F600}"), 97 * 31 + 0xD83D);
        assert_eq!(rolling_hash("\u{e9}"), 0xE9);
    }

    #[test]
    fn test_rolling_hash_wraps() {
        // long input must not overflow-panic
        let long = "z".repeat(1000);
        let _ = rolling_hash(&long);
    }

    #[test]
    fn test_hash_point_in_range() {
        let p = hash_point("river calm");
        assert!((0.0..SCATTER_RANGE).contains(&p.x));
        assert!((0.0..SCATTER_RANGE).contains(&p.y));
    }

    #[test]
    fn test_scale_half_bounds() {
        assert_eq!(scale_half(0), 0.0);
        assert_eq!(scale_half(0xffff), 9.99);
        assert_eq!(scale_half(0x8000), 5.0);
    }

    #[test]
    fn test_theme_points_exact_count_without_bigrams() {
        let points = theme_points("", 5, PaddingStrategy::Random);
        assert_eq!(points.points.len(), 5);
        for p in &points.points {
            assert!((0.0..SCATTER_RANGE).contains(&p.x));
            assert!((0.0..SCATTER_RANGE).contains(&p.y));
        }
    }

    #[test]
    fn test_theme_points_truncates_to_count() {
        let text = "one two three four five six seven eight nine ten";
        let points = theme_points(text, 3, PaddingStrategy::Random);
        assert_eq!(points.points.len(), 3);
        assert_eq!(points.points[0], hash_point("one two"));
    }

    #[test]
    fn test_theme_points_bigram_points_deterministic() {
        let text = "quiet harbor quiet harbor morning tide";
        let a = theme_points(text, 3, PaddingStrategy::Random);
        let b = theme_points(text, 3, PaddingStrategy::Random);
        assert_eq!(a, b);
    }

    #[test]
    fn test_theme_points_seeded_padding_reproducible() {
        let a = theme_points("lonely word", 6, PaddingStrategy::Seeded(7));
        let b = theme_points("lonely word", 6, PaddingStrategy::Seeded(7));
        assert_eq!(a.points.len(), 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_theme_points_zero() {
        assert!(theme_points("a b c", 0, PaddingStrategy::Random).points.is_empty());
    }

    #[test]
    fn test_sentiment_donut_sums_to_hundred() {
        let donut = sentiment_donut("good bad river");
        assert_eq!(donut.labels, vec!["Positive", "Neutral", "Negative"]);
        assert_eq!(donut.values.iter().sum::<f64>(), 100.0);
    }

    #[test]
    fn test_sentiment_donut_empty_is_all_neutral() {
        assert_eq!(sentiment_donut("").values, vec![0.0, 100.0, 0.0]);
    }

    #[test]
    fn test_sentiment_donut_with_divisor() {
        let donut = sentiment_donut_with("good river stone tree", 1);
        assert_eq!(donut.values, vec![20.0, 80.0, 0.0]);
        assert_eq!(sentiment_donut("good river stone tree").values, vec![100.0, 0.0, 0.0]);
    }

    #[test]
    fn test_keywords_bars_with_min_count() {
        let bars = keywords_bars_with("river river stone tree", 7, 2);
        assert_eq!(bars.labels, vec!["river"]);
        assert_eq!(bars.values, vec![2.0]);
        assert!(bigram_bars_with("river river stone tree", 10, 2).labels.is_empty());
    }

    #[test]
    fn test_emotion_radar_zero_vector() {
        let radar = emotion_radar("plain words only");
        assert_eq!(radar.labels.len(), 6);
        assert_eq!(radar.values, vec![0.0; 6]);
    }

    #[test]
    fn test_emotion_counts_bars() {
        let bars = emotion_counts_bars("happy happy rage");
        assert_eq!(bars.values, vec![2.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_sentiment_timeline_bars_labels() {
        let bars = sentiment_timeline_bars("Good day. Bad day.", 12);
        assert_eq!(bars.labels, vec!["Part 1", "Part 2"]);
    }

    #[test]
    fn test_sentiment_timeline_bars_empty_text() {
        assert_eq!(sentiment_timeline_bars("", 12), BarData::default());
    }

    #[test]
    fn test_chart_record_json_tag() {
        let record = ChartRecord::Bar(keywords_bars("apple", 1));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"kind\":\"bar\""));
        assert!(json.contains("\"apple\""));
    }
}
