use serde::Serialize;

use super::lexicon::{is_negation, is_negative, is_positive};
use super::tokenizer::{sentences, tokens};

pub(crate) const DEFAULT_NEUTRAL_DIVISOR: usize = 60;

/// Polarity percentages; neutral is whatever remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SentimentResult {
    pub positive: u32,
    pub negative: u32,
}

impl SentimentResult {
    pub fn neutral(&self) -> u32 {
        100u32.saturating_sub(self.positive + self.negative)
    }
}

/// Scores a token sequence with one-token negation lookback.
pub fn score<S: AsRef<str>>(tokens: &[S]) -> SentimentResult {
    score_with_divisor(tokens, DEFAULT_NEUTRAL_DIVISOR)
}

/// Like [`score`], with `divisor` tokens per unit of implicit neutral mass.
pub fn score_with_divisor<S: AsRef<str>>(tokens: &[S], divisor: usize) -> SentimentResult {
    if tokens.is_empty() {
        return SentimentResult::default();
    }

    let mut positive = 0usize;
    let mut negative = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        let negated = i > 0 && is_negation(tokens[i - 1].as_ref());

        if is_positive(token) {
            if negated {
                negative += 1;
            } else {
                positive += 1;
            }
        } else if is_negative(token) {
            if negated {
                positive += 1;
            } else {
                negative += 1;
            }
        }
    }

    let neutral_mass = (tokens.len() as f64 / divisor.max(1) as f64).round() as usize;
    let total = (positive + negative + neutral_mass).max(1) as f64;

    SentimentResult {
        positive: (positive as f64 / total * 100.0).round() as u32,
        negative: (negative as f64 / total * 100.0).round() as u32,
    }
}

#[tracing::instrument(skip_all)]
pub fn sentiment(text: &str) -> SentimentResult {
    score(&tokens(text))
}

/// Positive percentage per chunk of consecutive sentences.
///
/// Sentences are grouped into at most `parts` chunks of equal size. Once the
/// text has a terminated sentence, a trailing fragment without `.`, `!` or
/// `?` is left out; text with no terminator is scored as one sentence. Blank
/// text gives an empty timeline.
pub fn sentiment_timeline(text: &str, parts: usize) -> Vec<u32> {
    sentiment_timeline_with(text, parts, DEFAULT_NEUTRAL_DIVISOR)
}

/// Like [`sentiment_timeline`], scoring each chunk with `divisor`.
pub fn sentiment_timeline_with(text: &str, parts: usize, divisor: usize) -> Vec<u32> {
    let mut sentences = sentences(text);
    if sentences.iter().any(|s| is_terminated(s)) {
        sentences.retain(|s| is_terminated(s));
    }
    if sentences.is_empty() {
        return Vec::new();
    }

    let chunk_size = sentences.len().div_ceil(parts.max(1)).max(1);
    sentences
        .chunks(chunk_size)
        .map(|chunk| score_with_divisor(&tokens(&chunk.join(" ")), divisor).positive)
        .collect()
}

fn is_terminated(sentence: &str) -> bool {
    sentence
        .trim_end_matches(|c: char| matches!(c, '"' | '\'' | '\u{201d}' | '\u{2019}' | ')'))
        .ends_with(['.', '!', '?'])
}
