use serde::Serialize;
use std::fmt;

use super::lexicon::{in_emotion, is_arc_joy, is_arc_sadness};
use super::tokenizer::tokens;

/// Emotion categories in their fixed enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized scores in [0,1], indexed by [`Emotion::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EmotionVector {
    scores: [f64; 6],
}

impl EmotionVector {
    pub fn get(&self, emotion: Emotion) -> f64 {
        self.scores[emotion.index()]
    }

    pub fn scores(&self) -> &[f64; 6] {
        &self.scores
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.iter().map(move |&e| (e, self.get(e)))
    }

    pub fn is_zero(&self) -> bool {
        self.scores.iter().all(|&s| s == 0.0)
    }

    /// Highest scoring category; ties go to the earlier category.
    /// `None` when nothing scored.
    pub fn dominant(&self) -> Option<Emotion> {
        if self.is_zero() {
            return None;
        }
        let mut best = Emotion::Joy;
        for emotion in Emotion::ALL {
            if self.get(emotion) > self.get(best) {
                best = emotion;
            }
        }
        Some(best)
    }
}

/// Raw hits per category. A token counts toward every list containing it.
pub fn raw_counts<S: AsRef<str>>(tokens: &[S]) -> [usize; 6] {
    let mut counts = [0usize; 6];
    for token in tokens {
        for emotion in Emotion::ALL {
            if in_emotion(emotion, token.as_ref()) {
                counts[emotion.index()] += 1;
            }
        }
    }
    counts
}

pub fn score<S: AsRef<str>>(tokens: &[S]) -> EmotionVector {
    let counts = raw_counts(tokens);
    let max = counts.iter().copied().max().unwrap_or(0).max(1) as f64;

    let mut scores = [0.0; 6];
    for (score, &count) in scores.iter_mut().zip(counts.iter()) {
        *score = (count as f64 / max * 100.0).round() / 100.0;
    }
    EmotionVector { scores }
}

#[tracing::instrument(skip_all)]
pub fn emotions(text: &str) -> EmotionVector {
    score(&tokens(text))
}

pub fn dominant_emotion(text: &str) -> Option<Emotion> {
    emotions(text).dominant()
}

/// Joy minus sadness per segment of the token stream, floored at zero.
///
/// Uses the arc vocabulary, which differs from the radar's joy and sadness
/// lists ("love" counts as joy, "gloom" and "grief" as sadness).
pub fn emotional_arc<S: AsRef<str>>(tokens: &[S], segments: usize) -> Vec<usize> {
    let chunk_size = (tokens.len() / segments.max(1)).max(1);
    tokens
        .chunks(chunk_size)
        .map(|chunk| {
            let (mut joy, mut sadness) = (0usize, 0usize);
            for token in chunk {
                let token = token.as_ref();
                if is_arc_joy(token) {
                    joy += 1;
                } else if is_arc_sadness(token) {
                    sadness += 1;
                }
            }
            joy.saturating_sub(sadness)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_emotion_words_is_zero_vector() {
        let vector = emotions("The river flows past the stone bridge.");
        assert_eq!(vector.scores(), &[0.0; 6]);
        assert!(vector.is_zero());
        assert_eq!(vector.dominant(), None);
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        assert!(emotions("").is_zero());
    }

    #[test]
    fn test_normalized_against_max() {
        let vector = emotions("happy glad joy sad furious");
        assert_eq!(vector.get(Emotion::Joy), 1.0);
        assert_eq!(vector.get(Emotion::Sadness), 0.33);
        assert_eq!(vector.get(Emotion::Anger), 0.33);
        assert_eq!(vector.get(Emotion::Fear), 0.0);
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let vector = emotions("afraid scared worry wow gross happy happy");
        for (_, score) in vector.iter() {
            assert!((0.0..=1.0).contains(&score));
        }
        assert_eq!(vector.get(Emotion::Fear), 1.0);
    }

    #[test]
    fn test_dominant_tie_uses_enumeration_order() {
        let vector = emotions("rage afraid");
        assert_eq!(vector.get(Emotion::Anger), 1.0);
        assert_eq!(vector.get(Emotion::Fear), 1.0);
        assert_eq!(vector.dominant(), Some(Emotion::Anger));
    }

    #[test]
    fn test_dominant_emotion_from_text() {
        assert_eq!(dominant_emotion("tears sorrow smile"), Some(Emotion::Sadness));
    }

    #[test]
    fn test_raw_counts() {
        let tokens = ["wow", "unexpected", "nasty"];
        assert_eq!(raw_counts(&tokens), [0, 0, 0, 0, 2, 1]);
    }

    #[test]
    fn test_labels_in_order() {
        let labels: Vec<&str> = Emotion::ALL.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            vec!["joy", "sadness", "anger", "fear", "surprise", "disgust"]
        );
    }

    #[test]
    fn test_emotional_arc() {
        let tokens = ["happy", "sad", "love", "river", "grief", "pleased"];
        // 6 tokens / 3 segments = chunks of 2
        assert_eq!(emotional_arc(&tokens, 3), vec![0, 1, 0]);
    }

    #[test]
    fn test_emotional_arc_uses_arc_vocabulary() {
        // "glad" is radar joy only; "gloom" is arc sadness only
        let tokens = ["glad", "love", "love", "gloom"];
        assert_eq!(emotional_arc(&tokens, 2), vec![1, 0]);
    }

    #[test]
    fn test_emotional_arc_short_input() {
        let tokens = ["happy"];
        assert_eq!(emotional_arc(&tokens, 20), vec![1]);
        let empty: [&str; 0] = [];
        assert!(emotional_arc(&empty, 20).is_empty());
    }
}
