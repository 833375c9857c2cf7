//! Fixed word tables shared by every scorer.
//!
//! The tables are built once on first use and never mutated.

use lazy_static::lazy_static;
use std::collections::HashSet;

use super::emotion::Emotion;

// "not" and "no" are deliberately absent: the sentiment scorer needs them
// in the token stream for negation lookback.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "then", "else", "for", "to", "of", "in", "on",
    "at", "by", "is", "are", "was", "were", "be", "been", "being", "am", "i", "you", "he", "she",
    "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our",
    "their", "this", "that", "these", "those", "as", "with", "from", "about", "into", "over",
    "after", "before", "so", "than", "too", "very", "yes", "do", "does", "did", "doing", "done",
    "there", "here", "out", "up", "down", "off", "again", "once", "just", "only", "also", "can",
    "could", "should", "would", "will", "shall", "may", "might", "must",
];

const NEGATIONS: &[&str] = &["not", "no", "n't"];

const POSITIVE: &[&str] = &[
    "good", "great", "love", "loved", "loving", "happy", "joy", "wonderful", "excellent",
    "amazing", "positive", "bright", "success", "strong", "beautiful", "calm", "peace", "hope",
    "brave", "kind", "smile", "grace", "gift", "win", "wins", "winning",
];

const NEGATIVE: &[&str] = &[
    "bad", "worse", "worst", "hate", "hated", "angry", "anger", "sad", "awful", "terrible",
    "poor", "negative", "dark", "failure", "weak", "ugly", "fear", "pain", "worry", "loss",
    "lose", "losing", "cry", "cried", "tired", "broken",
];

const JOY: &[&str] = &["joy", "happy", "delight", "smile", "cheer", "pleasure", "glad"];
// "down" is also a stopword, so in practice it never reaches the scorer
const SADNESS: &[&str] = &["sad", "sorrow", "down", "unhappy", "cry", "tears"];
const ANGER: &[&str] = &["anger", "angry", "mad", "furious", "rage"];
const FEAR: &[&str] = &["fear", "afraid", "scared", "anxious", "anxiety", "worry"];
const SURPRISE: &[&str] = &["surprise", "astonished", "amazed", "wow", "unexpected"];
const DISGUST: &[&str] = &["disgust", "gross", "nasty", "revolting", "sickening"];

// The arc uses its own, narrower joy and sadness vocabulary.
const ARC_JOY: &[&str] = &["joy", "happy", "delight", "pleased", "smile", "love"];
const ARC_SADNESS: &[&str] = &["sad", "sorrow", "tears", "gloom", "grief"];

const VISUAL: &[&str] = &[
    "see", "look", "light", "dark", "bright", "color", "shadow", "eyes", "shine",
];
const AUDITORY: &[&str] = &["hear", "sound", "whisper", "ring", "echo", "noise", "voice"];
const TACTILE: &[&str] = &[
    "touch", "soft", "hard", "rough", "smooth", "warm", "cold", "texture",
];
const OLFACTORY: &[&str] = &["smell", "odor", "fragrance", "scent"];
const GUSTATORY: &[&str] = &["taste", "sweet", "bitter", "sour", "salty"];
const EMOTION_WORDS: &[&str] = &[
    "love", "fear", "joy", "sad", "anger", "hope", "grief", "delight", "proud",
];

fn set(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

lazy_static! {
    static ref STOPWORD_SET: HashSet<&'static str> = set(STOPWORDS);
    static ref NEGATION_SET: HashSet<&'static str> = set(NEGATIONS);
    static ref POSITIVE_SET: HashSet<&'static str> = set(POSITIVE);
    static ref NEGATIVE_SET: HashSet<&'static str> = set(NEGATIVE);
    static ref EMOTION_SETS: [HashSet<&'static str>; 6] = [
        set(JOY),
        set(SADNESS),
        set(ANGER),
        set(FEAR),
        set(SURPRISE),
        set(DISGUST),
    ];
    static ref SENSE_SETS: [HashSet<&'static str>; 5] = [
        set(VISUAL),
        set(AUDITORY),
        set(TACTILE),
        set(OLFACTORY),
        set(GUSTATORY),
    ];
    static ref EMOTION_WORD_SET: HashSet<&'static str> = set(EMOTION_WORDS);
    static ref ARC_JOY_SET: HashSet<&'static str> = set(ARC_JOY);
    static ref ARC_SADNESS_SET: HashSet<&'static str> = set(ARC_SADNESS);
}

/// Sensory channels, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sense {
    Visual,
    Auditory,
    Tactile,
    Olfactory,
    Gustatory,
}

impl Sense {
    pub const ALL: [Sense; 5] = [
        Sense::Visual,
        Sense::Auditory,
        Sense::Tactile,
        Sense::Olfactory,
        Sense::Gustatory,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

/// True for "not", "no", a bare "n't", and contractions such as "don't".
pub fn is_negation(token: &str) -> bool {
    NEGATION_SET.contains(token) || token.ends_with("n't") || token.ends_with("n\u{2019}t")
}

pub fn is_positive(token: &str) -> bool {
    POSITIVE_SET.contains(token)
}

pub fn is_negative(token: &str) -> bool {
    NEGATIVE_SET.contains(token)
}

pub fn in_emotion(emotion: Emotion, token: &str) -> bool {
    EMOTION_SETS[emotion.index()].contains(token)
}

pub fn in_sense(sense: Sense, token: &str) -> bool {
    SENSE_SETS[sense.index()].contains(token)
}

pub fn is_emotion_word(token: &str) -> bool {
    EMOTION_WORD_SET.contains(token)
}

pub fn is_arc_joy(token: &str) -> bool {
    ARC_JOY_SET.contains(token)
}

pub fn is_arc_sadness(token: &str) -> bool {
    ARC_SADNESS_SET.contains(token)
}
