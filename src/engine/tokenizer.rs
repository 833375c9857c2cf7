use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use super::lexicon::is_stopword;

lazy_static! {
    // Letter/digit run, optional #/@ prefix, internal ' ’ - _ never at the edge.
    static ref WORDISH: Regex =
        Regex::new(r"[#@]?[\p{L}\p{N}](?:[\p{L}\p{N}'\x{2019}_-]*[\p{L}\p{N}])?")
            .expect("word pattern is valid");
}

const TRIM_CHARS: &[char] = &['\'', '\u{2019}', '_', ' ', '-'];

const ABBREVIATIONS: &[&str] = &[
    "Dr.", "Mr.", "Mrs.", "Ms.", "St.", "Jr.", "e.g.", "i.e.", "vs.", "etc.",
];

/// Decompose and drop combining marks, so "café" matches "cafe".
pub fn normalize(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// All word-ish spans, stopwords included.
pub fn word_spans(text: &str) -> Vec<&str> {
    WORDISH.find_iter(text).map(|m| m.as_str()).collect()
}

/// The canonical token sequence every scorer consumes.
#[tracing::instrument(skip_all)]
pub fn tokens(text: &str) -> Vec<String> {
    let folded = normalize(text);
    let tokens: Vec<String> = word_spans(&folded)
        .into_iter()
        .map(|w| w.to_lowercase())
        .map(|w| w.trim_matches(TRIM_CHARS).to_string())
        .filter(|w| !w.is_empty() && !is_stopword(w))
        .collect();
    tracing::debug!(count = tokens.len(), "tokenized");
    tokens
}

pub fn word_count(text: &str) -> usize {
    WORDISH.find_iter(text).count()
}

pub fn read_time_minutes(word_count: usize) -> usize {
    read_time_minutes_at(word_count, 200)
}

/// Minutes to read `word_count` words at `wpm`; never less than one.
pub fn read_time_minutes_at(word_count: usize, wpm: usize) -> usize {
    word_count.div_ceil(wpm.max(1)).max(1)
}

fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS.contains(&word)
}

fn ends_with_abbreviation(segment: &str) -> bool {
    segment
        .split_whitespace()
        .last()
        .map_or(false, is_abbreviation)
}

/// Splits text into trimmed sentences.
///
/// Sentence bounds come from UAX #29, which already keeps decimals like
/// "3.14" intact. A bound directly after an abbreviation ("Dr.", "e.g.")
/// is merged back into the running sentence.
pub fn sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for segment in text.split_sentence_bounds() {
        current.push_str(segment);
        if ends_with_abbreviation(segment) {
            continue;
        }
        let trimmed = current.trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed.to_string());
        }
        current.clear();
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }

    sentences
}
