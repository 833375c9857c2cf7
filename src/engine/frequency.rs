use serde::Serialize;
use std::collections::HashMap;

/// A term and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTerm {
    pub term: String,
    pub count: usize,
}

impl RankedTerm {
    pub fn new(term: impl Into<String>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

pub fn frequencies<S: AsRef<str>>(tokens: &[S]) -> HashMap<String, usize> {
    let mut table = HashMap::new();
    for token in tokens {
        *table.entry(token.as_ref().to_string()).or_insert(0) += 1;
    }
    table
}

pub fn unique_count<S: AsRef<str>>(tokens: &[S]) -> usize {
    frequencies(tokens).len()
}

/// Ranks terms by count descending; equal counts keep first-occurrence order.
fn rank<I>(terms: I, n: usize, min_count: usize) -> Vec<RankedTerm>
where
    I: IntoIterator<Item = String>,
{
    if n == 0 {
        return Vec::new();
    }

    // term -> index into `ranked`, which is in first-occurrence order
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut ranked: Vec<RankedTerm> = Vec::new();

    for term in terms {
        match index.get(&term) {
            Some(&i) => ranked[i].count += 1,
            None => {
                index.insert(term.clone(), ranked.len());
                ranked.push(RankedTerm::new(term, 1));
            }
        }
    }

    // sort_by is stable, so ties stay in first-occurrence order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.retain(|t| t.count >= min_count);
    ranked.truncate(n);
    ranked
}

pub fn top_n<S: AsRef<str>>(tokens: &[S], n: usize, min_count: usize) -> Vec<RankedTerm> {
    rank(
        tokens.iter().map(|t| t.as_ref().to_string()),
        n,
        min_count,
    )
}

/// Adjacent token pairs, joined by a single space, ranked like unigrams.
pub fn bigrams<S: AsRef<str>>(tokens: &[S], n: usize, min_count: usize) -> Vec<RankedTerm> {
    let pairs = tokens
        .windows(2)
        .map(|w| format!("{} {}", w[0].as_ref(), w[1].as_ref()));
    rank(pairs, n, min_count)
}
