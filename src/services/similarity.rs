//! Bag-of-words cosine similarity between two short documents.
//!
//! Each document is turned into a raw term-count vector over the vocabulary
//! shared by the pair. Tokens are lower-cased alphanumeric runs of at least
//! two characters.

use std::collections::BTreeMap;

const MIN_TOKEN_LEN: usize = 2;

pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

fn term_counts(tokens: &[String]) -> BTreeMap<&str, f64> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }

    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}

/// Cosine similarity of the two texts as a percentage rounded to 2 decimals.
pub fn similarity_percent(left: &str, right: &str) -> f64 {
    let left_tokens = tokenize(left);
    let right_tokens = tokenize(right);
    let left_counts = term_counts(&left_tokens);
    let right_counts = term_counts(&right_tokens);

    let mut vocabulary: Vec<&str> = left_counts.keys().chain(right_counts.keys()).copied().collect();
    vocabulary.sort_unstable();
    vocabulary.dedup();

    let cosine = cosine_similarity(
        &vectorize(&vocabulary, &left_counts),
        &vectorize(&vocabulary, &right_counts),
    );
    round_to_hundredths(cosine.clamp(0.0, 1.0) * 100.0)
}

fn vectorize(vocabulary: &[&str], counts: &BTreeMap<&str, f64>) -> Vec<f64> {
    vocabulary
        .iter()
        .map(|term| counts.get(*term).copied().unwrap_or(0.0))
        .collect()
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
