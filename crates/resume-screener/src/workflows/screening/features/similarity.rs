use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

static WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").ok());

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "etc",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "him", "his", "how", "if", "in", "into", "is", "it", "its", "itself", "just", "may", "me",
    "more", "most", "must", "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "out", "over", "own", "per", "same", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "us", "very", "via", "was",
    "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "within", "would", "you", "your", "yours",
];

/// Text similarity provider used for the `tfidf_similarity` feature.
pub trait TextSimilarity: Send + Sync {
    /// Similarity in `[0, 1]`; `0` when either text is empty.
    fn similarity(&self, text_a: &str, text_b: &str) -> f64;
}

/// TF-IDF cosine similarity fit on just the two documents being compared.
///
/// Terms are lowercase word unigrams and bigrams (stop words removed first), weighted by raw
/// term frequency times smoothed IDF `ln((1 + n) / (1 + df)) + 1`, then L2-normalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfSimilarity;

impl TextSimilarity for TfIdfSimilarity {
    fn similarity(&self, text_a: &str, text_b: &str) -> f64 {
        let terms_a = term_counts(text_a);
        let terms_b = term_counts(text_b);
        if terms_a.is_empty() || terms_b.is_empty() {
            return 0.0;
        }

        let documents = 2.0_f64;
        let vocabulary: BTreeSet<&str> = terms_a
            .keys()
            .chain(terms_b.keys())
            .map(String::as_str)
            .collect();

        let mut dot = 0.0;
        let mut norm_a = 0.0;
        let mut norm_b = 0.0;
        for term in vocabulary {
            let tf_a = terms_a.get(term).copied().unwrap_or(0) as f64;
            let tf_b = terms_b.get(term).copied().unwrap_or(0) as f64;
            let df = f64::from(u8::from(tf_a > 0.0) + u8::from(tf_b > 0.0));
            let idf = ((1.0 + documents) / (1.0 + df)).ln() + 1.0;

            let weight_a = tf_a * idf;
            let weight_b = tf_b * idf;
            dot += weight_a * weight_b;
            norm_a += weight_a * weight_a;
            norm_b += weight_b * weight_b;
        }

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
    }
}

fn term_counts(text: &str) -> BTreeMap<String, usize> {
    let Some(word) = WORD.as_ref() else {
        return BTreeMap::new();
    };

    let lower = text.to_lowercase();
    let tokens: Vec<&str> = word
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|token| !STOP_WORDS.contains(token))
        .collect();

    let mut counts = BTreeMap::new();
    for token in &tokens {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    for pair in tokens.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}
