// TF-IDF vectorizer

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// Word tokens of two or more characters
static RE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

/// Learns a vocabulary and smoothed inverse document frequencies from a
/// corpus, then maps documents to L2-normalized sparse TF-IDF vectors.
/// Terms unseen during fitting are ignored at transform time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn the vocabulary and IDF weights from a document corpus
    pub fn fit(docs: &[String]) -> Self {
        let n_docs = docs.len();

        // Document frequency per term
        let mut df: HashMap<String, usize> = HashMap::new();
        for doc in docs {
            let terms: HashSet<String> = tokenize(doc).into_iter().collect();
            for term in terms {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        // Stable feature order: terms sorted lexicographically
        let mut terms: Vec<String> = df.keys().cloned().collect();
        terms.sort();

        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (index, term) in terms.into_iter().enumerate() {
            let term_df = df[&term];
            // Smoothed IDF: ln((1 + n) / (1 + df)) + 1
            let weight = (((1 + n_docs) as f64) / ((1 + term_df) as f64)).ln() + 1.0;
            vocabulary.insert(term, index);
            idf.push(weight);
        }

        Self { vocabulary, idf }
    }

    /// Map a document to a sparse L2-normalized TF-IDF vector keyed by
    /// feature index
    pub fn transform(&self, doc: &str) -> HashMap<usize, f64> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(doc) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        for (index, value) in counts.iter_mut() {
            *value *= self.idf[*index];
        }

        // L2 normalization
        let norm: f64 = counts.values().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in counts.values_mut() {
                *value /= norm;
            }
        }

        counts
    }

    pub fn n_features(&self) -> usize {
        self.idf.len()
    }
}

fn tokenize(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    RE_TOKEN
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "tax relief for small business".to_string(),
            "small business tax credit".to_string(),
            "healthcare funding expansion".to_string(),
        ]
    }

    #[test]
    fn test_fit_builds_vocabulary() {
        let vectorizer = TfidfVectorizer::fit(&corpus());
        assert_eq!(vectorizer.n_features(), 9);
        assert!(vectorizer.vocabulary.contains_key("tax"));
        assert!(vectorizer.vocabulary.contains_key("healthcare"));
    }

    #[test]
    fn test_rare_terms_weigh_more_than_common() {
        let vectorizer = TfidfVectorizer::fit(&corpus());
        let common = vectorizer.idf[vectorizer.vocabulary["tax"]]; // df = 2
        let rare = vectorizer.idf[vectorizer.vocabulary["healthcare"]]; // df = 1
        assert!(rare > common);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let vectorizer = TfidfVectorizer::fit(&corpus());
        let vector = vectorizer.transform("small business tax relief");
        let norm: f64 = vector.values().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unseen_terms_ignored() {
        let vectorizer = TfidfVectorizer::fit(&corpus());
        let vector = vectorizer.transform("cryptocurrency regulation");
        assert!(vector.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let vectorizer = TfidfVectorizer::fit(&corpus());
        assert!(vectorizer.transform("").is_empty());
    }

    #[test]
    fn test_single_char_tokens_dropped() {
        let vectorizer = TfidfVectorizer::fit(&["a b tax".to_string()]);
        assert_eq!(vectorizer.n_features(), 1);
    }
}
