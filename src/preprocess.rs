// Text preprocessing for classification
// Deterministic and pure: same input always yields the same cleaned string.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

static RE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static RE_NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W").expect("valid regex"));

/// Standard English stopword list
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
        "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
        "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
        "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
        "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
        "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
        "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
        "with", "about", "against", "between", "into", "through", "during", "before", "after",
        "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
        "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
        "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
        "will", "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re",
        "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn",
        "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
        "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
        "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
        "wouldn't",
    ]
    .into_iter()
    .collect()
});

/// Clean raw bill text for the classifier: lower-case, strip digits, replace
/// non-word characters with spaces, collapse whitespace, drop stopwords and
/// stem the remaining tokens into a single space-joined string.
pub fn clean_text(text: &str) -> String {
    let text = text.to_lowercase();
    let text = RE_DIGITS.replace_all(&text, "");
    let text = RE_WHITESPACE.replace_all(&text, " ");
    let text = RE_NON_WORD.replace_all(&text, " ");

    let stemmer = Stemmer::create(Algorithm::English);

    text.split_whitespace()
        .filter(|word| !STOPWORDS.contains(word))
        .map(|word| stemmer.stem(word).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let input = "The Committee shall report on H.R. 1319 funding!";
        assert_eq!(clean_text(input), clean_text(input));
    }

    #[test]
    fn test_idempotent() {
        // Tokens chosen so every stem is its own fixed point
        let input = "The bill can fund health care for each veteran in 2024.";
        let once = clean_text(input);
        assert_eq!(once, "bill fund health care veteran");
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_strips_digits_and_punctuation() {
        let cleaned = clean_text("Section 2(a)(1): $400,000,000 per fiscal year");
        assert!(!cleaned.chars().any(|c| c.is_ascii_digit()));
        assert!(!cleaned.contains('$'));
        assert!(!cleaned.contains('('));
    }

    #[test]
    fn test_removes_stopwords() {
        let cleaned = clean_text("this is the act and it shall be law");
        assert!(!cleaned.split_whitespace().any(|w| w == "the"));
        assert!(!cleaned.split_whitespace().any(|w| w == "and"));
        assert!(cleaned.contains("law"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t "), "");
    }

    #[test]
    fn test_collapses_whitespace() {
        let cleaned = clean_text("postal   service\n\nreform");
        assert_eq!(cleaned, "postal servic reform");
    }
}
