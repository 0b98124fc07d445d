//! English stop words excluded from brand and price scanning.

use std::collections::HashSet;

/// Common English function words.
pub const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// A lowercase stop-word set.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The English list plus any extra words (matched case-insensitively).
    pub fn english_with(extra: &[String]) -> Self {
        let words = ENGLISH
            .iter()
            .map(|w| w.to_string())
            .chain(extra.iter().map(|w| w.to_lowercase()))
            .collect();
        Self { words }
    }

    /// Returns true if `token` is a stop word.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Returns the tokens that are not stop words, in order.
    pub fn remove_from(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().filter(|t| !self.contains(t)).cloned().collect()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english_with(&[])
    }
}
