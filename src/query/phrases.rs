//! Comparison phrases and the classifier that maps tokens to a comparison mode.

use serde::{Deserialize, Serialize};

/// How a numeric constraint compares against a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    LessOrEqual,
    GreaterThan,
    Range,
    Exact,
}

impl std::fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparisonMode::LessOrEqual => write!(f, "<="),
            ComparisonMode::GreaterThan => write!(f, ">"),
            ComparisonMode::Range => write!(f, "range"),
            ComparisonMode::Exact => write!(f, "=="),
        }
    }
}

/// Phrase lists that signal each comparison mode.
///
/// Phrases may span several words ("less than"); they match consecutive tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseSets {
    #[serde(default = "default_lesser")]
    pub lesser: Vec<String>,

    #[serde(default = "default_greater")]
    pub greater: Vec<String>,

    #[serde(default = "default_range")]
    pub range: Vec<String>,
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_lesser() -> Vec<String> {
    to_strings(&["lesser", "less than", "less", "smaller", "under", "below"])
}

fn default_greater() -> Vec<String> {
    to_strings(&["greater", "above", "more than", "starting"])
}

fn default_range() -> Vec<String> {
    to_strings(&["between", "range", "from"])
}

impl Default for PhraseSets {
    fn default() -> Self {
        Self { lesser: default_lesser(), greater: default_greater(), range: default_range() }
    }
}

impl PhraseSets {
    /// Returns the mode signalled by `tokens`, checking lesser, then greater, then range.
    pub fn classify(&self, tokens: &[String]) -> Option<ComparisonMode> {
        if any_phrase(&self.lesser, tokens) {
            Some(ComparisonMode::LessOrEqual)
        } else if any_phrase(&self.greater, tokens) {
            Some(ComparisonMode::GreaterThan)
        } else if any_phrase(&self.range, tokens) {
            Some(ComparisonMode::Range)
        } else {
            None
        }
    }
}

fn any_phrase(phrases: &[String], tokens: &[String]) -> bool {
    phrases.iter().any(|phrase| contains_phrase(tokens, phrase))
}

fn contains_phrase(tokens: &[String], phrase: &str) -> bool {
    let words: Vec<String> = phrase.split_whitespace().map(|w| w.to_lowercase()).collect();
    if words.is_empty() {
        return false;
    }
    tokens.windows(words.len()).any(|window| window == words.as_slice())
}
