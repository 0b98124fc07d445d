//! Splits a prompt into lowercase word tokens.

use regex_lite::Regex;
use std::sync::LazyLock;

// Digit groups with thousands separators ("20,000"), else word runs optionally
// joined by '.' or '\'' so "4.5", "4.5.6" and "don't" stay whole.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:,\d{3})+\b|\w+(?:[.']\w+)*").unwrap());

/// Tokenizes `text` into lowercase words, dropping punctuation and whitespace.
///
/// Thousands separators are stripped, so "20,000" becomes "20000".
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower).map(|m| m.as_str().replace(',', "")).collect()
}

/// Returns true if the token is a non-empty run of ASCII digits.
pub fn is_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if the token is digits with at most one '.' (e.g. "4", "4.5").
pub fn is_decimal(token: &str) -> bool {
    let mut parts = token.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    match parts.next() {
        Some(frac) => {
            (whole.is_empty() || is_integer(whole))
                && (frac.is_empty() || is_integer(frac))
                && !(whole.is_empty() && frac.is_empty())
        }
        None => is_integer(whole),
    }
}
