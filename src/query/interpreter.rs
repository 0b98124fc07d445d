//! Turns a free-text prompt into a [`FilterIntent`].

use super::intent::{Constraint, FilterIntent};
use super::phrases::{ComparisonMode, PhraseSets};
use super::stopwords::StopWords;
use super::tokenizer::{is_decimal, is_integer, tokenize};
use crate::config::Config;
use crate::error::{NumericField, QueryError};
use tracing::{debug, warn};

/// Keyword heuristics for shopping prompts.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    phrases: PhraseSets,
    stop_words: StopWords,
}

impl Interpreter {
    /// Creates an interpreter with the given phrase lists and stop words.
    pub fn new(phrases: PhraseSets, stop_words: StopWords) -> Self {
        Self { phrases, stop_words }
    }

    /// Creates an interpreter from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.phrases.clone(), StopWords::english_with(&config.extra_stop_words))
    }

    /// Parses `prompt` against the brands present in the dataset.
    ///
    /// Brand and price are looked up after stop-word removal; the brand token is
    /// consumed first so it can't be read as anything else. Rating and comparison
    /// phrases are read from the full token list. With no comparison phrase,
    /// price defaults to `<=` and rating to `==`.
    pub fn interpret(
        &self,
        prompt: &str,
        known_brands: &[String],
    ) -> Result<FilterIntent, QueryError> {
        let tokens = tokenize(prompt);
        let mut words = self.stop_words.remove_from(&tokens);

        let brand = find_brand(&words, known_brands);
        if let Some(brand) = &brand {
            if let Some(pos) = words.iter().position(|w| w == brand) {
                words.remove(pos);
            }
        }

        let price_literal = words.iter().find(|w| is_integer(w));
        let rating_literal = tokens.iter().find(|t| t.contains('.'));
        let mode = self.phrases.classify(&tokens);

        debug!(
            "Extracted brand={:?} price={:?} rating={:?} mode={:?}",
            brand, price_literal, rating_literal, mode
        );

        let mut intent =
            FilterIntent { brand, best_only: prompt.contains("best"), ..Default::default() };

        if let Some(literal) = price_literal {
            match mode.unwrap_or(ComparisonMode::LessOrEqual) {
                ComparisonMode::Range => {
                    let bounds = tokens
                        .iter()
                        .filter(|t| is_integer(t))
                        .map(|t| parse_price(t))
                        .collect::<Result<Vec<_>, _>>()?;
                    intent.price = range_of(&bounds);
                    if intent.price.is_none() {
                        warn!("Price range needs exactly two numbers, found {}", bounds.len());
                        intent.unresolved_range = true;
                    }
                }
                mode => intent.price = Constraint::single(mode, parse_price(literal)?),
            }
        }

        if let Some(literal) = rating_literal {
            match mode.unwrap_or(ComparisonMode::Exact) {
                ComparisonMode::Range => {
                    let bounds = tokens
                        .iter()
                        .filter(|t| is_decimal(t))
                        .map(|t| parse_rating(t))
                        .collect::<Result<Vec<_>, _>>()?;
                    intent.rating = range_of(&bounds);
                    if intent.rating.is_none() {
                        warn!("Rating range needs exactly two numbers, found {}", bounds.len());
                        intent.unresolved_range = true;
                    }
                }
                mode => intent.rating = Constraint::single(mode, parse_rating(literal)?),
            }
        }

        debug!(
            "Resolved price mode={:?} rating mode={:?}",
            intent.price.map(|c| c.mode()),
            intent.rating.map(|c| c.mode())
        );

        Ok(intent)
    }
}

/// Returns the first token naming a known brand, ignoring case.
fn find_brand(words: &[String], known_brands: &[String]) -> Option<String> {
    let brands: Vec<String> = known_brands.iter().map(|b| b.to_lowercase()).collect();
    words.iter().find(|w| brands.contains(&w.to_lowercase())).map(|w| w.to_lowercase())
}

fn range_of(bounds: &[f64]) -> Option<Constraint> {
    match bounds {
        [low, high] => Some(Constraint::range(*low, *high)),
        _ => None,
    }
}

fn parse_price(literal: &str) -> Result<f64, QueryError> {
    literal.parse::<u64>().map(|v| v as f64).map_err(|_| QueryError::MalformedNumber {
        field: NumericField::Price,
        literal: literal.to_string(),
    })
}

fn parse_rating(literal: &str) -> Result<f64, QueryError> {
    literal.parse::<f64>().map_err(|_| QueryError::MalformedNumber {
        field: NumericField::Rating,
        literal: literal.to_string(),
    })
}
