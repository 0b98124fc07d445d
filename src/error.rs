//! User-facing query errors.

use thiserror::Error;

/// Errors produced while interpreting a prompt or answering a request.
///
/// These never abort the process: commands render them as a message on the
/// same output path as a successful result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The prompt carried no brand, price, rating or "best" signal.
    #[error("Could not understand the query. Mention a brand, a price, a rating or ask for the best.")]
    EmptyQuery,

    /// Filters narrowed the dataset down to nothing.
    #[error("No results found for the given criteria.")]
    NoResults,

    /// Dashboard lookup for a brand that has no listings.
    #[error("Brand not found: {0}")]
    BrandNotFound(String),

    /// A numeric token was present but could not be parsed.
    #[error("Invalid {field} value: '{literal}'")]
    MalformedNumber { field: NumericField, literal: String },
}

/// Which prompt field a numeric literal was extracted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Price,
    Rating,
}

impl std::fmt::Display for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericField::Price => write!(f, "price"),
            NumericField::Rating => write!(f, "rating"),
        }
    }
}
