//! Structured form of a parsed prompt.

use super::phrases::ComparisonMode;
use serde::Serialize;

/// A numeric comparison with its bound(s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Constraint {
    LessOrEqual { value: f64 },
    GreaterThan { value: f64 },
    /// Bounds in the order they appeared in the prompt; never swapped.
    Range { low: f64, high: f64 },
    Exact { value: f64 },
}

impl Constraint {
    /// Builds a single-bound constraint. Returns None for `Range`, which needs two bounds.
    pub fn single(mode: ComparisonMode, value: f64) -> Option<Self> {
        match mode {
            ComparisonMode::LessOrEqual => Some(Constraint::LessOrEqual { value }),
            ComparisonMode::GreaterThan => Some(Constraint::GreaterThan { value }),
            ComparisonMode::Exact => Some(Constraint::Exact { value }),
            ComparisonMode::Range => None,
        }
    }

    /// Builds a range constraint.
    pub fn range(low: f64, high: f64) -> Self {
        Constraint::Range { low, high }
    }

    /// Returns the comparison mode.
    pub fn mode(&self) -> ComparisonMode {
        match self {
            Constraint::LessOrEqual { .. } => ComparisonMode::LessOrEqual,
            Constraint::GreaterThan { .. } => ComparisonMode::GreaterThan,
            Constraint::Range { .. } => ComparisonMode::Range,
            Constraint::Exact { .. } => ComparisonMode::Exact,
        }
    }

    /// Returns true if `value` satisfies the constraint.
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Constraint::LessOrEqual { value: bound } => value <= bound,
            Constraint::GreaterThan { value: bound } => value > bound,
            Constraint::Range { low, high } => low <= value && value <= high,
            Constraint::Exact { value: bound } => value == bound,
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::LessOrEqual { value } => write!(f, "<= {}", value),
            Constraint::GreaterThan { value } => write!(f, "> {}", value),
            Constraint::Range { low, high } => write!(f, "{} - {}", low, high),
            Constraint::Exact { value } => write!(f, "== {}", value),
        }
    }
}

/// Constraints extracted from one prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterIntent {
    /// Brand token as written in the prompt (lowercase)
    pub brand: Option<String>,
    /// Constraint on `price`
    pub price: Option<Constraint>,
    /// Constraint on `product_rating`
    pub rating: Option<Constraint>,
    /// Rank by popularity and keep the top entries
    pub best_only: bool,
    /// A number was present but its range could not be resolved, so its constraint was dropped
    pub unresolved_range: bool,
}

impl FilterIntent {
    /// Returns true if the prompt carried no usable signal at all.
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.price.is_none()
            && self.rating.is_none()
            && !self.best_only
            && !self.unresolved_range
    }
}
