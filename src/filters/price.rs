//! Price constraint filter.

use super::Filter;
use crate::dataset::ProductRecord;
use crate::query::Constraint;

/// Filters records by a comparison on `price`.
pub struct PriceFilter {
    constraint: Constraint,
}

impl PriceFilter {
    /// Creates a new price filter.
    pub fn new(constraint: Constraint) -> Self {
        Self { constraint }
    }
}

impl Filter for PriceFilter {
    fn matches(&self, record: &ProductRecord) -> bool {
        self.constraint.matches(record.price)
    }

    fn description(&self) -> String {
        format!("Price: {}", self.constraint)
    }
}
