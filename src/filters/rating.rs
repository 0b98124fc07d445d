//! Product rating filter.

use super::Filter;
use crate::dataset::ProductRecord;
use crate::query::Constraint;

/// Filters records by a comparison on `product_rating`.
pub struct RatingFilter {
    constraint: Constraint,
}

impl RatingFilter {
    /// Creates a new rating filter.
    pub fn new(constraint: Constraint) -> Self {
        Self { constraint }
    }
}

impl Filter for RatingFilter {
    fn matches(&self, record: &ProductRecord) -> bool {
        self.constraint.matches(record.product_rating)
    }

    fn description(&self) -> String {
        format!("Rating: {} stars", self.constraint)
    }
}
