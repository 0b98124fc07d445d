//! Brand filter.

use super::Filter;
use crate::dataset::ProductRecord;

/// Keeps records whose brand equals the given name, ignoring case.
pub struct BrandFilter {
    brand: String,
}

impl BrandFilter {
    /// Creates a new brand filter.
    pub fn new(brand: impl Into<String>) -> Self {
        Self { brand: brand.into().to_lowercase() }
    }
}

impl Filter for BrandFilter {
    fn matches(&self, record: &ProductRecord) -> bool {
        record.is_brand(&self.brand)
    }

    fn description(&self) -> String {
        format!("Brand: {}", self.brand)
    }
}
