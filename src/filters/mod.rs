//! Product filtering: composable record filters and the engine that applies an intent.

pub mod brand;
pub mod engine;
pub mod price;
pub mod rating;

use crate::dataset::ProductRecord;
use crate::query::{Constraint, FilterIntent};
use tracing::debug;

pub use brand::BrandFilter;
pub use engine::FilterEngine;
pub use price::PriceFilter;
pub use rating::RatingFilter;

/// Trait for filtering product records.
pub trait Filter: Send + Sync {
    /// Returns true if the record passes the filter.
    fn matches(&self, record: &ProductRecord) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// An ordered chain of filters; each stage narrows the previous stage's output.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Adds a filter to the end of the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Runs the records through every stage in order. The input is left untouched.
    pub fn apply(&self, records: &[ProductRecord]) -> Vec<ProductRecord> {
        let mut current: Vec<&ProductRecord> = records.iter().collect();

        for filter in &self.filters {
            current.retain(|r| filter.matches(r));
            debug!("{} -> {} records", filter.description(), current.len());
        }

        current.into_iter().cloned().collect()
    }

    /// Returns true if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a FilterChain. Stages run brand, then price, then rating.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Builds the chain described by a parsed prompt.
    pub fn from_intent(intent: &FilterIntent) -> Self {
        Self::new().brand(intent.brand.as_deref()).price(intent.price).rating(intent.rating)
    }

    /// Adds a brand filter.
    pub fn brand(mut self, brand: Option<&str>) -> Self {
        if let Some(brand) = brand {
            self.chain.add(BrandFilter::new(brand));
        }
        self
    }

    /// Adds a price filter.
    pub fn price(mut self, constraint: Option<Constraint>) -> Self {
        if let Some(constraint) = constraint {
            self.chain.add(PriceFilter::new(constraint));
        }
        self
    }

    /// Adds a product rating filter.
    pub fn rating(mut self, constraint: Option<Constraint>) -> Self {
        if let Some(constraint) = constraint {
            self.chain.add(RatingFilter::new(constraint));
        }
        self
    }

    /// Builds the filter chain.
    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
