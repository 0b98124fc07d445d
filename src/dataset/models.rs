//! Product records and the read-only dataset that holds them.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One listing from the product dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Manufacturer name as it appears in the dataset
    #[serde(rename = "Brand")]
    pub brand: String,
    /// Listing price
    #[serde(rename = "Price")]
    pub price: f64,
    /// Seller rating (0.0 - 5.0)
    #[serde(rename = "Seller Rating")]
    pub seller_rating: f64,
    /// Product rating (0.0 - 5.0)
    #[serde(rename = "Product Rating")]
    pub product_rating: f64,
    /// Number of reviews
    #[serde(rename = "Reviews")]
    pub reviews: f64,
    /// Popularity rank, higher is better
    #[serde(rename = "Rank")]
    pub rank: f64,
}

impl ProductRecord {
    /// Returns true if the record's brand equals `brand`, ignoring case.
    pub fn is_brand(&self, brand: &str) -> bool {
        self.brand.to_lowercase() == brand.to_lowercase()
    }
}

/// Immutable product table shared by every request.
///
/// Cloning is cheap: all clones point at the same records.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[ProductRecord]>,
}

impl Dataset {
    /// Wraps already validated records.
    pub(crate) fn from_records(records: Vec<ProductRecord>) -> Self {
        Self { records: records.into() }
    }

    /// Returns all records in load order.
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns distinct brand names in order of first appearance.
    ///
    /// Brands differing only in case are reported once, using the first spelling seen.
    pub fn known_brands(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.brand.to_lowercase()))
            .map(|r| r.brand.clone())
            .collect()
    }

    /// Returns the distinct brand names, lowercased, for matching prompt tokens.
    pub fn brand_names_lowercase(&self) -> Vec<String> {
        self.known_brands().iter().map(|b| b.to_lowercase()).collect()
    }
}
