//! Seller dashboard statistics.

use crate::dataset::ProductRecord;
use serde::Serialize;

/// Summary statistics over a set of listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSummary {
    pub avg_price: f64,
    pub max_price: f64,
    pub min_price: f64,
    pub avg_seller_rating: f64,
    pub avg_product_rating: f64,
    pub avg_reviews: f64,
    pub total_listings: usize,
}

/// Summarizes the listings of one brand (matched case-insensitively).
///
/// Returns None when the brand has no listings.
pub fn summarize(records: &[ProductRecord], brand_query: &str) -> Option<AggregateSummary> {
    let brand = brand_query.to_lowercase();
    let matched: Vec<&ProductRecord> = records.iter().filter(|r| r.is_brand(&brand)).collect();
    summarize_records(&matched)
}

/// Summarizes every listing in the dataset.
pub fn summarize_all(records: &[ProductRecord]) -> Option<AggregateSummary> {
    let all: Vec<&ProductRecord> = records.iter().collect();
    summarize_records(&all)
}

/// Counts listings per brand, in order of first appearance.
pub fn brand_counts(records: &[ProductRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|(brand, _)| record.is_brand(brand)) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.brand.clone(), 1)),
        }
    }
    counts
}

fn summarize_records(records: &[&ProductRecord]) -> Option<AggregateSummary> {
    if records.is_empty() {
        return None;
    }

    let n = records.len() as f64;
    let mean = |field: fn(&ProductRecord) -> f64| records.iter().map(|r| field(r)).sum::<f64>() / n;

    Some(AggregateSummary {
        avg_price: mean(|r| r.price),
        max_price: records.iter().map(|r| r.price).fold(f64::NEG_INFINITY, f64::max),
        min_price: records.iter().map(|r| r.price).fold(f64::INFINITY, f64::min),
        avg_seller_rating: mean(|r| r.seller_rating),
        avg_product_rating: mean(|r| r.product_rating),
        avg_reviews: mean(|r| r.reviews),
        total_listings: records.len(),
    })
}
