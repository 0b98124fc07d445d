//! Applies a parsed [`FilterIntent`] to the dataset.

use super::FilterChainBuilder;
use crate::dataset::ProductRecord;
use crate::error::QueryError;
use crate::query::FilterIntent;
use tracing::debug;

/// Default number of records kept for "best" queries.
pub const DEFAULT_BEST_LIMIT: usize = 10;

/// Narrows records by brand, price and rating, then optionally ranks them.
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine {
    best_limit: usize,
}

impl FilterEngine {
    /// Creates an engine keeping at most `best_limit` records for "best" queries.
    pub fn new(best_limit: usize) -> Self {
        Self { best_limit }
    }

    /// Applies `intent` to `records` and returns the surviving records in order.
    ///
    /// Fails with `EmptyQuery` when the intent carries no signal and with
    /// `NoResults` when the filters leave nothing.
    pub fn apply(
        &self,
        records: &[ProductRecord],
        intent: &FilterIntent,
    ) -> Result<Vec<ProductRecord>, QueryError> {
        if intent.is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        let chain = FilterChainBuilder::from_intent(intent).build();
        if !chain.is_empty() {
            debug!("Active filters ({}): {}", chain.len(), chain.descriptions().join(", "));
        }

        let mut results = chain.apply(records);

        if intent.best_only {
            // Stable: equal ranks keep dataset order
            results.sort_by(|a, b| b.rank.total_cmp(&a.rank));
            results.truncate(self.best_limit);
            debug!("Kept top {} by rank", results.len());
        }

        if results.is_empty() {
            return Err(QueryError::NoResults);
        }

        Ok(results)
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(DEFAULT_BEST_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Constraint;

    fn make_record(brand: &str, price: f64, rating: f64, rank: f64) -> ProductRecord {
        ProductRecord {
            brand: brand.to_string(),
            price,
            seller_rating: 4.0,
            product_rating: rating,
            reviews: 100.0,
            rank,
        }
    }

    fn sample() -> Vec<ProductRecord> {
        vec![
            make_record("Samsung", 15000.0, 4.2, 3.0),
            make_record("Samsung", 25000.0, 4.5, 7.0),
            make_record("Apple", 70000.0, 4.6, 9.0),
            make_record("Realme", 9000.0, 4.0, 5.0),
        ]
    }

    #[test]
    fn test_empty_intent() {
        let err = FilterEngine::default().apply(&sample(), &FilterIntent::default()).unwrap_err();
        assert_eq!(err, QueryError::EmptyQuery);
    }

    #[test]
    fn test_brand_and_price() {
        let intent = FilterIntent {
            brand: Some("samsung".to_string()),
            price: Some(Constraint::LessOrEqual { value: 20000.0 }),
            ..Default::default()
        };

        let results = FilterEngine::default().apply(&sample(), &intent).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].price, 15000.0);
    }

    #[test]
    fn test_rating_exact() {
        let intent =
            FilterIntent { rating: Some(Constraint::Exact { value: 4.5 }), ..Default::default() };

        let results = FilterEngine::default().apply(&sample(), &intent).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].price, 25000.0);
    }

    #[test]
    fn test_no_results() {
        let intent = FilterIntent {
            brand: Some("apple".to_string()),
            price: Some(Constraint::LessOrEqual { value: 1000.0 }),
            ..Default::default()
        };

        let err = FilterEngine::default().apply(&sample(), &intent).unwrap_err();
        assert_eq!(err, QueryError::NoResults);
    }

    #[test]
    fn test_best_sorts_by_rank_descending() {
        let intent = FilterIntent { best_only: true, ..Default::default() };

        let results = FilterEngine::default().apply(&sample(), &intent).unwrap();
        let ranks: Vec<f64> = results.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![9.0, 7.0, 5.0, 3.0]);
    }

    #[test]
    fn test_best_truncates() {
        let records: Vec<ProductRecord> =
            (0..25).map(|i| make_record("Brand", 100.0, 4.0, i as f64)).collect();
        let intent = FilterIntent { best_only: true, ..Default::default() };

        let results = FilterEngine::default().apply(&records, &intent).unwrap();
        assert_eq!(results.len(), 10);
        assert_eq!(results[0].rank, 24.0);
        assert_eq!(results[9].rank, 15.0);

        let results = FilterEngine::new(3).apply(&records, &intent).unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_best_ties_keep_dataset_order() {
        let records = vec![
            make_record("First", 1.0, 4.0, 5.0),
            make_record("Top", 1.0, 4.0, 8.0),
            make_record("Second", 1.0, 4.0, 5.0),
            make_record("Third", 1.0, 4.0, 5.0),
        ];
        let intent = FilterIntent { best_only: true, ..Default::default() };

        let results = FilterEngine::default().apply(&records, &intent).unwrap();
        let brands: Vec<&str> = results.iter().map(|r| r.brand.as_str()).collect();
        assert_eq!(brands, vec!["Top", "First", "Second", "Third"]);
    }

    #[test]
    fn test_best_applies_after_filters() {
        let intent = FilterIntent {
            brand: Some("samsung".to_string()),
            best_only: true,
            ..Default::default()
        };

        let results = FilterEngine::default().apply(&sample(), &intent).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].rank, 7.0);
    }

    #[test]
    fn test_unresolved_range_returns_everything() {
        let intent = FilterIntent { unresolved_range: true, ..Default::default() };
        let results = FilterEngine::default().apply(&sample(), &intent).unwrap();
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_reversed_range_finds_nothing() {
        let intent = FilterIntent {
            price: Some(Constraint::range(30000.0, 10000.0)),
            ..Default::default()
        };
        let err = FilterEngine::default().apply(&sample(), &intent).unwrap_err();
        assert_eq!(err, QueryError::NoResults);
    }

    #[test]
    fn test_idempotent() {
        let engine = FilterEngine::default();
        let intents = [
            FilterIntent { best_only: true, ..Default::default() },
            FilterIntent {
                brand: Some("samsung".to_string()),
                price: Some(Constraint::range(10000.0, 30000.0)),
                best_only: true,
                ..Default::default()
            },
            FilterIntent {
                rating: Some(Constraint::GreaterThan { value: 4.1 }),
                ..Default::default()
            },
        ];

        for intent in &intents {
            let once = engine.apply(&sample(), intent).unwrap();
            let twice = engine.apply(&once, intent).unwrap();
            assert_eq!(once, twice);
        }
    }
}
