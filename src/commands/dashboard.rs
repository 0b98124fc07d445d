//! Seller dashboard command implementation.

use crate::aggregate::{summarize, AggregateSummary};
use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::QueryError;
use crate::format::Formatter;
use tracing::info;

/// Summarizes one brand's listings.
pub struct DashboardCommand {
    formatter: Formatter,
}

impl DashboardCommand {
    /// Creates a new dashboard command.
    pub fn new(config: &Config) -> Self {
        Self { formatter: Formatter::new(config.format) }
    }

    /// Looks up the summary for `brand`.
    pub fn run(&self, dataset: &Dataset, brand: &str) -> Result<AggregateSummary, QueryError> {
        info!("Dashboard lookup for: {}", brand);
        summarize(dataset.records(), brand).ok_or_else(|| QueryError::BrandNotFound(brand.to_string()))
    }

    /// Returns the formatted summary, or the "not found" message on the same path.
    pub fn execute(&self, dataset: &Dataset, brand: &str) -> String {
        match self.run(dataset, brand) {
            Ok(summary) => self.formatter.format_summary(brand, &summary),
            Err(err) => self.formatter.format_error(&err),
        }
    }
}
