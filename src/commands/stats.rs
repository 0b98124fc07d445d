//! Dataset overview command.

use crate::aggregate::{brand_counts, summarize_all};
use crate::config::Config;
use crate::dataset::Dataset;
use crate::format::Formatter;

/// Prints whole-dataset statistics and listing counts per brand.
pub struct StatsCommand {
    formatter: Formatter,
}

impl StatsCommand {
    /// Creates a new stats command.
    pub fn new(config: &Config) -> Self {
        Self { formatter: Formatter::new(config.format) }
    }

    /// Returns the formatted overview.
    pub fn execute(&self, dataset: &Dataset) -> String {
        let mut sections = Vec::new();

        if let Some(summary) = summarize_all(dataset.records()) {
            sections.push(self.formatter.format_summary("All brands", &summary));
        }
        sections.push(self.formatter.format_brand_counts(&brand_counts(dataset.records())));

        sections.join("\n\n")
    }

    /// Returns the formatted list of known brands with their listing counts.
    pub fn brands(&self, dataset: &Dataset) -> String {
        self.formatter.format_brand_counts(&brand_counts(dataset.records()))
    }
}
