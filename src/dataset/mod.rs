//! Product dataset: records, sources and CSV loading.

pub mod loader;
pub mod models;
pub mod source;

pub use models::{Dataset, ProductRecord};
pub use source::{source_for, DatasetSource, FileSource, HttpSource};

use anyhow::{Context, Result};
use tracing::info;

impl Dataset {
    /// Fetches and parses the dataset from a source.
    pub async fn load(source: &dyn DatasetSource) -> Result<Self> {
        let text = source.fetch().await?;
        let dataset = loader::parse_csv(&text)
            .with_context(|| format!("Failed to load dataset from {}", source.describe()))?;

        info!("Loaded {} products from {}", dataset.len(), source.describe());
        Ok(dataset)
    }

    /// Parses a dataset from in-memory CSV text.
    pub fn from_csv(text: &str) -> Result<Self> {
        loader::parse_csv(text)
    }
}
