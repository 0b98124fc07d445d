//! CSV parsing and schema validation for the product dataset.

use super::models::{Dataset, ProductRecord};
use anyhow::{bail, Context, Result};
use tracing::debug;

/// Columns every dataset must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] =
    ["Brand", "Price", "Seller Rating", "Product Rating", "Reviews", "Rank"];

/// Parses CSV text into a dataset.
///
/// Any schema violation (missing column, non-numeric value, blank brand, no
/// rows at all) is an error: the dataset is loaded once and must be sound.
pub fn parse_csv(text: &str) -> Result<Dataset> {
    let mut reader =
        csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(text.as_bytes());

    let headers = reader.headers().context("Failed to read dataset header")?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("Dataset is missing required column: {}", column);
        }
    }

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<ProductRecord>().enumerate() {
        // Header is line 1, first data row is line 2
        let line = index + 2;
        let record = row.with_context(|| format!("Invalid dataset row at line {}", line))?;

        if record.brand.is_empty() {
            bail!("Dataset row at line {} has an empty brand", line);
        }

        records.push(record);
    }

    if records.is_empty() {
        bail!("Dataset contains no rows");
    }

    debug!("Parsed {} dataset rows", records.len());
    Ok(Dataset::from_records(records))
}
