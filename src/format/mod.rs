//! Output formatting for records, summaries and messages (table, JSON, markdown, CSV).

use crate::aggregate::AggregateSummary;
use crate::config::OutputFormat;
use crate::dataset::ProductRecord;
use crate::error::QueryError;
use anyhow::Result;
use tracing::warn;

const RECORD_HEADER: [&str; 6] =
    ["brand", "price", "seller_rating", "product_rating", "reviews", "rank"];

/// Formats results for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a list of product records.
    pub fn format_records(&self, records: &[ProductRecord]) -> String {
        if records.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv(vec![Self::record_header()]),
                _ => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json(records, "[]"),
            OutputFormat::Table => self.table_records(records),
            OutputFormat::Markdown => self.markdown_records(records),
            OutputFormat::Csv => self.csv_records(records),
        }
    }

    /// Formats a brand summary.
    pub fn format_summary(&self, brand: &str, summary: &AggregateSummary) -> String {
        match self.format {
            OutputFormat::Json => self.json(
                &serde_json::json!({ "brand": brand, "summary": summary }),
                "{}",
            ),
            OutputFormat::Table => Self::summary_rows(brand, summary)
                .iter()
                .map(|(label, value)| format!("{:<20} {}", format!("{}:", label), value))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Markdown => {
                let mut lines = vec![format!("## {}", brand), String::new()];
                for (label, value) in Self::summary_rows(brand, summary).iter().skip(1) {
                    lines.push(format!("- **{}:** {}", label, value));
                }
                lines.join("\n")
            }
            OutputFormat::Csv => {
                let (header, values): (Vec<String>, Vec<String>) = Self::summary_rows(brand, summary)
                    .into_iter()
                    .map(|(label, value)| (label.to_lowercase().replace(' ', "_"), value))
                    .unzip();
                self.csv(vec![header, values])
            }
        }
    }

    /// Formats per-brand listing counts.
    pub fn format_brand_counts(&self, counts: &[(String, usize)]) -> String {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<_> = counts
                    .iter()
                    .map(|(brand, listings)| serde_json::json!({ "brand": brand, "listings": listings }))
                    .collect();
                self.json(&entries, "[]")
            }
            OutputFormat::Table => {
                let mut lines = vec![
                    format!("{:<20}  {:>8}", "Brand", "Listings"),
                    format!("{:-<20}  {:->8}", "", ""),
                ];
                for (brand, listings) in counts {
                    lines.push(format!("{:<20}  {:>8}", brand, listings));
                }
                lines.join("\n")
            }
            OutputFormat::Markdown => {
                let mut lines =
                    vec!["| Brand | Listings |".to_string(), "|-------|----------|".to_string()];
                for (brand, listings) in counts {
                    lines.push(format!("| {} | {} |", brand, listings));
                }
                lines.join("\n")
            }
            OutputFormat::Csv => {
                let mut rows = vec![vec!["brand".to_string(), "listings".to_string()]];
                rows.extend(
                    counts.iter().map(|(brand, listings)| vec![brand.clone(), listings.to_string()]),
                );
                self.csv(rows)
            }
        }
    }

    /// Formats a user-visible error message.
    pub fn format_error(&self, error: &QueryError) -> String {
        let message = error.to_string();
        match self.format {
            OutputFormat::Json => self.json(&serde_json::json!({ "error": message }), "{}"),
            OutputFormat::Csv => self.csv(vec![vec!["error".to_string()], vec![message]]),
            _ => message,
        }
    }

    fn json<T: serde::Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string())
    }

    // Table formatting

    fn table_records(&self, records: &[ProductRecord]) -> String {
        let brand_width = 16;
        let price_width = 10;
        let rating_width = 7;
        let seller_width = 7;
        let reviews_width = 8;
        let rank_width = 6;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<brand_width$}  {:>price_width$}  {:>rating_width$}  {:>seller_width$}  {:>reviews_width$}  {:>rank_width$}",
            "Brand", "Price", "Rating", "Seller", "Reviews", "Rank"
        ));
        lines.push(format!(
            "{:-<brand_width$}  {:-<price_width$}  {:-<rating_width$}  {:-<seller_width$}  {:-<reviews_width$}  {:-<rank_width$}",
            "", "", "", "", "", ""
        ));

        for record in records {
            let brand = if record.brand.chars().count() > brand_width {
                let cut: String = record.brand.chars().take(brand_width - 3).collect();
                format!("{}...", cut)
            } else {
                record.brand.clone()
            };

            lines.push(format!(
                "{:<brand_width$}  {:>price_width$}  {:>rating_width$.1}  {:>seller_width$.1}  {:>reviews_width$}  {:>rank_width$}",
                brand, record.price, record.product_rating, record.seller_rating, record.reviews, record.rank
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", records.len()));

        lines.join("\n")
    }

    fn summary_rows(brand: &str, summary: &AggregateSummary) -> Vec<(&'static str, String)> {
        vec![
            ("Brand", brand.to_string()),
            ("Total listings", summary.total_listings.to_string()),
            ("Average price", format!("{:.2}", summary.avg_price)),
            ("Highest price", format!("{:.2}", summary.max_price)),
            ("Lowest price", format!("{:.2}", summary.min_price)),
            ("Avg seller rating", format!("{:.2}", summary.avg_seller_rating)),
            ("Avg product rating", format!("{:.2}", summary.avg_product_rating)),
            ("Avg reviews", format!("{:.1}", summary.avg_reviews)),
        ]
    }

    // Markdown formatting

    fn markdown_records(&self, records: &[ProductRecord]) -> String {
        let mut lines = Vec::new();

        lines.push("| Brand | Price | Rating | Seller | Reviews | Rank |".to_string());
        lines.push("|-------|-------|--------|--------|---------|------|".to_string());

        for record in records {
            lines.push(format!(
                "| {} | {} | {:.1} | {:.1} | {} | {} |",
                record.brand,
                record.price,
                record.product_rating,
                record.seller_rating,
                record.reviews,
                record.rank
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", records.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn record_header() -> Vec<String> {
        RECORD_HEADER.iter().map(|h| h.to_string()).collect()
    }

    fn csv_records(&self, records: &[ProductRecord]) -> String {
        let mut rows = vec![Self::record_header()];
        rows.extend(records.iter().map(|record| {
            vec![
                record.brand.clone(),
                record.price.to_string(),
                record.seller_rating.to_string(),
                record.product_rating.to_string(),
                record.reviews.to_string(),
                record.rank.to_string(),
            ]
        }));
        self.csv(rows)
    }

    fn csv(&self, rows: Vec<Vec<String>>) -> String {
        Self::write_csv(&rows).unwrap_or_else(|e| {
            warn!("Failed to write CSV output: {}", e);
            String::new()
        })
    }

    fn write_csv(rows: &[Vec<String>]) -> Result<String> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.write_record(row)?;
        }

        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        let text = String::from_utf8(bytes)?;
        Ok(text.trim_end_matches('\n').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> ProductRecord {
        ProductRecord {
            brand: "Samsung".to_string(),
            price: 15000.0,
            seller_rating: 4.1,
            product_rating: 4.2,
            reviews: 1200.0,
            rank: 5.0,
        }
    }

    fn make_other_record() -> ProductRecord {
        ProductRecord {
            brand: "Apple".to_string(),
            price: 70000.0,
            seller_rating: 4.8,
            product_rating: 4.6,
            reviews: 9000.0,
            rank: 9.0,
        }
    }

    fn make_summary() -> AggregateSummary {
        AggregateSummary {
            avg_price: 200.0,
            max_price: 300.0,
            min_price: 100.0,
            avg_seller_rating: 4.25,
            avg_product_rating: 4.3,
            avg_reviews: 20.0,
            total_listings: 2,
        }
    }

    // Record tests

    #[test]
    fn test_json_records() {
        let formatter = Formatter::new(OutputFormat::Json);
        let output = formatter.format_records(&[make_record(), make_other_record()]);

        assert!(output.starts_with('['));
        assert!(output.ends_with(']'));
        assert!(output.contains("\"Brand\": \"Samsung\""));
        assert!(output.contains("\"Product Rating\": 4.2"));
        assert!(output.contains("Apple"));
    }

    #[test]
    fn test_empty_records_per_format() {
        assert_eq!(Formatter::new(OutputFormat::Json).format_records(&[]), "[]");
        assert_eq!(Formatter::new(OutputFormat::Table).format_records(&[]), "No products found.");
        assert_eq!(
            Formatter::new(OutputFormat::Markdown).format_records(&[]),
            "No products found."
        );
        assert_eq!(
            Formatter::new(OutputFormat::Csv).format_records(&[]),
            "brand,price,seller_rating,product_rating,reviews,rank"
        );
    }

    #[test]
    fn test_table_records() {
        let formatter = Formatter::new(OutputFormat::Table);
        let output = formatter.format_records(&[make_record(), make_other_record()]);

        assert!(output.contains("Brand"));
        assert!(output.contains("Reviews"));
        assert!(output.contains("----------"));
        assert!(output.contains("Samsung"));
        assert!(output.contains("15000"));
        assert!(output.contains("4.2"));
        assert!(output.contains("Total: 2 products"));
    }

    #[test]
    fn test_table_long_brand_truncation() {
        let mut record = make_record();
        record.brand = "A Very Long Brand Name Indeed".to_string();
        let output = Formatter::new(OutputFormat::Table).format_records(&[record]);
        assert!(output.contains("A Very Long B..."));
    }

    #[test]
    fn test_markdown_records() {
        let formatter = Formatter::new(OutputFormat::Markdown);
        let output = formatter.format_records(&[make_record()]);

        assert!(output.contains("| Brand | Price | Rating | Seller | Reviews | Rank |"));
        assert!(output.contains("| Samsung | 15000 | 4.2 | 4.1 | 1200 | 5 |"));
        assert!(output.contains("*1 products found*"));
    }

    #[test]
    fn test_csv_records() {
        let formatter = Formatter::new(OutputFormat::Csv);
        let output = formatter.format_records(&[make_record(), make_other_record()]);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Samsung,15000,4.1,4.2,1200,5");
        assert_eq!(lines[2], "Apple,70000,4.8,4.6,9000,9");
    }

    #[test]
    fn test_csv_quotes_special_brands() {
        let formatter = Formatter::new(OutputFormat::Csv);
        let brands = [
            ("Sam\rsung", "\"Sam\rsung\""),
            ("with,comma", "\"with,comma\""),
            ("with\"quote", "\"with\"\"quote\""),
            ("with\nnewline", "\"with\nnewline\""),
        ];

        for (brand, quoted) in brands {
            let mut record = make_record();
            record.brand = brand.to_string();
            let output = formatter.format_records(&[record]);
            assert_eq!(
                output,
                format!("brand,price,seller_rating,product_rating,reviews,rank\n{},15000,4.1,4.2,1200,5", quoted)
            );
        }
    }

    #[test]
    fn test_csv_output_reads_back() {
        let mut record = make_record();
        record.brand = "Sam\rsung, \"Pro\"".to_string();
        let output = Formatter::new(OutputFormat::Csv).format_records(&[record, make_other_record()]);

        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let brands: Vec<String> =
            reader.records().map(|r| r.unwrap()[0].to_string()).collect();
        assert_eq!(brands, vec!["Sam\rsung, \"Pro\"", "Apple"]);
    }

    // Summary tests

    #[test]
    fn test_table_summary() {
        let output = Formatter::new(OutputFormat::Table).format_summary("samsung", &make_summary());

        assert!(output.contains("Brand:"));
        assert!(output.contains("samsung"));
        assert!(output.contains("Total listings:"));
        assert!(output.contains("200.00"));
        assert!(output.contains("300.00"));
        assert!(output.contains("100.00"));
        assert!(output.contains("4.25"));
    }

    #[test]
    fn test_json_summary() {
        let output = Formatter::new(OutputFormat::Json).format_summary("samsung", &make_summary());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["brand"], "samsung");
        assert_eq!(value["summary"]["avg_price"], 200.0);
        assert_eq!(value["summary"]["total_listings"], 2);
    }

    #[test]
    fn test_markdown_summary() {
        let output =
            Formatter::new(OutputFormat::Markdown).format_summary("samsung", &make_summary());
        assert!(output.starts_with("## samsung"));
        assert!(output.contains("- **Highest price:** 300.00"));
    }

    #[test]
    fn test_csv_summary() {
        let output = Formatter::new(OutputFormat::Csv).format_summary("samsung", &make_summary());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("brand,total_listings,average_price"));
        assert!(lines[1].starts_with("samsung,2,200.00"));
    }

    // Brand count tests

    #[test]
    fn test_brand_counts_formats() {
        let counts = vec![("Samsung".to_string(), 3), ("Apple".to_string(), 1)];

        let table = Formatter::new(OutputFormat::Table).format_brand_counts(&counts);
        assert!(table.contains("Listings"));
        assert!(table.contains("Samsung"));

        let md = Formatter::new(OutputFormat::Markdown).format_brand_counts(&counts);
        assert!(md.contains("| Samsung | 3 |"));

        let csv = Formatter::new(OutputFormat::Csv).format_brand_counts(&counts);
        assert_eq!(csv, "brand,listings\nSamsung,3\nApple,1");

        let json = Formatter::new(OutputFormat::Json).format_brand_counts(&counts);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["brand"], "Samsung");
        assert_eq!(value[1]["listings"], 1);
    }

    // Error tests

    #[test]
    fn test_format_error() {
        let err = QueryError::NoResults;

        let text = Formatter::new(OutputFormat::Table).format_error(&err);
        assert_eq!(text, "No results found for the given criteria.");

        let json = Formatter::new(OutputFormat::Json).format_error(&err);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "No results found for the given criteria.");

        let csv = Formatter::new(OutputFormat::Csv).format_error(&err);
        assert_eq!(csv, "error\nNo results found for the given criteria.");

        let csv = Formatter::new(OutputFormat::Csv).format_error(&QueryError::EmptyQuery);
        assert!(csv.starts_with("error\n\"Could not understand the query."));
    }
}
