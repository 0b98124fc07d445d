//! mobile-finder - Natural-language search and seller dashboards over a mobile phone listing dataset
//!
//! Prompts such as "samsung under 20000" are turned into a [`FilterIntent`]
//! and applied to the dataset; brand summaries are computed on demand.

pub mod aggregate;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filters;
pub mod format;
pub mod query;

pub use aggregate::{summarize, AggregateSummary};
pub use config::Config;
pub use dataset::{Dataset, ProductRecord};
pub use error::QueryError;
pub use filters::FilterEngine;
pub use query::{Constraint, FilterIntent, Interpreter};
