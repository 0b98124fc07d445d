//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::filters::engine::DEFAULT_BEST_LIMIT;
use crate::query::PhraseSets;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Dataset location: a file path or an http(s) URL
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Proxy URL used when the dataset is downloaded (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Number of records kept for "best" queries
    #[serde(default = "default_best_limit")]
    pub best_limit: usize,

    /// Phrases that select a comparison mode
    #[serde(default)]
    pub phrases: PhraseSets,

    /// Words ignored when looking for brands and prices, on top of the English list
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

fn default_dataset() -> String {
    "data/mobiles.csv".to_string()
}

fn default_best_limit() -> usize {
    DEFAULT_BEST_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            proxy: None,
            format: OutputFormat::Table,
            best_limit: default_best_limit(),
            phrases: PhraseSets::default(),
            extra_stop_words: Vec::new(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("mobile-finder").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::new())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(dataset) = std::env::var("MOBILE_FINDER_DATASET") {
            self.dataset = dataset;
        }

        if let Ok(proxy) = std::env::var("MOBILE_FINDER_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(limit) = std::env::var("MOBILE_FINDER_BEST_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.best_limit = l;
            }
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
