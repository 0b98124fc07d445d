//! Where the dataset text comes from: a local file or an HTTP(S) URL.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use wreq::Client;

/// Trait for fetching raw dataset text - enables mocking for tests.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetches the full dataset as CSV text.
    async fn fetch(&self) -> Result<String>;

    /// Human-readable location, used in logs and errors.
    fn describe(&self) -> String;
}

/// Reads the dataset from a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self) -> Result<String> {
        debug!("Reading dataset file: {}", self.path.display());
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read dataset file: {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Downloads the dataset over HTTP(S).
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Creates a new HTTP source, honoring the configured proxy.
    pub fn new(url: impl Into<String>, config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self { client, url: url.into() })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<String> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "text/csv,text/plain;q=0.9,*/*;q=0.8")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            anyhow::bail!("Dataset download failed with status: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Picks the source matching a dataset location.
pub fn source_for(location: &str, config: &Config) -> Result<Box<dyn DatasetSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, config)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}
