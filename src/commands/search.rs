//! Search command implementation.

use crate::config::Config;
use crate::dataset::{Dataset, ProductRecord};
use crate::error::QueryError;
use crate::filters::FilterEngine;
use crate::format::Formatter;
use crate::query::Interpreter;
use tracing::{debug, info};

/// Answers free-text product queries.
pub struct SearchCommand {
    interpreter: Interpreter,
    engine: FilterEngine,
    formatter: Formatter,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: &Config) -> Self {
        Self {
            interpreter: Interpreter::from_config(config),
            engine: FilterEngine::new(config.best_limit),
            formatter: Formatter::new(config.format),
        }
    }

    /// Interprets `prompt` and filters the dataset with it.
    pub fn run(&self, dataset: &Dataset, prompt: &str) -> Result<Vec<ProductRecord>, QueryError> {
        info!("Searching for: {}", prompt);

        let intent = self.interpreter.interpret(prompt, &dataset.brand_names_lowercase())?;
        debug!("Intent: {:?}", intent);

        let results = self.engine.apply(dataset.records(), &intent)?;
        info!("Found {} products matching criteria", results.len());
        Ok(results)
    }

    /// Runs the search and returns formatted output, or the error message on the same path.
    pub fn execute(&self, dataset: &Dataset, prompt: &str) -> String {
        match self.run(dataset, prompt) {
            Ok(records) => self.formatter.format_records(&records),
            Err(err) => {
                info!("Search failed: {}", err);
                self.formatter.format_error(&err)
            }
        }
    }
}
