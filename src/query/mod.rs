//! Prompt interpretation: tokenizing, stop words, comparison phrases.

pub mod intent;
pub mod interpreter;
pub mod phrases;
pub mod stopwords;
pub mod tokenizer;

pub use intent::{Constraint, FilterIntent};
pub use interpreter::Interpreter;
pub use phrases::{ComparisonMode, PhraseSets};
pub use stopwords::StopWords;
