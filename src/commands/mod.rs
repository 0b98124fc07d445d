//! CLI command implementations.

pub mod dashboard;
pub mod search;
pub mod stats;

pub use dashboard::DashboardCommand;
pub use search::SearchCommand;
pub use stats::StatsCommand;
