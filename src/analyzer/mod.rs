// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod features;
pub mod insights;
pub mod price_targets;
pub mod risk;
pub mod scoring;
pub mod stock_analysis;

// Re-export the main Analyzer implementation for ease of use.
pub use stock_analysis::{AnalyzerImpl, StockAnalyzer};
