pub mod analyzer;
pub mod config;
pub mod model;
pub mod report;
pub mod sample;
pub mod utils;

pub use analyzer::{AnalyzerImpl, StockAnalyzer};
pub use model::{AnalysisError, AnalysisResult, FinancialData, PricePoint};
