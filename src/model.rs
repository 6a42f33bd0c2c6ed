// Core structs: FinancialData, PricePoint, AnalysisResult and the error enums
use crate::config::ConfigError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSheet {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub shareholders_equity: f64,
    pub cash_and_equivalents: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeStatement {
    pub revenue: f64,
    pub gross_profit: f64,
    pub operating_income: f64,
    pub net_income: f64,
}

/// Financial statements for one company. Either section may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialData {
    pub balance_sheet: Option<BalanceSheet>,
    pub income_statement: Option<IncomeStatement>,
}

impl FinancialData {
    /// Revenue from the income statement, zero when the section is absent.
    pub fn revenue(&self) -> f64 {
        self.income_statement
            .as_ref()
            .map(|i| i.revenue)
            .unwrap_or(0.0)
    }
}

/// One daily record of a price history, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub close_price: f64,
}

impl PricePoint {
    pub fn new(close_price: f64) -> Self {
        Self {
            date: None,
            close_price,
        }
    }
}

/// Ordered numeric features. Sections missing from the input are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureVector(pub Vec<f64>);

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Hold,
    Sell,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Buy => "BUY",
            Recommendation::Hold => "HOLD",
            Recommendation::Sell => "SELL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Buckets a risk score: High >= 70, Medium >= 45, Low otherwise.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 70 => RiskLevel::High,
            s if s >= 45 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub name: String,
    pub score: u32,
    pub weight: f64,
    pub impact: Impact,
    pub description: String,
}

/// Prediction horizons, serialized as `one_week`, `one_month`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
}

impl Horizon {
    pub const ALL: [Horizon; 4] = [
        Horizon::OneWeek,
        Horizon::OneMonth,
        Horizon::ThreeMonths,
        Horizon::SixMonths,
    ];

    pub fn days(&self) -> u32 {
        match self {
            Horizon::OneWeek => 7,
            Horizon::OneMonth => 30,
            Horizon::ThreeMonths => 90,
            Horizon::SixMonths => 180,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Horizon::OneWeek => "one_week",
            Horizon::OneMonth => "one_month",
            Horizon::ThreeMonths => "three_months",
            Horizon::SixMonths => "six_months",
        }
    }
}

/// Full report produced by one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub ml_score: u32,
    pub recommendation: Recommendation,
    pub confidence: u32,
    pub price_targets: BTreeMap<Horizon, f64>,
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    pub factors: Vec<Factor>,
    pub insights: Vec<String>,
    pub risks: Vec<String>,
    pub model_version: String,
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Distribution error: {0}")]
    Distribution(String),

    #[error("Invalid analyzer config: {0}")]
    Config(#[from] ConfigError),
}

impl From<rand_distr::NormalError> for AnalysisError {
    fn from(e: rand_distr::NormalError) -> Self {
        AnalysisError::Distribution(e.to_string())
    }
}
