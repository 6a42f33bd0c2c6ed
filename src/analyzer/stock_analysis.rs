use crate::analyzer::features::FeatureExtractor;
use crate::analyzer::insights;
use crate::analyzer::price_targets;
use crate::analyzer::risk::RiskAnalyzer;
use crate::analyzer::scoring;
use crate::config::AnalyzerConfig;
use crate::model::{
    AnalysisError, AnalysisResult, Factor, FeatureVector, FinancialData, Horizon, PricePoint,
    Recommendation, RiskAssessment,
};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use tracing::{debug, error, info};

/// Trait defining the interface for a stock analyzer.
pub trait StockAnalyzer {
    fn prepare_features(
        &self,
        financial: &FinancialData,
        history: &[PricePoint],
    ) -> Result<FeatureVector, AnalysisError>;
    fn generate_ml_score(&mut self, features: &FeatureVector) -> Result<u32, AnalysisError>;
    fn generate_recommendation(&mut self, ml_score: u32) -> (Recommendation, u32);
    fn predict_price_targets(
        &mut self,
        current_price: f64,
        features: &FeatureVector,
    ) -> Result<BTreeMap<Horizon, f64>, AnalysisError>;
    fn assess_risk(&self, financial: &FinancialData, history: &[PricePoint]) -> RiskAssessment;
    fn analyze_factors(&mut self, financial: &FinancialData, history: &[PricePoint]) -> Vec<Factor>;
    fn generate_insights(&mut self, symbol: &str, ml_score: u32) -> Vec<String>;
    fn generate_risk_notes(&mut self) -> Vec<String>;
    /// Runs the whole pipeline; any failure is logged and turned into `None`.
    fn analyze_stock(
        &mut self,
        symbol: &str,
        financial: &FinancialData,
        history: &[PricePoint],
        current_price: f64,
    ) -> Option<AnalysisResult>;
}

/// Implementation of the stock analyzer over any random source.
pub struct AnalyzerImpl<R: Rng = StdRng> {
    config: AnalyzerConfig,
    rng: R,
}

impl AnalyzerImpl<StdRng> {
    /// Analyzer seeded from OS entropy.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Analyzer whose reports are reproducible for a given seed.
    pub fn with_seed(config: AnalyzerConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AnalyzerImpl<R> {
    pub fn with_rng(config: AnalyzerConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Fallible body of [`StockAnalyzer::analyze_stock`].
    pub fn try_analyze_stock(
        &mut self,
        symbol: &str,
        financial: &FinancialData,
        history: &[PricePoint],
        current_price: f64,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.config.validate()?;
        if !current_price.is_finite() || current_price <= 0.0 {
            return Err(AnalysisError::InvalidData(format!(
                "current price must be positive, got {}",
                current_price
            )));
        }

        let features = self.prepare_features(financial, history)?;
        let ml_score = self.generate_ml_score(&features)?;
        let (recommendation, confidence) = self.generate_recommendation(ml_score);
        let price_targets = self.predict_price_targets(current_price, &features)?;
        let risk = self.assess_risk(financial, history);
        let insights = self.generate_insights(symbol, ml_score);
        let factors = self.analyze_factors(financial, history);
        let risks = self.generate_risk_notes();

        info!(
            "{}: score {} -> {} ({}%), risk {:?} ({})",
            symbol,
            ml_score,
            recommendation.as_str(),
            confidence,
            risk.level,
            risk.score
        );

        Ok(AnalysisResult {
            symbol: symbol.to_string(),
            timestamp: Utc::now(),
            ml_score,
            recommendation,
            confidence,
            price_targets,
            risk_level: risk.level,
            risk_score: risk.score,
            factors,
            insights,
            risks,
            model_version: self.config.model_version.clone(),
        })
    }
}

impl<R: Rng> StockAnalyzer for AnalyzerImpl<R> {
    fn prepare_features(
        &self,
        financial: &FinancialData,
        history: &[PricePoint],
    ) -> Result<FeatureVector, AnalysisError> {
        let features = FeatureExtractor::prepare(financial, history)?;
        debug!("Prepared {} features: {:?}", features.len(), features.as_slice());
        Ok(features)
    }

    /// The score is simulated; features only feed the debug log.
    fn generate_ml_score(&mut self, features: &FeatureVector) -> Result<u32, AnalysisError> {
        let score = scoring::generate_ml_score(&mut self.rng, &self.config)?;
        debug!("ML score {} from {} features", score, features.len());
        Ok(score)
    }

    fn generate_recommendation(&mut self, ml_score: u32) -> (Recommendation, u32) {
        scoring::generate_recommendation(&mut self.rng, ml_score)
    }

    fn predict_price_targets(
        &mut self,
        current_price: f64,
        _features: &FeatureVector,
    ) -> Result<BTreeMap<Horizon, f64>, AnalysisError> {
        price_targets::predict_price_targets(&mut self.rng, &self.config, current_price)
    }

    fn assess_risk(&self, financial: &FinancialData, history: &[PricePoint]) -> RiskAssessment {
        RiskAnalyzer::assess(financial, history)
    }

    fn analyze_factors(
        &mut self,
        _financial: &FinancialData,
        _history: &[PricePoint],
    ) -> Vec<Factor> {
        insights::analyze_factors(&mut self.rng)
    }

    fn generate_insights(&mut self, symbol: &str, ml_score: u32) -> Vec<String> {
        insights::generate_insights(&mut self.rng, symbol, ml_score)
    }

    fn generate_risk_notes(&mut self) -> Vec<String> {
        insights::generate_risk_notes(&mut self.rng)
    }

    fn analyze_stock(
        &mut self,
        symbol: &str,
        financial: &FinancialData,
        history: &[PricePoint],
        current_price: f64,
    ) -> Option<AnalysisResult> {
        match self.try_analyze_stock(symbol, financial, history, current_price) {
            Ok(result) => Some(result),
            Err(e) => {
                error!("Error in ML analysis for {}: {}", symbol, e);
                None
            }
        }
    }
}
