use crate::model::{AnalysisError, FeatureVector, FinancialData, PricePoint};
use crate::utils::{floored_ratio, mean, recent_closes, std_dev};

/// Number of most recent closes used for the technical features.
pub const TECHNICAL_WINDOW: usize = 20;

pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Builds the feature vector in a fixed order:
    /// debt/equity, asset turnover (balance sheet), profit margin (income statement),
    /// then ma5, ma10, ma20, momentum5, momentum10, volatility (price history).
    /// Sections that are missing are skipped.
    pub fn prepare(
        financial: &FinancialData,
        history: &[PricePoint],
    ) -> Result<FeatureVector, AnalysisError> {
        let mut features = Vec::with_capacity(9);

        if let Some(bs) = &financial.balance_sheet {
            let debt_to_equity = floored_ratio(bs.total_liabilities, bs.shareholders_equity);
            let asset_turnover = floored_ratio(financial.revenue(), bs.total_assets);
            features.extend([debt_to_equity, asset_turnover]);
        }

        if let Some(income) = &financial.income_statement {
            features.push(floored_ratio(income.net_income, income.revenue));
        }

        let prices = recent_closes(history, TECHNICAL_WINDOW);
        if let Some(&last) = prices.last() {
            let ma_5 = Self::trailing_mean(&prices, 5).unwrap_or(last);
            let ma_10 = Self::trailing_mean(&prices, 10).unwrap_or(last);
            let ma_20 = Self::trailing_mean(&prices, TECHNICAL_WINDOW).unwrap_or(last);
            let momentum_5 = Self::momentum(&prices, 5)?;
            let momentum_10 = Self::momentum(&prices, 10)?;
            let volatility = Self::volatility_ratio(&prices);
            features.extend([ma_5, ma_10, ma_20, momentum_5, momentum_10, volatility]);
        }

        Ok(FeatureVector(features))
    }

    /// Mean of the last `window` values, `None` when fewer are available.
    pub fn trailing_mean(prices: &[f64], window: usize) -> Option<f64> {
        if window == 0 || prices.len() < window {
            return None;
        }
        mean(&prices[prices.len() - window..])
    }

    /// Relative change between the last price and the one `lookback` entries from the end.
    /// Zero when the window is too short.
    pub fn momentum(prices: &[f64], lookback: usize) -> Result<f64, AnalysisError> {
        if lookback == 0 || prices.len() < lookback {
            return Ok(0.0);
        }
        let reference = prices[prices.len() - lookback];
        let last = prices[prices.len() - 1];
        if reference == 0.0 {
            return Err(AnalysisError::InvalidData(format!(
                "zero close price {} entries back",
                lookback
            )));
        }
        Ok((last - reference) / reference)
    }

    /// Standard deviation over mean. Zero for fewer than two prices.
    /// A zero mean yields NaN or infinity rather than an error.
    pub fn volatility_ratio(prices: &[f64]) -> f64 {
        if prices.len() < 2 {
            return 0.0;
        }
        match (std_dev(prices), mean(prices)) {
            (Some(sd), Some(avg)) => sd / avg,
            _ => 0.0,
        }
    }
}
