use crate::model::{FinancialData, PricePoint, RiskAssessment, RiskLevel};
use crate::utils::{floored_ratio, mean, recent_closes, std_dev};
use tracing::debug;

const BASE_RISK: i32 = 50;
const RISK_WINDOW: usize = 30;
/// Histories of this length or shorter skip the volatility term.
const MIN_RISK_HISTORY: usize = 10;

pub struct RiskAnalyzer;

impl RiskAnalyzer {
    /// Nudges a base score of 50 by leverage and price volatility, then buckets it.
    pub fn assess(financial: &FinancialData, history: &[PricePoint]) -> RiskAssessment {
        let mut score = BASE_RISK;

        if let Some(bs) = &financial.balance_sheet {
            let debt_ratio = floored_ratio(bs.total_liabilities, bs.total_assets);
            score += Self::debt_adjustment(debt_ratio);
            debug!("Debt ratio {:.3}, risk now {}", debt_ratio, score);
        }

        if history.len() > MIN_RISK_HISTORY {
            let prices = recent_closes(history, RISK_WINDOW);
            // NaN (zero mean) leaves the score untouched
            let volatility = match (std_dev(&prices), mean(&prices)) {
                (Some(sd), Some(avg)) => sd / avg,
                _ => f64::NAN,
            };
            score += Self::volatility_adjustment(volatility);
            debug!("Price volatility {:.3}, risk now {}", volatility, score);
        }

        let score = score.clamp(0, 100) as u32;
        RiskAssessment {
            level: RiskLevel::from_score(score),
            score,
        }
    }

    pub fn debt_adjustment(debt_ratio: f64) -> i32 {
        if debt_ratio > 0.6 {
            15
        } else if debt_ratio < 0.3 {
            -10
        } else {
            0
        }
    }

    pub fn volatility_adjustment(volatility: f64) -> i32 {
        if volatility > 0.3 {
            20
        } else if volatility < 0.1 {
            -10
        } else {
            0
        }
    }
}
