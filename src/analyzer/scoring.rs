use crate::config::{AnalyzerConfig, BoostConfig};
use crate::model::{AnalysisError, Recommendation};
use rand::Rng;
use rand_distr::{Distribution, Normal};

pub const BUY_THRESHOLD: u32 = 75;
pub const HOLD_THRESHOLD: u32 = 55;
const BUY_MAX_CONFIDENCE: u32 = 95;
const HOLD_MAX_CONFIDENCE: u32 = 85;
const SELL_MIN_CONFIDENCE: u32 = 60;

fn sample_boost<R: Rng>(rng: &mut R, boost: &BoostConfig) -> Result<f64, AnalysisError> {
    let normal = Normal::new(boost.mean, boost.std_dev)?;
    Ok(normal.sample(rng))
}

/// Base score plus three Gaussian boosts, truncated and clamped to [0, 100].
pub fn generate_ml_score<R: Rng>(
    rng: &mut R,
    config: &AnalyzerConfig,
) -> Result<u32, AnalysisError> {
    let financial_health = sample_boost(rng, &config.financial_health_boost)?;
    let technical = sample_boost(rng, &config.technical_boost)?;
    let market_sentiment = sample_boost(rng, &config.market_sentiment_boost)?;

    let raw = config.base_score + financial_health + technical + market_sentiment;
    Ok((raw as i64).clamp(0, 100) as u32)
}

/// Maps a score to a label; the confidence gets a random offset and a per-label cap or floor.
pub fn generate_recommendation<R: Rng>(rng: &mut R, score: u32) -> (Recommendation, u32) {
    if score >= BUY_THRESHOLD {
        let confidence = (score + rng.random_range(5..15)).min(BUY_MAX_CONFIDENCE);
        (Recommendation::Buy, confidence)
    } else if score >= HOLD_THRESHOLD {
        let confidence = (score + rng.random_range(0..10)).min(HOLD_MAX_CONFIDENCE);
        (Recommendation::Hold, confidence)
    } else {
        let confidence = score
            .saturating_sub(rng.random_range(5..15))
            .max(SELL_MIN_CONFIDENCE);
        (Recommendation::Sell, confidence)
    }
}
