use crate::config::AnalyzerConfig;
use crate::model::{AnalysisError, Horizon};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::collections::BTreeMap;

const DAILY_DRIFT_MEAN: f64 = 0.001;
const DAILY_DRIFT_STD: f64 = 0.002;
const TRADING_YEAR_DAYS: f64 = 365.0;

/// Simulates a drifted, volatile move for every horizon and floors it at
/// `current_price * price_floor_ratio`.
pub fn predict_price_targets<R: Rng>(
    rng: &mut R,
    config: &AnalyzerConfig,
    current_price: f64,
) -> Result<BTreeMap<Horizon, f64>, AnalysisError> {
    let (min, max) = (config.volatility_factor_min, config.volatility_factor_max);
    if !(min.is_finite() && max.is_finite() && min < max) {
        return Err(AnalysisError::Distribution(format!(
            "volatility factor range [{}, {}) is empty or not finite",
            min, max
        )));
    }
    let volatility_factor = rng.random_range(min..max);
    let drift_dist = Normal::new(DAILY_DRIFT_MEAN, DAILY_DRIFT_STD)?;
    let floor = current_price * config.price_floor_ratio;

    let mut targets = BTreeMap::new();
    for horizon in Horizon::ALL {
        let days = horizon.days() as f64;
        let drift = drift_dist.sample(rng) * days;
        let volatility = volatility_factor * (days / TRADING_YEAR_DAYS).sqrt();
        let shock = Normal::new(0.0, volatility)?.sample(rng);

        let predicted = current_price * (1.0 + drift + shock);
        targets.insert(horizon, predicted.max(floor));
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_horizon_is_present_and_floored() {
        let config = AnalyzerConfig::default();
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let targets = predict_price_targets(&mut rng, &config, 175.50).unwrap();
            assert_eq!(targets.len(), 4);
            for horizon in Horizon::ALL {
                assert!(targets[&horizon] >= 87.75, "{:?} below floor", horizon);
            }
        }
    }

    #[test]
    fn floor_applies_to_large_shocks() {
        let mut config = AnalyzerConfig::default();
        config.volatility_factor_min = 50.0;
        config.volatility_factor_max = 60.0;
        let mut hit_floor = false;
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let targets = predict_price_targets(&mut rng, &config, 100.0).unwrap();
            for price in targets.values() {
                assert!(*price >= 50.0);
                hit_floor |= *price == 50.0;
            }
        }
        assert!(hit_floor);
    }

    #[test]
    fn empty_volatility_range_is_rejected() {
        let mut config = AnalyzerConfig::default();
        config.volatility_factor_max = config.volatility_factor_min;
        let mut rng = StdRng::seed_from_u64(0);
        assert!(predict_price_targets(&mut rng, &config, 10.0).is_err());
    }

    #[test]
    fn non_finite_volatility_bounds_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        for (min, max) in [(0.05, f64::INFINITY), (f64::NEG_INFINITY, 0.25), (f64::NAN, 0.25)] {
            let mut config = AnalyzerConfig::default();
            config.volatility_factor_min = min;
            config.volatility_factor_max = max;
            let err = predict_price_targets(&mut rng, &config, 10.0).unwrap_err();
            assert!(matches!(err, AnalysisError::Distribution(_)));
        }
    }
}
