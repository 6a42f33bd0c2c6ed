use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Mean and standard deviation of one normally distributed score boost.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoostConfig {
    pub mean: f64,
    pub std_dev: f64,
}

impl BoostConfig {
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub model_version: String,
    pub base_score: f64,
    pub financial_health_boost: BoostConfig,
    pub technical_boost: BoostConfig,
    pub market_sentiment_boost: BoostConfig,
    /// Price targets never fall below `current_price * price_floor_ratio`.
    pub price_floor_ratio: f64,
    pub volatility_factor_min: f64,
    pub volatility_factor_max: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model_version: "1.0.0".to_string(),
            base_score: 50.0,
            financial_health_boost: BoostConfig::new(15.0, 5.0),
            technical_boost: BoostConfig::new(10.0, 8.0),
            market_sentiment_boost: BoostConfig::new(5.0, 10.0),
            price_floor_ratio: 0.5,
            volatility_factor_min: 0.05,
            volatility_factor_max: 0.25,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let boosts = [
            ("financial_health_boost", &self.financial_health_boost),
            ("technical_boost", &self.technical_boost),
            ("market_sentiment_boost", &self.market_sentiment_boost),
        ];
        for (name, boost) in boosts {
            if !boost.mean.is_finite() || !boost.std_dev.is_finite() || boost.std_dev < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} needs a finite mean and a non-negative std_dev",
                    name
                )));
            }
        }
        if !self.base_score.is_finite() {
            return Err(ConfigError::Invalid("base_score must be finite".into()));
        }
        if !(self.price_floor_ratio > 0.0 && self.price_floor_ratio <= 1.0) {
            return Err(ConfigError::Invalid("price_floor_ratio must be in (0, 1]".into()));
        }
        if !(self.volatility_factor_min >= 0.0
            && self.volatility_factor_min < self.volatility_factor_max
            && self.volatility_factor_max.is_finite())
        {
            return Err(ConfigError::Invalid(
                "volatility factor range must be non-empty and non-negative".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fixed RNG seed for reproducible reports; entropy-seeded when absent.
    pub seed: Option<u64>,
    pub symbol: String,
    pub current_price: f64,
    pub analyzer: AnalyzerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            symbol: "AAPL".to_string(),
            current_price: 175.50,
            analyzer: AnalyzerConfig::default(),
        }
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.analyzer.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.analyzer.model_version, "1.0.0");
    }

    #[test]
    fn partial_analyzer_section_keeps_other_defaults() {
        let config = parse_config(
            r#"{"seed": 7, "analyzer": {"technical_boost": {"mean": 1.0, "std_dev": 2.0}}}"#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.analyzer.technical_boost, BoostConfig::new(1.0, 2.0));
        assert_eq!(config.analyzer.base_score, 50.0);
    }

    #[test]
    fn negative_std_dev_is_rejected() {
        let err = parse_config(
            r#"{"analyzer": {"market_sentiment_boost": {"mean": 5.0, "std_dev": -1.0}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn inverted_volatility_range_is_rejected() {
        let err = parse_config(
            r#"{"analyzer": {"volatility_factor_min": 0.3, "volatility_factor_max": 0.1}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse_config("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_config("does-not-exist/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
