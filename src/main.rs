use chrono::Utc;
use ml_stock_analyzer::analyzer::{AnalyzerImpl, StockAnalyzer};
use ml_stock_analyzer::config::{AppConfig, load_config};
use ml_stock_analyzer::report::{format_summary, to_pretty_json};
use ml_stock_analyzer::sample::{sample_financial_data, sample_price_history};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "config.json";
const SAMPLE_DAYS: usize = 30;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration, falling back to defaults when no file is present
    let config = if Path::new(CONFIG_PATH).exists() {
        match load_config(CONFIG_PATH) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {}", e);
                return;
            }
        }
    } else {
        warn!("{} not found, using defaults", CONFIG_PATH);
        AppConfig::default()
    };

    if let Err(e) = run(config) {
        error!("{}", e);
    }
}

fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (mut analyzer, mut data_rng) = match config.seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            (
                AnalyzerImpl::with_seed(config.analyzer.clone(), seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            )
        }
        None => (AnalyzerImpl::new(config.analyzer.clone()), StdRng::from_os_rng()),
    };

    let financial = sample_financial_data();
    let history = sample_price_history(&mut data_rng, SAMPLE_DAYS, Utc::now().date_naive())?;
    info!("Analyzing {} with {} closes", config.symbol, history.len());

    let Some(result) =
        analyzer.analyze_stock(&config.symbol, &financial, &history, config.current_price)
    else {
        warn!("Analysis unavailable for {}", config.symbol);
        return Ok(());
    };

    println!("ML Analysis Result:");
    println!("{}", to_pretty_json(&result)?);
    println!();
    print!("{}", format_summary(&result));
    Ok(())
}
