// Demonstration data: one large-cap balance sheet and a noisy upward price series
use crate::model::{AnalysisError, BalanceSheet, FinancialData, IncomeStatement, PricePoint};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand_distr::{Distribution, Normal};

pub fn sample_financial_data() -> FinancialData {
    FinancialData {
        balance_sheet: Some(BalanceSheet {
            total_assets: 365_000_000_000.0,
            total_liabilities: 258_000_000_000.0,
            shareholders_equity: 107_000_000_000.0,
            cash_and_equivalents: 48_000_000_000.0,
        }),
        income_statement: Some(IncomeStatement {
            revenue: 394_000_000_000.0,
            gross_profit: 170_000_000_000.0,
            operating_income: 114_000_000_000.0,
            net_income: 99_000_000_000.0,
        }),
    }
}

/// `days` closes of `150 + i + N(0, 5)`, dated consecutively up to `end`.
pub fn sample_price_history<R: Rng>(
    rng: &mut R,
    days: usize,
    end: NaiveDate,
) -> Result<Vec<PricePoint>, AnalysisError> {
    let noise = Normal::new(0.0, 5.0)?;
    Ok((0..days)
        .map(|i| PricePoint {
            date: Some(end - Duration::days((days - 1 - i) as i64)),
            close_price: 150.0 + i as f64 + noise.sample(rng),
        })
        .collect())
}
