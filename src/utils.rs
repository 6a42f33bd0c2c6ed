// Utility functions
use crate::model::PricePoint;

/// Closing prices of the most recent `window` records, oldest first.
pub fn recent_closes(history: &[PricePoint], window: usize) -> Vec<f64> {
    let start = history.len().saturating_sub(window);
    history[start..].iter().map(|p| p.close_price).collect()
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by N).
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Ratio with the denominator floored at 1.
pub fn floored_ratio(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator.max(1.0)
}
