// Rendering of analysis results for the console
use crate::model::{AnalysisResult, Impact};
use std::fmt::Write;

/// Indented JSON dump of the full result.
pub fn to_pretty_json(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Short human-readable summary of a result.
pub fn format_summary(result: &AnalysisResult) -> String {
    let mut out = format!(
        concat!(
            "📊 {} | ML score {}/100\n",
            "🧭 Recommendation: {} ({}% confidence)\n",
            "⚠️ Risk: {:?} ({}/100)\n"
        ),
        result.symbol,
        result.ml_score,
        result.recommendation.as_str(),
        result.confidence,
        result.risk_level,
        result.risk_score,
    );

    out.push_str("🎯 Price targets:\n");
    for (horizon, price) in &result.price_targets {
        let _ = writeln!(out, "  {:<13} {:>10.2}", horizon.label(), price);
    }

    out.push_str("🧩 Factors:\n");
    for factor in &result.factors {
        let marker = match factor.impact {
            Impact::Positive => '+',
            Impact::Neutral => '=',
            Impact::Negative => '-',
        };
        let _ = writeln!(
            out,
            "  [{}] {:<21} {:>3} (weight {:.2})",
            marker, factor.name, factor.score, factor.weight
        );
    }

    out.push_str("💡 Insights:\n");
    for insight in &result.insights {
        let _ = writeln!(out, "  • {}", insight);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{AnalyzerImpl, StockAnalyzer};
    use crate::config::AnalyzerConfig;
    use crate::model::{FinancialData, PricePoint};

    fn result() -> AnalysisResult {
        let history: Vec<PricePoint> = (0..15).map(|i| PricePoint::new(20.0 + i as f64)).collect();
        AnalyzerImpl::with_seed(AnalyzerConfig::default(), 12)
            .analyze_stock("TSLA", &FinancialData::default(), &history, 25.0)
            .unwrap()
    }

    #[test]
    fn json_uses_report_field_names() {
        let json: serde_json::Value =
            serde_json::from_str(&to_pretty_json(&result()).unwrap()).unwrap();
        for key in [
            "symbol",
            "timestamp",
            "ml_score",
            "recommendation",
            "confidence",
            "price_targets",
            "risk_level",
            "risk_score",
            "factors",
            "insights",
            "risks",
            "model_version",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        let targets = json["price_targets"].as_object().unwrap();
        let keys: Vec<&str> = targets.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for key in ["one_week", "one_month", "three_months", "six_months"] {
            assert!(targets.contains_key(key));
        }
        assert!(["BUY", "HOLD", "SELL"].contains(&json["recommendation"].as_str().unwrap()));
    }

    #[test]
    fn summary_mentions_every_section() {
        let r = result();
        let summary = format_summary(&r);
        assert!(summary.contains("TSLA"));
        assert!(summary.contains(r.recommendation.as_str()));
        assert!(summary.contains("one_week"));
        assert!(summary.contains("Technical Indicators"));
        for insight in &r.insights {
            assert!(summary.contains(insight.as_str()));
        }
    }
}
