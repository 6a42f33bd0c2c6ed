use crate::model::{Factor, Impact};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Number of canned insights drawn per report.
const INSIGHT_DRAW: usize = 5;

const HIGH_SCORE_INSIGHTS: [&str; 2] = [
    "Exceptional financial performance metrics detected",
    "Strong competitive positioning in industry sector",
];

const LOW_SCORE_INSIGHTS: [&str; 2] = [
    "Some concerns identified in recent financial performance",
    "Market headwinds may impact near-term growth prospects",
];

const RISK_NOTES: [&str; 4] = [
    "Increased competition in core market segments",
    "Regulatory changes may impact future operations",
    "Currency fluctuations affecting international revenue",
    "Supply chain disruptions in key components",
];

#[derive(Debug, Clone, Copy)]
enum ImpactRule {
    PositiveAbove(u32),
    NegativeBelow(u32),
}

impl ImpactRule {
    fn apply(self, score: u32) -> Impact {
        match self {
            ImpactRule::PositiveAbove(t) if score > t => Impact::Positive,
            ImpactRule::NegativeBelow(t) if score < t => Impact::Negative,
            _ => Impact::Neutral,
        }
    }
}

struct FactorTemplate {
    name: &'static str,
    min: u32,
    max: u32,
    weight: f64,
    description: &'static str,
    rule: ImpactRule,
}

const FACTORS: [FactorTemplate; 5] = [
    FactorTemplate {
        name: "Financial Health",
        min: 65,
        max: 95,
        weight: 0.25,
        description: "Balance sheet strength and cash flow analysis",
        rule: ImpactRule::PositiveAbove(70),
    },
    FactorTemplate {
        name: "Growth Potential",
        min: 55,
        max: 85,
        weight: 0.20,
        description: "Revenue growth trends and market expansion opportunities",
        rule: ImpactRule::PositiveAbove(65),
    },
    FactorTemplate {
        name: "Market Sentiment",
        min: 45,
        max: 75,
        weight: 0.15,
        description: "Analyst ratings and social media sentiment",
        rule: ImpactRule::PositiveAbove(60),
    },
    FactorTemplate {
        name: "Valuation",
        min: 40,
        max: 80,
        weight: 0.20,
        description: "P/E ratio and other valuation metrics vs peers",
        rule: ImpactRule::NegativeBelow(50),
    },
    FactorTemplate {
        name: "Technical Indicators",
        min: 50,
        max: 85,
        weight: 0.20,
        description: "Moving averages, RSI, and momentum indicators",
        rule: ImpactRule::PositiveAbove(65),
    },
];

/// Five fixed factors, each with a uniform score from its own half-open range.
pub fn analyze_factors<R: Rng>(rng: &mut R) -> Vec<Factor> {
    FACTORS
        .iter()
        .map(|template| {
            let score = rng.random_range(template.min..template.max);
            Factor {
                name: template.name.to_string(),
                score,
                weight: template.weight,
                impact: template.rule.apply(score),
                description: template.description.to_string(),
            }
        })
        .collect()
}

fn base_insights(symbol: &str) -> Vec<String> {
    vec![
        format!("{} shows strong fundamental indicators in recent quarters", symbol),
        "Revenue growth trajectory remains positive with market expansion".to_string(),
        "Balance sheet demonstrates healthy cash position and manageable debt levels".to_string(),
        "Technical indicators suggest favorable momentum patterns".to_string(),
        "Analyst consensus aligns with our ML-generated recommendation".to_string(),
    ]
}

/// Canned insights drawn without replacement, plus two score-specific lines
/// when the score is above 80 or below 60.
pub fn generate_insights<R: Rng>(rng: &mut R, symbol: &str, ml_score: u32) -> Vec<String> {
    let pool = base_insights(symbol);
    let mut insights: Vec<String> = pool
        .choose_multiple(rng, INSIGHT_DRAW.min(pool.len()))
        .cloned()
        .collect();

    if ml_score > 80 {
        insights.extend(HIGH_SCORE_INSIGHTS.iter().map(|s| s.to_string()));
    } else if ml_score < 60 {
        insights.extend(LOW_SCORE_INSIGHTS.iter().map(|s| s.to_string()));
    }
    insights
}

/// The canned risk notes in random order.
pub fn generate_risk_notes<R: Rng>(rng: &mut R) -> Vec<String> {
    RISK_NOTES
        .choose_multiple(rng, RISK_NOTES.len())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn factors_are_fixed_and_in_range() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let factors = analyze_factors(&mut rng);
            let names: Vec<&str> = factors.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(
                names,
                [
                    "Financial Health",
                    "Growth Potential",
                    "Market Sentiment",
                    "Valuation",
                    "Technical Indicators"
                ]
            );
            for (factor, template) in factors.iter().zip(FACTORS.iter()) {
                assert!(factor.score >= template.min && factor.score < template.max);
                assert_eq!(factor.weight, template.weight);
            }
        }
    }

    #[test]
    fn factor_impact_thresholds() {
        assert_eq!(FACTORS[0].rule.apply(70), Impact::Neutral);
        assert_eq!(FACTORS[0].rule.apply(71), Impact::Positive);
        assert_eq!(FACTORS[2].rule.apply(60), Impact::Neutral);
        assert_eq!(FACTORS[2].rule.apply(61), Impact::Positive);
        assert_eq!(FACTORS[3].rule.apply(49), Impact::Negative);
        assert_eq!(FACTORS[3].rule.apply(50), Impact::Neutral);
        assert_eq!(FACTORS[4].rule.apply(66), Impact::Positive);
    }

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = FACTORS.iter().map(|f| f.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn insights_draw_whole_pool_without_repeats() {
        let mut rng = StdRng::seed_from_u64(9);
        let insights = generate_insights(&mut rng, "MSFT", 70);
        assert_eq!(insights.len(), 5);
        let unique: HashSet<&String> = insights.iter().collect();
        assert_eq!(unique.len(), 5);
        assert!(insights.iter().any(|s| s.starts_with("MSFT ")));
    }

    #[test]
    fn score_specific_insights_are_appended() {
        let mut rng = StdRng::seed_from_u64(9);
        let high = generate_insights(&mut rng, "AAPL", 81);
        assert_eq!(high.len(), 7);
        assert_eq!(high[5], HIGH_SCORE_INSIGHTS[0]);
        assert_eq!(high[6], HIGH_SCORE_INSIGHTS[1]);

        let low = generate_insights(&mut rng, "AAPL", 59);
        assert_eq!(low.len(), 7);
        assert_eq!(low[5..].to_vec(), LOW_SCORE_INSIGHTS.map(String::from).to_vec());

        assert_eq!(generate_insights(&mut rng, "AAPL", 80).len(), 5);
        assert_eq!(generate_insights(&mut rng, "AAPL", 60).len(), 5);
    }

    #[test]
    fn risk_notes_cover_the_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        let notes = generate_risk_notes(&mut rng);
        let unique: HashSet<&str> = notes.iter().map(String::as_str).collect();
        let expected: HashSet<&str> = RISK_NOTES.into_iter().collect();
        assert_eq!(unique, expected);
    }
}
