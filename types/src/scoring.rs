//! Deterministic ESG scoring rules used by the report analysis view.
//!
//! Each pillar score is the weighted mean of its reported metrics (values
//! above zero). A pillar missing a mandatory metric is halved, and any missing
//! mandatory metric blocks the top rank.
//!
//! [`compare_with_benchmark`] sets pillar scores against an industry average.

use crate::pillar::Pillar;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// One entry of the metric catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSpec {
    pub code: &'static str,
    pub name: &'static str,
    pub pillar: Pillar,
    /// Weight within the pillar.
    pub weight: f64,
    pub mandatory: bool,
}

const fn metric(
    code: &'static str,
    name: &'static str,
    pillar: Pillar,
    weight: f64,
    mandatory: bool,
) -> MetricSpec {
    MetricSpec {
        code,
        name,
        pillar,
        weight,
        mandatory,
    }
}

pub const METRIC_CATALOG: [MetricSpec; 14] = [
    metric("E1", "GHG emissions", Pillar::Environment, 0.40, true),
    metric("E2", "Energy", Pillar::Environment, 0.20, false),
    metric("E3", "Water management", Pillar::Environment, 0.15, false),
    metric("E4", "Waste", Pillar::Environment, 0.15, false),
    metric("E5", "Green certification", Pillar::Environment, 0.10, false),
    metric("S1", "Occupational safety", Pillar::Social, 0.30, false),
    metric("S2", "Gender diversity", Pillar::Social, 0.20, false),
    metric("S3", "Training", Pillar::Social, 0.20, false),
    metric("S4", "Supply chain", Pillar::Social, 0.15, false),
    metric("S5", "Community", Pillar::Social, 0.15, false),
    metric("G1", "Board independence", Pillar::Governance, 0.40, false),
    metric("G2", "Business ethics", Pillar::Governance, 0.30, true),
    metric("G3", "Tax transparency", Pillar::Governance, 0.15, false),
    metric("G4", "Data security", Pillar::Governance, 0.15, false),
];

/// Catalog entries belonging to `pillar`, in catalog order.
pub fn metrics_of(pillar: Pillar) -> impl Iterator<Item = &'static MetricSpec> {
    METRIC_CATALOG.iter().filter(move |m| m.pillar == pillar)
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum EsgRank {
    Gold,
    Silver,
    Bronze,
    Unranked,
}

impl EsgRank {
    pub fn from_total(total: f64, gold_locked: bool) -> Self {
        if total >= 80.0 && !gold_locked {
            Self::Gold
        } else if total >= 55.0 {
            Self::Silver
        } else if total >= 35.0 {
            Self::Bronze
        } else {
            Self::Unranked
        }
    }
}

/// The outcome of scoring one set of metric values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Environment, Social, Governance, rounded to two decimals.
    pub pillar_scores: [f64; 3],
    pub total: f64,
    pub rank: EsgRank,
    pub flags: Vec<String>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total score from per-pillar scores, using the pillar weights.
pub fn weighted_total(pillar_scores: [f64; 3]) -> f64 {
    let total: f64 = Pillar::ALL
        .iter()
        .map(|p| pillar_scores[p.index()] * p.weight())
        .sum();
    round2(total)
}

/// Scores `values`, keyed by metric code. Missing codes count as zero and
/// unknown codes are ignored.
pub fn evaluate(values: &BTreeMap<String, f64>) -> Evaluation {
    let mut pillar_scores = [0.0; 3];
    let mut flags = Vec::new();
    let mut gold_locked = false;

    for pillar in Pillar::ALL {
        let mut weighted_sum = 0.0;
        let mut available_weight = 0.0;
        let mut missing_mandatory = false;

        for spec in metrics_of(pillar) {
            let value = values.get(spec.code).copied().unwrap_or(0.0);
            if value > 0.0 {
                weighted_sum += value * spec.weight;
                available_weight += spec.weight;
            } else if spec.mandatory {
                missing_mandatory = true;
                flags.push(format!("Missing mandatory metric: {}", spec.code));
            }
        }

        let mut score = if available_weight > 0.0 {
            weighted_sum / available_weight
        } else {
            0.0
        };
        if missing_mandatory {
            gold_locked = true;
            score *= 0.5;
        }
        pillar_scores[pillar.index()] = round2(score);
    }

    let total = weighted_total(pillar_scores);
    Evaluation {
        pillar_scores,
        total,
        rank: EsgRank::from_total(total, gold_locked),
        flags,
    }
}

/// Industry whose average pillar scores a company is compared against.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Industry {
    Technology,
    Finance,
    Manufacturing,
    Retail,
    Energy,
    Healthcare,
    #[default]
    Default,
}

impl Industry {
    /// Industry average E, S and G scores.
    pub fn benchmark(&self) -> [f64; 3] {
        match self {
            Self::Technology => [65.0, 70.0, 75.0],
            Self::Finance => [60.0, 68.0, 80.0],
            Self::Manufacturing => [55.0, 62.0, 65.0],
            Self::Retail => [58.0, 65.0, 68.0],
            Self::Energy => [45.0, 60.0, 70.0],
            Self::Healthcare => [62.0, 72.0, 73.0],
            Self::Default => [60.0, 65.0, 70.0],
        }
    }

    /// Parses an industry name, falling back to [`Industry::Default`] for
    /// names without a benchmark table.
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or_default()
    }
}

/// How a pillar score compares with the industry average.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumIs,
)]
pub enum Performance {
    /// At least 10 points above.
    Outstanding,
    /// At or above, by less than 10.
    Good,
    /// Below, by at most 10.
    #[strum(to_string = "Needs improvement")]
    NeedsImprovement,
    /// More than 10 points below.
    Weak,
}

impl Performance {
    pub fn from_difference(diff: f64) -> Self {
        if diff >= 10.0 {
            Self::Outstanding
        } else if diff >= 0.0 {
            Self::Good
        } else if diff >= -10.0 {
            Self::NeedsImprovement
        } else {
            Self::Weak
        }
    }

    fn recommendation(&self, pillar: Pillar) -> Option<String> {
        let code = pillar.code();
        match self {
            Self::Outstanding => Some(format!("✅ Keep building on the {code} strength")),
            Self::Good => None,
            Self::NeedsImprovement => Some(format!("⚠ Step up {code} activity")),
            Self::Weak => Some(format!("🚨 Urgent action needed on {code}")),
        }
    }
}

/// Equal share each pillar gets in the benchmark totals.
const BENCHMARK_PILLAR_SHARE: f64 = 0.33;

/// Pillar scores set against an industry average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub industry: Industry,
    pub benchmark_scores: [f64; 3],
    /// Company minus benchmark per pillar, rounded to two decimals.
    pub differences: [f64; 3],
    pub performance: [Performance; 3],
    pub recommendations: Vec<String>,
    pub company_total: f64,
    pub benchmark_total: f64,
    pub total_difference: f64,
}

/// Compares `company_scores` (E, S, G) with the averages for `industry`.
///
/// Totals give every pillar the same share rather than the rating weights.
pub fn compare_with_benchmark(company_scores: [f64; 3], industry: Industry) -> BenchmarkComparison {
    let benchmark_scores = industry.benchmark();
    let mut differences = [0.0; 3];
    let mut performance = [Performance::Good; 3];
    let mut recommendations = Vec::new();

    for pillar in Pillar::ALL {
        let i = pillar.index();
        let diff = company_scores[i] - benchmark_scores[i];
        differences[i] = round2(diff);
        performance[i] = Performance::from_difference(diff);
        recommendations.extend(performance[i].recommendation(pillar));
    }

    let share_total = |scores: [f64; 3]| -> f64 {
        scores.iter().map(|s| s * BENCHMARK_PILLAR_SHARE).sum()
    };
    let company_total = share_total(company_scores);
    let benchmark_total = share_total(benchmark_scores);

    BenchmarkComparison {
        industry,
        benchmark_scores,
        differences,
        performance,
        recommendations,
        company_total: round2(company_total),
        benchmark_total: round2(benchmark_total),
        total_difference: round2(company_total - benchmark_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pillar_weights_within_catalog_sum_to_one() {
        for pillar in Pillar::ALL {
            let sum: f64 = metrics_of(pillar).map(|m| m.weight).sum();
            assert!(close(sum, 1.0), "{pillar:?} weights sum to {sum}");
        }
    }

    #[test]
    fn uniform_values_reach_gold() {
        let all: Vec<(&str, f64)> = METRIC_CATALOG.iter().map(|m| (m.code, 90.0)).collect();
        let eval = evaluate(&values(&all));
        assert_eq!(eval.pillar_scores, [90.0, 90.0, 90.0]);
        assert!(close(eval.total, 90.0));
        assert_eq!(eval.rank, EsgRank::Gold);
        assert!(eval.flags.is_empty());
    }

    #[test]
    fn unreported_metrics_do_not_dilute_the_pillar() {
        let eval = evaluate(&values(&[("E1", 80.0), ("S1", 60.0), ("G2", 70.0)]));
        assert_eq!(eval.pillar_scores, [80.0, 60.0, 70.0]);
        assert!(close(eval.total, 70.0));
        assert_eq!(eval.rank, EsgRank::Silver);
    }

    #[test]
    fn missing_mandatory_metric_halves_pillar_and_blocks_gold() {
        let mut all: Vec<(&str, f64)> = METRIC_CATALOG.iter().map(|m| (m.code, 100.0)).collect();
        all.retain(|(code, _)| *code != "G2");
        let eval = evaluate(&values(&all));
        assert_eq!(eval.pillar_scores, [100.0, 100.0, 50.0]);
        assert!(close(eval.total, 85.0));
        assert_eq!(eval.rank, EsgRank::Silver);
        assert_eq!(eval.flags, vec!["Missing mandatory metric: G2".to_string()]);
    }

    #[test]
    fn empty_input_is_unranked() {
        let eval = evaluate(&BTreeMap::new());
        assert_eq!(eval.pillar_scores, [0.0, 0.0, 0.0]);
        assert_eq!(eval.rank, EsgRank::Unranked);
        assert_eq!(eval.flags.len(), 2);
    }

    #[test]
    fn rank_thresholds() {
        assert_eq!(EsgRank::from_total(80.0, false), EsgRank::Gold);
        assert_eq!(EsgRank::from_total(79.99, false), EsgRank::Silver);
        assert_eq!(EsgRank::from_total(55.0, true), EsgRank::Silver);
        assert_eq!(EsgRank::from_total(35.0, false), EsgRank::Bronze);
        assert_eq!(EsgRank::from_total(34.99, false), EsgRank::Unranked);
        assert_eq!(EsgRank::Gold.to_string(), "GOLD");
    }

    #[test]
    fn industry_names_fall_back_to_default_table() {
        assert_eq!(Industry::from_name(" Energy "), Industry::Energy);
        assert_eq!(Industry::from_name("TECHNOLOGY"), Industry::Technology);
        assert_eq!(Industry::from_name("aerospace"), Industry::Default);
        assert_eq!(Industry::Default.benchmark(), [60.0, 65.0, 70.0]);
        assert_eq!(Industry::Finance.to_string(), "finance");
    }

    #[test]
    fn performance_bands() {
        assert_eq!(Performance::from_difference(10.0), Performance::Outstanding);
        assert_eq!(Performance::from_difference(9.99), Performance::Good);
        assert_eq!(Performance::from_difference(0.0), Performance::Good);
        assert_eq!(Performance::from_difference(-0.01), Performance::NeedsImprovement);
        assert_eq!(Performance::from_difference(-10.0), Performance::NeedsImprovement);
        assert_eq!(Performance::from_difference(-10.01), Performance::Weak);
        assert_eq!(Performance::NeedsImprovement.to_string(), "Needs improvement");
    }

    #[test]
    fn published_scores_against_technology() {
        let cmp = compare_with_benchmark([82.0, 68.0, 85.0], Industry::Technology);
        assert_eq!(cmp.benchmark_scores, [65.0, 70.0, 75.0]);
        assert_eq!(cmp.differences, [17.0, -2.0, 10.0]);
        assert_eq!(
            cmp.performance,
            [
                Performance::Outstanding,
                Performance::NeedsImprovement,
                Performance::Outstanding
            ]
        );
        assert_eq!(cmp.recommendations.len(), 3);
        assert_eq!(cmp.recommendations[1], "⚠ Step up S activity");
        assert!(close(cmp.company_total, 77.55));
        assert!(close(cmp.benchmark_total, 69.3));
        assert!(close(cmp.total_difference, 8.25));
    }

    #[test]
    fn far_below_average_is_weak_everywhere() {
        let cmp = compare_with_benchmark([0.0, 0.0, 0.0], Industry::Energy);
        assert!(cmp.performance.iter().all(Performance::is_weak));
        assert_eq!(cmp.differences, [-45.0, -60.0, -70.0]);
        assert_eq!(cmp.recommendations.len(), 3);
        assert!(cmp.recommendations.iter().all(|r| r.contains("Urgent")));
    }

    #[test]
    fn matching_the_average_is_good_without_recommendations() {
        let cmp = compare_with_benchmark(Industry::Retail.benchmark(), Industry::Retail);
        assert_eq!(cmp.differences, [0.0, 0.0, 0.0]);
        assert!(cmp.performance.iter().all(Performance::is_good));
        assert!(cmp.recommendations.is_empty());
        assert!(close(cmp.total_difference, 0.0));
    }
}
