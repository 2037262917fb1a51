use serde::{Deserialize, Serialize};

use crate::metrics::MetricsBundle;
use crate::scenario::ScenarioComparison;

// =============================================================================
// Status
// =============================================================================

/// Terminal states of the feasibility classifier.
///
/// Ordered from worst to best among the scored states; `InsufficientData`
/// sorts first since it carries no score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeasibilityStatus {
    InsufficientData,
    HighRisk,
    ModerateRisk,
    FeasibleWithCaveats,
    Feasible,
}

impl FeasibilityStatus {
    /// Maps a benchmark score to its status.
    pub fn from_score(score: u8) -> Self {
        if score >= 4 {
            FeasibilityStatus::Feasible
        } else if score >= 3 {
            FeasibilityStatus::FeasibleWithCaveats
        } else if score >= 2 {
            FeasibilityStatus::ModerateRisk
        } else {
            FeasibilityStatus::HighRisk
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeasibilityStatus::InsufficientData => "INSUFFICIENT_DATA",
            FeasibilityStatus::Feasible => "FEASIBLE",
            FeasibilityStatus::FeasibleWithCaveats => "FEASIBLE_WITH_CAVEATS",
            FeasibilityStatus::ModerateRisk => "MODERATE_RISK",
            FeasibilityStatus::HighRisk => "HIGH_RISK",
        }
    }

    /// Headline shown on the conclusion card.
    pub fn title(&self) -> &'static str {
        match self {
            FeasibilityStatus::InsufficientData => "Menunggu Data...",
            FeasibilityStatus::Feasible => "Sangat Layak!",
            FeasibilityStatus::FeasibleWithCaveats => "Layak dengan Pertimbangan",
            FeasibilityStatus::ModerateRisk => "Risiko Sedang",
            FeasibilityStatus::HighRisk => "Risiko Tinggi",
        }
    }
}

impl std::fmt::Display for FeasibilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Benchmark checks
// =============================================================================

/// Whether a larger metric value is better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricDirection {
    HigherIsBetter,
    LowerIsBetter,
}

/// The four metrics scored against a benchmark, in remediation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BenchmarkMetric {
    Irr,
    PaybackPeriod,
    Roi,
    NetMargin,
}

impl BenchmarkMetric {
    pub const ALL: [BenchmarkMetric; 4] = [
        BenchmarkMetric::Irr,
        BenchmarkMetric::PaybackPeriod,
        BenchmarkMetric::Roi,
        BenchmarkMetric::NetMargin,
    ];

    pub fn direction(&self) -> MetricDirection {
        match self {
            BenchmarkMetric::PaybackPeriod => MetricDirection::LowerIsBetter,
            _ => MetricDirection::HigherIsBetter,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BenchmarkMetric::Irr => "IRR",
            BenchmarkMetric::PaybackPeriod => "Payback Period",
            BenchmarkMetric::Roi => "ROI",
            BenchmarkMetric::NetMargin => "Net Margin",
        }
    }

    pub fn value_of(&self, metrics: &MetricsBundle) -> f64 {
        match self {
            BenchmarkMetric::Irr => metrics.irr,
            BenchmarkMetric::PaybackPeriod => metrics.payback_period,
            BenchmarkMetric::Roi => metrics.roi,
            BenchmarkMetric::NetMargin => metrics.net_margin,
        }
    }
}

/// Outcome of comparing one metric against its benchmark threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkCheck {
    pub metric: BenchmarkMetric,
    pub value: f64,
    pub target: f64,
    pub passed: bool,
}

// =============================================================================
// Verdict
// =============================================================================

/// Classifier output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub status: FeasibilityStatus,
    /// Number of passing checks, 0..=4
    pub score: u8,
    /// One suggestion per failing check, in IRR, Payback, ROI, Margin order
    pub remediation: Vec<String>,
    /// Individual checks; empty when the status is `InsufficientData`
    pub checks: Vec<BenchmarkCheck>,
}

impl Verdict {
    pub fn insufficient_data() -> Self {
        Self {
            status: FeasibilityStatus::InsufficientData,
            score: 0,
            remediation: Vec::new(),
            checks: Vec::new(),
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(
            self.status,
            FeasibilityStatus::Feasible | FeasibilityStatus::FeasibleWithCaveats
        )
    }

    pub fn failing_checks(&self) -> impl Iterator<Item = &BenchmarkCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// Explanatory sentence shown below the title.
    pub fn summary(&self) -> String {
        let total = crate::constants::BENCHMARK_CHECK_COUNT;
        match self.status {
            FeasibilityStatus::InsufficientData => "Lengkapi data modal, harga, volume, dan biaya untuk melihat kesimpulan kelayakan.".to_string(),
            FeasibilityStatus::Feasible => "Berdasarkan benchmark industri, metrik keuangan Anda sangat solid. Potensi tinggi untuk dilanjutkan.".to_string(),
            FeasibilityStatus::FeasibleWithCaveats => format!(
                "Beberapa metrik sudah baik, namun ada {} parameter yang belum memenuhi benchmark. Tinjau kembali strategi harga atau efisiensi biaya.",
                total.saturating_sub(self.score)
            ),
            FeasibilityStatus::ModerateRisk => format!(
                "Hanya {} dari {} metrik yang memenuhi benchmark industri. Diperlukan revisi model bisnis yang signifikan.",
                self.score, total
            ),
            FeasibilityStatus::HighRisk => "Metrik keuangan Anda berada di bawah benchmark industri. Diperlukan revisi model bisnis yang signifikan atau pertimbangkan ulang ide bisnis.".to_string(),
        }
    }
}

/// Result of a full assessment: baseline and scenario metrics, their
/// comparison, and the verdict on the scenario metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityAssessment {
    pub industry_key: String,
    pub comparison: ScenarioComparison,
    pub verdict: Verdict,
}

impl FeasibilityAssessment {
    pub fn baseline(&self) -> Option<&MetricsBundle> {
        self.comparison.baseline.as_ref()
    }

    pub fn metrics(&self) -> Option<&MetricsBundle> {
        self.comparison.scenario.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_score() {
        assert_eq!(FeasibilityStatus::from_score(4), FeasibilityStatus::Feasible);
        assert_eq!(FeasibilityStatus::from_score(3), FeasibilityStatus::FeasibleWithCaveats);
        assert_eq!(FeasibilityStatus::from_score(2), FeasibilityStatus::ModerateRisk);
        assert_eq!(FeasibilityStatus::from_score(1), FeasibilityStatus::HighRisk);
        assert_eq!(FeasibilityStatus::from_score(0), FeasibilityStatus::HighRisk);
    }

    #[test]
    fn test_status_ordering() {
        assert!(FeasibilityStatus::HighRisk < FeasibilityStatus::ModerateRisk);
        assert!(FeasibilityStatus::ModerateRisk < FeasibilityStatus::FeasibleWithCaveats);
        assert!(FeasibilityStatus::FeasibleWithCaveats < FeasibilityStatus::Feasible);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&FeasibilityStatus::FeasibleWithCaveats).unwrap();
        assert_eq!(json, "\"FEASIBLE_WITH_CAVEATS\"");
        assert_eq!(FeasibilityStatus::InsufficientData.to_string(), "INSUFFICIENT_DATA");
    }

    #[test]
    fn test_summary_mentions_counts() {
        let verdict = Verdict {
            status: FeasibilityStatus::ModerateRisk,
            score: 2,
            remediation: Vec::new(),
            checks: Vec::new(),
        };
        assert!(verdict.summary().starts_with("Hanya 2 dari 4 metrik"));

        let verdict = Verdict {
            status: FeasibilityStatus::FeasibleWithCaveats,
            score: 3,
            ..Verdict::insufficient_data()
        };
        assert!(verdict.summary().contains("ada 1 parameter"));
        assert!(verdict.is_feasible());
    }

    #[test]
    fn test_payback_is_lower_is_better() {
        assert_eq!(
            BenchmarkMetric::PaybackPeriod.direction(),
            MetricDirection::LowerIsBetter
        );
        assert_eq!(BenchmarkMetric::Roi.direction(), MetricDirection::HigherIsBetter);
    }
}
