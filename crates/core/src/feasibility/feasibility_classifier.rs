use log::debug;

use super::feasibility_model::{
    BenchmarkCheck, BenchmarkMetric, FeasibilityStatus, MetricDirection, Verdict,
};
use crate::benchmarks::IndustryBenchmark;
use crate::format::{format_percent_short, format_target, format_years, MetricValue};
use crate::metrics::MetricsBundle;

/// Threshold of `metric` within a benchmark.
pub fn benchmark_target(benchmark: &IndustryBenchmark, metric: BenchmarkMetric) -> f64 {
    match metric {
        BenchmarkMetric::Irr => benchmark.min_irr,
        BenchmarkMetric::PaybackPeriod => benchmark.max_payback,
        BenchmarkMetric::Roi => benchmark.min_roi,
        BenchmarkMetric::NetMargin => benchmark.min_margin,
    }
}

/// Compares a value against a threshold, inclusively.
///
/// `NaN` never passes; `+Infinity` fails a lower-is-better threshold.
pub fn meets_target(value: f64, target: f64, direction: MetricDirection) -> bool {
    match direction {
        MetricDirection::HigherIsBetter => value >= target,
        MetricDirection::LowerIsBetter => value <= target,
    }
}

/// Per-metric indicator for metric cards.
///
/// Returns `None` (no indicator) when the target is missing or zero, or when
/// the value is zero or non-finite and so not meaningful to grade.
pub fn evaluate_metric(value: f64, target: Option<f64>, direction: MetricDirection) -> Option<bool> {
    let target = target.filter(|t| *t != 0.0)?;
    if value == 0.0 || !value.is_finite() {
        return None;
    }
    Some(meets_target(value, target, direction))
}

/// Runs the four benchmark checks in remediation order.
pub fn run_checks(metrics: &MetricsBundle, benchmark: &IndustryBenchmark) -> Vec<BenchmarkCheck> {
    BenchmarkMetric::ALL
        .iter()
        .map(|metric| {
            let value = metric.value_of(metrics);
            let target = benchmark_target(benchmark, *metric);
            BenchmarkCheck {
                metric: *metric,
                value,
                target,
                passed: meets_target(value, target, metric.direction()),
            }
        })
        .collect()
}

/// Suggestion for a failing check, naming the metric, its value and the target.
pub fn remediation_message(check: &BenchmarkCheck) -> String {
    let target = format_target(check.target);
    match check.metric {
        BenchmarkMetric::PaybackPeriod => match MetricValue::classify(check.value) {
            MetricValue::Finite(_) => format!(
                "Kurangi Payback Period dari {} menjadi maksimal {} tahun",
                format_years(check.value),
                target
            ),
            _ => format!(
                "Payback Period {}; capai arus kas tahunan positif agar modal kembali dalam maksimal {} tahun",
                format_years(check.value),
                target
            ),
        },
        metric => format!(
            "Tingkatkan {} dari {} menjadi minimal {}%",
            metric.label(),
            format_percent_short(check.value),
            target
        ),
    }
}

/// Classifies a metrics bundle against an industry benchmark.
///
/// `metrics` is `None` when the economics are not computable. A missing
/// bundle, an undeterminable IRR or a missing benchmark yields
/// `INSUFFICIENT_DATA`.
pub fn classify(metrics: Option<&MetricsBundle>, benchmark: Option<&IndustryBenchmark>) -> Verdict {
    let (Some(metrics), Some(benchmark)) = (metrics, benchmark) else {
        debug!(
            "Insufficient data for classification: metrics={}, benchmark={}",
            metrics.is_some(),
            benchmark.is_some()
        );
        return Verdict::insufficient_data();
    };
    if !metrics.has_irr() {
        debug!("Insufficient data for classification: IRR is undeterminable");
        return Verdict::insufficient_data();
    }

    let checks = run_checks(metrics, benchmark);
    let score = checks.iter().filter(|c| c.passed).count() as u8;
    let status = FeasibilityStatus::from_score(score);
    let mut verdict = Verdict {
        status,
        score,
        remediation: Vec::new(),
        checks,
    };
    if status != FeasibilityStatus::Feasible {
        let remediation = verdict.failing_checks().map(remediation_message).collect();
        verdict.remediation = remediation;
    }
    verdict
}
