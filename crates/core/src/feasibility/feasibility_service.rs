//! Feasibility service.
//!
//! Wires the metrics engine, the scenario layer, the benchmark provider and
//! the classifier into a single entry point for callers.

use std::sync::Arc;

use log::debug;

use super::feasibility_classifier::classify;
use super::feasibility_model::{FeasibilityAssessment, Verdict};
use crate::benchmarks::{BenchmarkProvider, IndustryTemplate, StaticBenchmarkProvider};
use crate::config::EngineConfig;
use crate::errors::Result;
use crate::metrics::{calculate_metrics, calculate_scenario_metrics, FinancialInputs, MetricsBundle};
use crate::scenario::{compare_scenarios, ScenarioComparison, ScenarioDelta};

/// Operations exposed to presentation layers.
pub trait FeasibilityServiceTrait: Send + Sync {
    /// Metrics for the inputs as entered.
    fn metrics(&self, inputs: &FinancialInputs) -> Option<MetricsBundle>;

    /// Baseline versus scenario metrics with per-metric impacts.
    fn simulate(&self, inputs: &FinancialInputs, scenario: &ScenarioDelta) -> ScenarioComparison;

    /// Runs the scenario and classifies its metrics against the industry.
    fn assess(
        &self,
        inputs: &FinancialInputs,
        scenario: &ScenarioDelta,
        industry_key: &str,
    ) -> FeasibilityAssessment;

    /// Industries available for selection.
    fn industries(&self) -> Vec<IndustryTemplate>;
}

/// Default implementation backed by a [`BenchmarkProvider`].
pub struct FeasibilityService {
    benchmarks: Arc<dyn BenchmarkProvider>,
    config: EngineConfig,
}

impl FeasibilityService {
    pub fn new(benchmarks: Arc<dyn BenchmarkProvider>) -> Self {
        Self {
            benchmarks,
            config: EngineConfig::default(),
        }
    }

    /// Creates a service with custom engine settings.
    ///
    /// Fails with `InvalidConfigValue` when the settings are out of range.
    pub fn with_config(benchmarks: Arc<dyn BenchmarkProvider>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { benchmarks, config })
    }

    /// Service using the built-in industry table and default settings.
    pub fn with_builtin_benchmarks() -> Self {
        Self::new(Arc::new(StaticBenchmarkProvider::builtin()))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Classifies an already computed bundle.
    pub fn classify_metrics(&self, metrics: Option<&MetricsBundle>, industry_key: &str) -> Verdict {
        let benchmark = self.benchmarks.benchmark(industry_key);
        if benchmark.is_none() {
            debug!("No benchmark registered for industry '{}'", industry_key);
        }
        classify(metrics, benchmark.as_ref())
    }
}

impl FeasibilityServiceTrait for FeasibilityService {
    fn metrics(&self, inputs: &FinancialInputs) -> Option<MetricsBundle> {
        calculate_metrics(inputs, &self.config)
    }

    fn simulate(&self, inputs: &FinancialInputs, scenario: &ScenarioDelta) -> ScenarioComparison {
        let baseline = calculate_metrics(inputs, &self.config);
        let adjusted = if scenario.is_baseline() {
            baseline
        } else {
            calculate_scenario_metrics(inputs, scenario, &self.config)
        };
        compare_scenarios(baseline, adjusted)
    }

    fn assess(
        &self,
        inputs: &FinancialInputs,
        scenario: &ScenarioDelta,
        industry_key: &str,
    ) -> FeasibilityAssessment {
        let comparison = self.simulate(inputs, scenario);
        let verdict = self.classify_metrics(comparison.scenario.as_ref(), industry_key);
        debug!(
            "Assessed '{}' industry: {} (score {})",
            industry_key, verdict.status, verdict.score
        );
        FeasibilityAssessment {
            industry_key: industry_key.to_string(),
            comparison,
            verdict,
        }
    }

    fn industries(&self) -> Vec<IndustryTemplate> {
        self.benchmarks.industries().into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::IndustryBenchmark;
    use crate::config::IrrConfig;
    use crate::costs::CostItem;
    use crate::errors::Error;
    use crate::feasibility::FeasibilityStatus;
    use crate::scenario::ImpactMetric;

    fn profitable_inputs() -> FinancialInputs {
        FinancialInputs {
            initial_capital: 10_000_000.0,
            unit_price: 50_000.0,
            monthly_volume: 300.0,
            fixed_costs: vec![CostItem::new("Sewa", 3_000_000.0)],
            variable_costs: vec![CostItem::new("Bahan baku", 20_000.0)],
        }
    }

    #[test]
    fn test_assess_profitable_food_business() {
        let service = FeasibilityService::with_builtin_benchmarks();
        let assessment = service.assess(&profitable_inputs(), &ScenarioDelta::baseline(), "food");

        // revenue 15M, gross 9M, net 6M; ROI 720%, payback ~0.14y, margin 40%
        let metrics = assessment.metrics().unwrap();
        assert!((metrics.net_margin - 40.0).abs() < 1e-9);
        assert_eq!(assessment.verdict.status, FeasibilityStatus::Feasible);
        assert_eq!(assessment.verdict.score, 4);
        assert_eq!(assessment.baseline(), assessment.metrics());
        assert_eq!(assessment.industry_key, "food");
    }

    #[test]
    fn test_assess_unknown_industry_is_insufficient() {
        let service = FeasibilityService::with_builtin_benchmarks();
        let assessment = service.assess(&profitable_inputs(), &ScenarioDelta::baseline(), "mining");
        assert_eq!(assessment.verdict.status, FeasibilityStatus::InsufficientData);
        assert!(assessment.metrics().is_some());
    }

    #[test]
    fn test_assess_incomplete_inputs() {
        let service = FeasibilityService::with_builtin_benchmarks();
        let inputs = FinancialInputs {
            monthly_volume: 0.0,
            ..profitable_inputs()
        };
        let assessment = service.assess(&inputs, &ScenarioDelta::baseline(), "food");
        assert_eq!(assessment.verdict, Verdict::insufficient_data());
        assert!(assessment.metrics().is_none());
        assert!(assessment.comparison.impacts.is_empty());
    }

    #[test]
    fn test_verdict_uses_scenario_metrics() {
        let service = FeasibilityService::with_builtin_benchmarks();
        // Doubling fixed costs to 6M leaves net profit at 3M: margin 20%, still passing.
        // Halving volume on top drops revenue to 7.5M and net to -1.5M.
        let scenario = ScenarioDelta::new(0.0, -50.0, 100.0);
        let assessment = service.assess(&profitable_inputs(), &scenario, "food");

        let scenario_metrics = assessment.metrics().unwrap();
        assert!((scenario_metrics.monthly_net_profit + 1_500_000.0).abs() < 1e-6);
        assert_eq!(assessment.verdict.status, FeasibilityStatus::InsufficientData);

        let net = assessment.comparison.impact(ImpactMetric::MonthlyNetProfit).unwrap();
        assert!((net.change + 7_500_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_custom_provider_and_config() {
        let template = IndustryTemplate {
            key: "strict".to_string(),
            name: "Strict".to_string(),
            benchmark: IndustryBenchmark::new(1_000.0, 1_000.0, 0.01, 90.0),
            suggested_fixed_costs: Vec::new(),
            suggested_variable_costs: Vec::new(),
        };
        let provider = StaticBenchmarkProvider::new(vec![template]).unwrap();
        let service = FeasibilityService::with_config(
            Arc::new(provider),
            EngineConfig {
                projection_years: 3,
                ..EngineConfig::default()
            },
        )
        .unwrap();

        assert_eq!(service.config().projection_years, 3);
        assert_eq!(service.industries().len(), 1);
        let assessment = service.assess(&profitable_inputs(), &ScenarioDelta::baseline(), "strict");
        assert_eq!(assessment.verdict.status, FeasibilityStatus::HighRisk);
        assert_eq!(assessment.verdict.remediation.len(), 4);
    }

    #[test]
    fn test_with_config_rejects_invalid_settings() {
        let config = EngineConfig {
            irr: IrrConfig {
                max_iterations: 0,
                ..IrrConfig::default()
            },
            ..EngineConfig::default()
        };
        let result = FeasibilityService::with_config(
            Arc::new(StaticBenchmarkProvider::builtin()),
            config,
        );
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));

        let config = EngineConfig {
            projection_years: usize::MAX,
            ..EngineConfig::default()
        };
        let result = FeasibilityService::with_config(
            Arc::new(StaticBenchmarkProvider::builtin()),
            config,
        );
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }
}
