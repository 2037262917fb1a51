use log::debug;
use serde::{Deserialize, Serialize};

use super::scenario_model::{
    ImpactDirection, ImpactMetric, MetricImpact, ScenarioComparison, ScenarioDelta,
};
use crate::costs::{aggregate_costs, sum_costs, CostTotals};
use crate::metrics::{FinancialInputs, MetricsBundle};

/// Inputs after scenario adjustment, ready for the metrics calculators.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedInputs {
    pub initial_capital: f64,
    pub unit_price: f64,
    /// Monthly volume after the volume multiplier
    pub monthly_volume: f64,
    pub costs: CostTotals,
}

impl AdjustedInputs {
    /// Takes the inputs at face value, without any scenario multiplier.
    pub fn unadjusted(inputs: &FinancialInputs) -> Self {
        Self {
            initial_capital: inputs.initial_capital,
            unit_price: inputs.unit_price,
            monthly_volume: inputs.monthly_volume,
            costs: CostTotals {
                total_fixed_costs: sum_costs(&inputs.fixed_costs),
                total_variable_cost_per_unit: sum_costs(&inputs.variable_costs),
            },
        }
    }
}

/// Applies a scenario to the base inputs.
///
/// Capital and unit price are never perturbed; volume, variable cost and
/// fixed cost are scaled by their multipliers.
pub fn apply_scenario(inputs: &FinancialInputs, scenario: &ScenarioDelta) -> AdjustedInputs {
    AdjustedInputs {
        initial_capital: inputs.initial_capital,
        unit_price: inputs.unit_price,
        monthly_volume: inputs.monthly_volume * scenario.volume_multiplier(),
        costs: aggregate_costs(&inputs.fixed_costs, &inputs.variable_costs, scenario),
    }
}

/// Computes the impact of a scenario on one metric.
pub fn calculate_impact(metric: ImpactMetric, baseline: f64, scenario: f64) -> MetricImpact {
    if !baseline.is_finite() || !scenario.is_finite() {
        return MetricImpact {
            metric,
            baseline,
            scenario,
            change: f64::NAN,
            change_pct: f64::NAN,
            direction: ImpactDirection::Undetermined,
        };
    }

    let change = scenario - baseline;
    let change_pct = if baseline == 0.0 {
        0.0
    } else {
        change / baseline * 100.0
    };
    let direction = if change > 0.0 {
        ImpactDirection::Up
    } else if change < 0.0 {
        ImpactDirection::Down
    } else {
        ImpactDirection::Flat
    };

    MetricImpact {
        metric,
        baseline,
        scenario,
        change,
        change_pct,
        direction,
    }
}

/// Compares scenario metrics against the baseline.
pub fn compare_scenarios(
    baseline: Option<MetricsBundle>,
    scenario: Option<MetricsBundle>,
) -> ScenarioComparison {
    let impacts = match (&baseline, &scenario) {
        (Some(base), Some(new)) => ImpactMetric::ALL
            .iter()
            .map(|metric| calculate_impact(*metric, metric.value_of(base), metric.value_of(new)))
            .collect(),
        _ => {
            debug!(
                "Skipping scenario impacts: baseline computable={}, scenario computable={}",
                baseline.is_some(),
                scenario.is_some()
            );
            Vec::new()
        }
    };

    ScenarioComparison {
        baseline,
        scenario,
        impacts,
    }
}
