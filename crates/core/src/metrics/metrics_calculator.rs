use log::debug;

use super::irr_solver::{calculate_irr, project_cash_flows};
use super::metrics_model::{FinancialInputs, MetricsBundle};
use super::returns_calculator::{
    calculate_bep_units, calculate_margin, calculate_payback_period, calculate_roi,
};
use super::unit_economics::calculate_unit_economics;
use crate::config::EngineConfig;
use crate::constants::MONTHS_PER_YEAR;
use crate::scenario::{apply_scenario, AdjustedInputs, ScenarioDelta};

/// Computes the metrics bundle for the inputs as entered.
///
/// Returns `None` when the economics are undefined (zero price or volume).
pub fn calculate_metrics(inputs: &FinancialInputs, config: &EngineConfig) -> Option<MetricsBundle> {
    calculate_from_adjusted(&AdjustedInputs::unadjusted(inputs), config)
}

/// Computes the metrics bundle after applying a what-if scenario.
pub fn calculate_scenario_metrics(
    inputs: &FinancialInputs,
    scenario: &ScenarioDelta,
    config: &EngineConfig,
) -> Option<MetricsBundle> {
    calculate_from_adjusted(&apply_scenario(inputs, scenario), config)
}

/// Runs unit economics, return metrics and the IRR solver over adjusted inputs.
///
/// Annual cash flow is taken to be twelve months of net profit, and the IRR
/// projection repeats it for `config.projection_years` years.
pub fn calculate_from_adjusted(
    adjusted: &AdjustedInputs,
    config: &EngineConfig,
) -> Option<MetricsBundle> {
    let Some(economics) =
        calculate_unit_economics(adjusted.unit_price, adjusted.monthly_volume, &adjusted.costs)
    else {
        debug!(
            "Economics undefined for price {} and volume {}; metrics not computable",
            adjusted.unit_price, adjusted.monthly_volume
        );
        return None;
    };

    let annual_net_profit = economics.monthly_net_profit * MONTHS_PER_YEAR;
    let annual_cash_flow = annual_net_profit;
    let cash_flows = project_cash_flows(
        adjusted.initial_capital,
        annual_cash_flow,
        config.projection_years,
    );

    Some(MetricsBundle {
        roi: calculate_roi(annual_net_profit, adjusted.initial_capital),
        payback_period: calculate_payback_period(adjusted.initial_capital, annual_cash_flow),
        irr: calculate_irr(&cash_flows, &config.irr),
        bep_units: calculate_bep_units(
            adjusted.costs.total_fixed_costs,
            adjusted.unit_price,
            adjusted.costs.total_variable_cost_per_unit,
        ),
        gross_margin: calculate_margin(economics.monthly_gross_profit, economics.monthly_revenue),
        net_margin: calculate_margin(economics.monthly_net_profit, economics.monthly_revenue),
        total_fixed_costs: adjusted.costs.total_fixed_costs,
        total_variable_cost_per_unit: adjusted.costs.total_variable_cost_per_unit,
        monthly_revenue: economics.monthly_revenue,
        monthly_gross_profit: economics.monthly_gross_profit,
        monthly_net_profit: economics.monthly_net_profit,
    })
}
