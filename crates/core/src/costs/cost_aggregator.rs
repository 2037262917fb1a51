//! Cost aggregation.
//!
//! Reduces the itemized fixed and variable cost lists into the two totals the
//! unit economics need, scaling each by its scenario multiplier. Resulting
//! totals are passed through as-is, including negative values produced by
//! multipliers below zero.

use super::costs_model::{CostItem, CostTotals};
use crate::scenario::ScenarioDelta;

/// Sums the effective amounts of a cost list.
pub fn sum_costs(items: &[CostItem]) -> f64 {
    items.iter().map(CostItem::effective_amount).sum()
}

/// Aggregates fixed and variable costs under a scenario.
///
/// * `total_fixed_costs` = Σ fixed × (1 + fixed_cost_pct / 100)
/// * `total_variable_cost_per_unit` = Σ variable × (1 + material_cost_pct / 100)
pub fn aggregate_costs(
    fixed_costs: &[CostItem],
    variable_costs: &[CostItem],
    scenario: &ScenarioDelta,
) -> CostTotals {
    CostTotals {
        total_fixed_costs: sum_costs(fixed_costs) * scenario.fixed_cost_multiplier(),
        total_variable_cost_per_unit: sum_costs(variable_costs)
            * scenario.material_cost_multiplier(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs(amounts: &[f64]) -> Vec<CostItem> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, a)| CostItem::with_id(i.to_string(), format!("Cost {}", i), *a))
            .collect()
    }

    #[test]
    fn test_baseline_totals_are_plain_sums() {
        let totals = aggregate_costs(
            &costs(&[2_000_000.0, 1_000_000.0]),
            &costs(&[5_000.0, 3_000.0]),
            &ScenarioDelta::baseline(),
        );
        assert_eq!(totals.total_fixed_costs, 3_000_000.0);
        assert_eq!(totals.total_variable_cost_per_unit, 8_000.0);
    }

    #[test]
    fn test_multipliers_apply_to_their_own_collection() {
        let scenario = ScenarioDelta::new(50.0, 0.0, -10.0);
        let totals = aggregate_costs(&costs(&[1_000.0]), &costs(&[100.0]), &scenario);
        assert!((totals.total_fixed_costs - 900.0).abs() < 1e-9);
        assert!((totals.total_variable_cost_per_unit - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_amounts_count_as_zero() {
        let totals = aggregate_costs(
            &costs(&[f64::NAN, 500.0]),
            &costs(&[f64::INFINITY, 20.0]),
            &ScenarioDelta::baseline(),
        );
        assert_eq!(totals.total_fixed_costs, 500.0);
        assert_eq!(totals.total_variable_cost_per_unit, 20.0);
    }

    #[test]
    fn test_empty_lists_total_zero() {
        let totals = aggregate_costs(&[], &[], &ScenarioDelta::new(20.0, 20.0, 20.0));
        assert_eq!(totals, CostTotals::default());
    }

    #[test]
    fn test_minus_hundred_percent_zeroes_and_below_inverts() {
        let zeroed = aggregate_costs(
            &costs(&[1_000.0]),
            &costs(&[10.0]),
            &ScenarioDelta::new(-100.0, 0.0, -100.0),
        );
        assert_eq!(zeroed.total_fixed_costs, 0.0);
        assert_eq!(zeroed.total_variable_cost_per_unit, 0.0);

        let inverted = aggregate_costs(&costs(&[1_000.0]), &[], &ScenarioDelta::new(0.0, 0.0, -150.0));
        assert!((inverted.total_fixed_costs + 500.0).abs() < 1e-9);
    }
}
