use super::metrics_model::UnitEconomics;
use crate::costs::CostTotals;

/// Derives monthly revenue and profit from price, volume and cost totals.
///
/// Returns `None` when the unit price or the (scenario-adjusted) volume is
/// zero: there is nothing to sell, so every ratio built on top would be
/// meaningless. Callers treat that as "not yet computable", not as zero
/// profit.
pub fn calculate_unit_economics(
    unit_price: f64,
    monthly_volume: f64,
    costs: &CostTotals,
) -> Option<UnitEconomics> {
    if unit_price == 0.0 || monthly_volume == 0.0 {
        return None;
    }

    let monthly_revenue = unit_price * monthly_volume;
    let monthly_variable_costs = costs.total_variable_cost_per_unit * monthly_volume;
    let monthly_gross_profit = monthly_revenue - monthly_variable_costs;
    let monthly_net_profit = monthly_gross_profit - costs.total_fixed_costs;

    Some(UnitEconomics {
        monthly_revenue,
        monthly_variable_costs,
        monthly_gross_profit,
        monthly_net_profit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(fixed: f64, variable: f64) -> CostTotals {
        CostTotals {
            total_fixed_costs: fixed,
            total_variable_cost_per_unit: variable,
        }
    }

    #[test]
    fn test_profit_chain() {
        let economics = calculate_unit_economics(20_000.0, 250.0, &totals(3_000_000.0, 8_000.0))
            .expect("economics should be defined");
        assert_eq!(economics.monthly_revenue, 5_000_000.0);
        assert_eq!(economics.monthly_variable_costs, 2_000_000.0);
        assert_eq!(economics.monthly_gross_profit, 3_000_000.0);
        assert_eq!(economics.monthly_net_profit, 0.0);
    }

    #[test]
    fn test_zero_price_or_volume_is_undefined() {
        assert!(calculate_unit_economics(0.0, 100.0, &totals(1.0, 1.0)).is_none());
        assert!(calculate_unit_economics(100.0, 0.0, &totals(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_negative_volume_passes_through() {
        let economics = calculate_unit_economics(10.0, -5.0, &totals(0.0, 2.0)).unwrap();
        assert_eq!(economics.monthly_revenue, -50.0);
        assert_eq!(economics.monthly_gross_profit, -40.0);
    }
}
