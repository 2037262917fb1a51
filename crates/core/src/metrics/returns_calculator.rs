//! Return metrics: ROI, payback period, break-even units and margins.
//!
//! Each function is total over its inputs. Division-by-zero conditions map to
//! a fixed sentinel instead of an error:
//!
//! | Condition                  | Result      |
//! |----------------------------|-------------|
//! | zero initial capital (ROI) | `0`         |
//! | annual cash flow ≤ 0       | `+Infinity` |
//! | contribution margin ≤ 0    | `+Infinity` |
//! | zero revenue (margins)     | `NaN`       |

/// Annual return on investment, in percent.
///
/// With no capital invested there is no return to speak of, so the result is 0.
pub fn calculate_roi(annual_net_profit: f64, initial_capital: f64) -> f64 {
    if initial_capital == 0.0 {
        return 0.0;
    }
    annual_net_profit / initial_capital * 100.0
}

/// Years needed for the annual cash flow to recover the initial capital.
///
/// Returns `+Infinity` when the business never generates positive cash flow.
pub fn calculate_payback_period(initial_capital: f64, annual_cash_flow: f64) -> f64 {
    if annual_cash_flow <= 0.0 {
        return f64::INFINITY;
    }
    initial_capital / annual_cash_flow
}

/// Units per period needed to cover the fixed costs of that period.
///
/// Returns `+Infinity` when each unit sold does not contribute anything
/// towards the fixed costs.
pub fn calculate_bep_units(
    total_fixed_costs: f64,
    unit_price: f64,
    variable_cost_per_unit: f64,
) -> f64 {
    let contribution_margin = unit_price - variable_cost_per_unit;
    if contribution_margin <= 0.0 {
        return f64::INFINITY;
    }
    total_fixed_costs / contribution_margin
}

/// Profit as a percentage of revenue; `NaN` when there is no revenue.
pub fn calculate_margin(profit: f64, revenue: f64) -> f64 {
    if revenue == 0.0 {
        return f64::NAN;
    }
    profit / revenue * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roi() {
        assert_eq!(calculate_roi(1_000_000.0, 5_000_000.0), 20.0);
        assert_eq!(calculate_roi(-12_000_000.0, 5_000_000.0), -240.0);
    }

    #[test]
    fn test_roi_zero_capital_is_zero() {
        assert_eq!(calculate_roi(1_000_000.0, 0.0), 0.0);
        assert_eq!(calculate_roi(-1_000_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_payback_period() {
        assert_eq!(calculate_payback_period(10_000_000.0, 4_000_000.0), 2.5);
        assert_eq!(calculate_payback_period(0.0, 4_000_000.0), 0.0);
    }

    #[test]
    fn test_payback_never_reached() {
        assert_eq!(calculate_payback_period(10_000_000.0, 0.0), f64::INFINITY);
        assert_eq!(calculate_payback_period(10_000_000.0, -1.0), f64::INFINITY);
    }

    #[test]
    fn test_bep_units() {
        assert_eq!(calculate_bep_units(3_000_000.0, 20_000.0, 8_000.0), 250.0);
        assert_eq!(calculate_bep_units(0.0, 20_000.0, 8_000.0), 0.0);
    }

    #[test]
    fn test_bep_unreachable() {
        assert_eq!(calculate_bep_units(3_000_000.0, 8_000.0, 8_000.0), f64::INFINITY);
        assert_eq!(calculate_bep_units(3_000_000.0, 5_000.0, 8_000.0), f64::INFINITY);
    }

    #[test]
    fn test_margin() {
        assert_eq!(calculate_margin(2_000_000.0, 5_000_000.0), 40.0);
        assert!(calculate_margin(2_000_000.0, 0.0).is_nan());
    }
}
