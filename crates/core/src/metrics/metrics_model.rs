use serde::{Deserialize, Serialize};

use crate::costs::CostItem;

/// Numeric financial inputs of a feasibility study.
///
/// Produced by `parse_financial_inputs` from raw form values; the engine only
/// reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInputs {
    /// Up-front investment
    pub initial_capital: f64,
    /// Selling price per unit
    pub unit_price: f64,
    /// Units sold per month
    pub monthly_volume: f64,
    /// Costs per month
    #[serde(default)]
    pub fixed_costs: Vec<CostItem>,
    /// Costs per unit sold
    #[serde(default)]
    pub variable_costs: Vec<CostItem>,
}

impl FinancialInputs {
    /// True once capital, price and volume are all positive, which is what the
    /// wizard requires before a report can be generated.
    pub fn is_complete(&self) -> bool {
        self.initial_capital > 0.0 && self.unit_price > 0.0 && self.monthly_volume > 0.0
    }
}

/// Monthly revenue and profit figures.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnitEconomics {
    pub monthly_revenue: f64,
    pub monthly_variable_costs: f64,
    pub monthly_gross_profit: f64,
    pub monthly_net_profit: f64,
}

/// Everything the engine derives from one set of inputs.
///
/// `payback_period` and `bep_units` may be `+Infinity` (never reached);
/// `irr`, `gross_margin` and `net_margin` may be `NaN` (undeterminable).
/// Non-finite values serialize as JSON `null`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBundle {
    /// Annual return on investment, percent
    pub roi: f64,
    /// Years to recover the initial capital
    pub payback_period: f64,
    /// Internal rate of return, percent
    pub irr: f64,
    /// Units per month needed to break even
    pub bep_units: f64,
    pub gross_margin: f64,
    pub net_margin: f64,
    pub total_fixed_costs: f64,
    pub total_variable_cost_per_unit: f64,
    pub monthly_revenue: f64,
    pub monthly_gross_profit: f64,
    pub monthly_net_profit: f64,
}

impl MetricsBundle {
    /// Whether the IRR solver converged.
    pub fn has_irr(&self) -> bool {
        !self.irr.is_nan()
    }

    /// Compares two bundles field by field within an absolute tolerance.
    ///
    /// Matching infinities and NaNs count as equal.
    pub fn approx_eq(&self, other: &MetricsBundle, tolerance: f64) -> bool {
        let pairs = [
            (self.roi, other.roi),
            (self.payback_period, other.payback_period),
            (self.irr, other.irr),
            (self.bep_units, other.bep_units),
            (self.gross_margin, other.gross_margin),
            (self.net_margin, other.net_margin),
            (self.total_fixed_costs, other.total_fixed_costs),
            (self.total_variable_cost_per_unit, other.total_variable_cost_per_unit),
            (self.monthly_revenue, other.monthly_revenue),
            (self.monthly_gross_profit, other.monthly_gross_profit),
            (self.monthly_net_profit, other.monthly_net_profit),
        ];
        pairs.iter().all(|(a, b)| {
            if a.is_nan() || b.is_nan() {
                a.is_nan() && b.is_nan()
            } else if a.is_infinite() || b.is_infinite() {
                a == b
            } else {
                (a - b).abs() <= tolerance
            }
        })
    }
}
