use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single operating cost line entered by the user.
///
/// Fixed costs carry a monthly amount; variable costs carry a per-unit amount.
/// Which one applies depends on the collection the item lives in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    pub id: String,
    pub name: String,
    pub amount: f64,
}

impl CostItem {
    /// Creates a cost item with a freshly generated id.
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            amount,
        }
    }

    /// Creates a cost item with a caller-supplied id.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
        }
    }

    /// Amount as used by aggregation: non-finite values count as zero.
    pub fn effective_amount(&self) -> f64 {
        if self.amount.is_finite() {
            self.amount
        } else {
            0.0
        }
    }
}

/// Totals produced by the cost aggregator, after scenario multipliers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostTotals {
    /// Sum of fixed costs per month
    pub total_fixed_costs: f64,
    /// Sum of variable costs per unit sold
    pub total_variable_cost_per_unit: f64,
}
