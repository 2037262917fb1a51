use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unvalidated cost row as received from the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCostItem {
    /// Row id (generated when absent)
    pub id: Option<String>,
    pub name: Option<String>,
    /// Number or Indonesian-formatted string
    pub amount: Option<Value>,
}

/// Unvalidated business parameters as received from the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFinancialInputs {
    pub initial_capital: Option<Value>,
    pub unit_price: Option<Value>,
    pub monthly_volume: Option<Value>,
    pub fixed_costs: Vec<RawCostItem>,
    pub variable_costs: Vec<RawCostItem>,
}

/// Unvalidated scenario slider positions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawScenarioDelta {
    pub material_cost_pct: Option<Value>,
    pub volume_pct: Option<Value>,
    pub fixed_cost_pct: Option<Value>,
}
