use serde::{Deserialize, Serialize};

use crate::costs::CostItem;

/// Thresholds a business must meet to be considered healthy in its industry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndustryBenchmark {
    /// Minimum annual ROI, percent
    #[serde(rename = "minROI")]
    pub min_roi: f64,
    /// Minimum IRR, percent
    #[serde(rename = "minIRR")]
    pub min_irr: f64,
    /// Maximum payback period, years
    pub max_payback: f64,
    /// Minimum net margin, percent
    pub min_margin: f64,
}

impl IndustryBenchmark {
    pub fn new(min_roi: f64, min_irr: f64, max_payback: f64, min_margin: f64) -> Self {
        Self {
            min_roi,
            min_irr,
            max_payback,
            min_margin,
        }
    }
}

/// An industry option of the wizard: its benchmark plus the cost lines
/// commonly found in such a business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndustryTemplate {
    pub key: String,
    pub name: String,
    pub benchmark: IndustryBenchmark,
    #[serde(default)]
    pub suggested_fixed_costs: Vec<String>,
    #[serde(default)]
    pub suggested_variable_costs: Vec<String>,
}

impl IndustryTemplate {
    /// Zero-amount cost rows for the suggested cost names, as
    /// `(fixed_costs, variable_costs)`.
    pub fn starter_costs(&self) -> (Vec<CostItem>, Vec<CostItem>) {
        let to_items = |names: &[String]| -> Vec<CostItem> {
            names.iter().map(|name| CostItem::new(name.clone(), 0.0)).collect()
        };
        (
            to_items(&self.suggested_fixed_costs),
            to_items(&self.suggested_variable_costs),
        )
    }
}
