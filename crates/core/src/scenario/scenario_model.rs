use serde::{Deserialize, Serialize};

use crate::metrics::MetricsBundle;

/// Percentage adjustments applied to the base inputs.
///
/// Zero means "no change". Each delta becomes a multiplier of
/// `1 + pct / 100`: -100 zeroes the quantity and anything below -100 flips
/// its sign. Values are not clamped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioDelta {
    /// Change in raw material (variable) cost per unit, in percent
    pub material_cost_pct: f64,
    /// Change in monthly sales volume, in percent
    pub volume_pct: f64,
    /// Change in monthly fixed costs, in percent
    pub fixed_cost_pct: f64,
}

impl ScenarioDelta {
    pub fn new(material_cost_pct: f64, volume_pct: f64, fixed_cost_pct: f64) -> Self {
        Self {
            material_cost_pct,
            volume_pct,
            fixed_cost_pct,
        }
    }

    /// The all-zero scenario used to compute pre-scenario metrics.
    pub fn baseline() -> Self {
        Self::default()
    }

    pub fn is_baseline(&self) -> bool {
        self.material_cost_pct == 0.0 && self.volume_pct == 0.0 && self.fixed_cost_pct == 0.0
    }

    pub fn material_cost_multiplier(&self) -> f64 {
        percent_multiplier(self.material_cost_pct)
    }

    pub fn volume_multiplier(&self) -> f64 {
        percent_multiplier(self.volume_pct)
    }

    pub fn fixed_cost_multiplier(&self) -> f64 {
        percent_multiplier(self.fixed_cost_pct)
    }
}

/// Converts a percentage change into a multiplier.
pub fn percent_multiplier(pct: f64) -> f64 {
    1.0 + pct / 100.0
}

/// Metrics tracked by the scenario impact view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactMetric {
    Roi,
    PaybackPeriod,
    Irr,
    NetMargin,
    MonthlyRevenue,
    MonthlyGrossProfit,
    MonthlyNetProfit,
}

impl ImpactMetric {
    /// Display order of the impact view: return metrics first, then monthly figures.
    pub const ALL: [ImpactMetric; 7] = [
        ImpactMetric::Roi,
        ImpactMetric::PaybackPeriod,
        ImpactMetric::Irr,
        ImpactMetric::NetMargin,
        ImpactMetric::MonthlyRevenue,
        ImpactMetric::MonthlyGrossProfit,
        ImpactMetric::MonthlyNetProfit,
    ];

    /// Reads this metric from a bundle.
    pub fn value_of(&self, metrics: &MetricsBundle) -> f64 {
        match self {
            ImpactMetric::Roi => metrics.roi,
            ImpactMetric::PaybackPeriod => metrics.payback_period,
            ImpactMetric::Irr => metrics.irr,
            ImpactMetric::NetMargin => metrics.net_margin,
            ImpactMetric::MonthlyRevenue => metrics.monthly_revenue,
            ImpactMetric::MonthlyGrossProfit => metrics.monthly_gross_profit,
            ImpactMetric::MonthlyNetProfit => metrics.monthly_net_profit,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImpactMetric::Roi => "ROI",
            ImpactMetric::PaybackPeriod => "Payback Period",
            ImpactMetric::Irr => "IRR",
            ImpactMetric::NetMargin => "Net Margin",
            ImpactMetric::MonthlyRevenue => "Pendapatan Bulanan",
            ImpactMetric::MonthlyGrossProfit => "Laba Kotor Bulanan",
            ImpactMetric::MonthlyNetProfit => "Laba Bersih Bulanan",
        }
    }
}

/// Sign of a scenario change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactDirection {
    Up,
    Down,
    Flat,
    /// One of the two values is +Infinity or NaN
    Undetermined,
}

/// Scenario value of one metric relative to its baseline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricImpact {
    pub metric: ImpactMetric,
    pub baseline: f64,
    pub scenario: f64,
    /// scenario - baseline (NaN when either side is non-finite)
    pub change: f64,
    /// change / baseline * 100, 0 when the baseline is 0
    pub change_pct: f64,
    pub direction: ImpactDirection,
}

/// Baseline and scenario bundles side by side.
///
/// `impacts` is empty unless both bundles are computable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub baseline: Option<MetricsBundle>,
    pub scenario: Option<MetricsBundle>,
    pub impacts: Vec<MetricImpact>,
}

impl ScenarioComparison {
    pub fn impact(&self, metric: ImpactMetric) -> Option<&MetricImpact> {
        self.impacts.iter().find(|i| i.metric == metric)
    }
}
