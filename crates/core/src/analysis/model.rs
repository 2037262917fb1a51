//! Analysis domain models.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_INDUSTRY_KEY;
use crate::metrics::{FinancialInputs, MetricsBundle};

// =============================================================================
// Business profile
// =============================================================================

/// A competitor named by the user during market research.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Competitor {
    pub name: String,
    /// What the competitor does better
    pub advantage: String,
    /// Competitor's unit price, when known
    pub price: Option<f64>,
}

/// Qualitative description of the business idea.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessProfile {
    pub name: String,
    /// Benchmark key (`food`, `tech`, ...)
    pub industry_key: String,
    /// Industry display name
    pub category: String,
    pub description: String,
    pub target_market: String,
    pub competitors: Vec<Competitor>,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            industry_key: DEFAULT_INDUSTRY_KEY.to_string(),
            category: String::new(),
            description: String::new(),
            target_market: String::new(),
            competitors: Vec::new(),
        }
    }
}

impl BusinessProfile {
    pub fn new(name: impl Into<String>, industry_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            industry_key: industry_key.into(),
            ..Self::default()
        }
    }

    pub fn has_target_market(&self) -> bool {
        !self.target_market.trim().is_empty()
    }
}

// =============================================================================
// Request / report
// =============================================================================

/// Everything a provider needs to analyse a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub profile: BusinessProfile,
    pub inputs: FinancialInputs,
    pub metrics: MetricsBundle,
}

impl AnalysisRequest {
    pub fn new(profile: BusinessProfile, inputs: FinancialInputs, metrics: MetricsBundle) -> Self {
        Self {
            profile,
            inputs,
            metrics,
        }
    }
}

/// Written assessment, split into the sections shown on the report page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Provider that produced the report
    pub provider_id: String,
    /// Two or three sentence verdict
    pub conclusion: String,
    pub metric_analysis: Vec<String>,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub recommendations: Vec<String>,
    /// Milestones for the first year
    pub roadmap: Vec<String>,
}

impl AnalysisReport {
    /// Renders the report as bulleted plain text with section headings.
    pub fn to_text(&self) -> String {
        let sections: [(&str, &[String]); 5] = [
            ("ANALISIS METRIK KEUANGAN", &self.metric_analysis),
            ("KEKUATAN BISNIS SPESIFIK", &self.strengths),
            ("TANTANGAN & RISIKO", &self.challenges),
            ("REKOMENDASI STRATEGIS", &self.recommendations),
            ("ROADMAP PENGEMBANGAN", &self.roadmap),
        ];

        let mut out = self.conclusion.clone();
        for (heading, lines) in sections {
            if lines.is_empty() {
                continue;
            }
            out.push_str("\n\n**");
            out.push_str(heading);
            out.push_str("**");
            for line in lines {
                out.push_str("\n• ");
                out.push_str(line);
            }
        }
        out
    }
}
