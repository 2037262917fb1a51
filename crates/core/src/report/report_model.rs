use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::feasibility::Verdict;

/// A single cell value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ReportCell {
    Text(String),
    Amount(f64),
}

impl From<&str> for ReportCell {
    fn from(value: &str) -> Self {
        ReportCell::Text(value.to_string())
    }
}

impl From<String> for ReportCell {
    fn from(value: String) -> Self {
        ReportCell::Text(value)
    }
}

impl From<f64> for ReportCell {
    fn from(value: f64) -> Self {
        ReportCell::Amount(value)
    }
}

/// A row of a report sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReportRow {
    Heading { title: String },
    Entry { label: String, value: ReportCell },
    /// Header row of a table; the rows that follow are `Record`s
    Columns { names: Vec<String> },
    Record { cells: Vec<ReportCell> },
    Blank,
}

impl ReportRow {
    pub fn heading(title: impl Into<String>) -> Self {
        ReportRow::Heading {
            title: title.into(),
        }
    }

    pub fn entry(label: impl Into<String>, value: impl Into<ReportCell>) -> Self {
        ReportRow::Entry {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSheet {
    pub name: String,
    pub rows: Vec<ReportRow>,
}

impl ReportSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Value of the first entry labelled `label`.
    pub fn entry(&self, label: &str) -> Option<&ReportCell> {
        self.rows.iter().find_map(|row| match row {
            ReportRow::Entry { label: l, value } if l == label => Some(value),
            _ => None,
        })
    }
}

/// Complete feasibility report for one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityReport {
    pub generated_at: DateTime<Utc>,
    pub project_name: String,
    pub sheets: Vec<ReportSheet>,
    pub verdict: Verdict,
}

impl FeasibilityReport {
    pub fn sheet(&self, name: &str) -> Option<&ReportSheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// File name an export layer should offer, e.g.
    /// `Laporan Kelayakan - Kopi Senja.xlsx`.
    pub fn suggested_file_name(&self, extension: &str) -> String {
        let name = if self.project_name.trim().is_empty() {
            "Proyek"
        } else {
            self.project_name.trim()
        };
        format!("Laporan Kelayakan - {}.{}", name, extension)
    }
}
