//! Export-ready report.
//!
//! Lays the project out as named sheets of rows so an export layer can write
//! a spreadsheet or PDF without knowing anything about the metrics. Values
//! are pre-formatted where the sheet shows text and left raw where it shows
//! amounts.

mod report_builder;
mod report_model;

pub use report_builder::*;
pub use report_model::*;
