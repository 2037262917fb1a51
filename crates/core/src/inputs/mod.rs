//! Form input parsing.
//!
//! The form layer hands over loosely typed values: JSON numbers, or strings
//! typed the Indonesian way (`"Rp 5.000.000"`, `"12,5"`). Everything is
//! coerced into [`FinancialInputs`](crate::metrics::FinancialInputs) here, once,
//! so the calculators only ever see `f64`.

mod inputs_model;
mod inputs_parser;

pub use inputs_model::*;
pub use inputs_parser::*;
