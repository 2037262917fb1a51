//! Industry benchmarks and templates.
//!
//! Benchmarks are static configuration keyed by industry. The built-in set
//! covers the wizard's industry picker; deployments can load their own list
//! from JSON. A missing key means "no benchmark" and routes the classifier to
//! `INSUFFICIENT_DATA`.

mod benchmarks_model;
mod benchmarks_provider;

pub use benchmarks_model::*;
pub use benchmarks_provider::*;
