//! Itemized operating costs and their aggregation.

mod cost_aggregator;
mod costs_model;

pub use cost_aggregator::*;
pub use costs_model::*;
