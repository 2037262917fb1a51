//! "What-if" scenario layer.
//!
//! Applies percentage perturbations to material cost, sales volume and fixed
//! costs before metrics are computed, and compares scenario metrics against
//! the unperturbed baseline.

mod scenario_layer;
mod scenario_model;

pub use scenario_layer::*;
pub use scenario_model::*;
