//! Feasibility classification.
//!
//! Scores a metrics bundle against the benchmark of the selected industry and
//! turns the score into a verdict:
//!
//! | Passing checks | Status                  |
//! |----------------|-------------------------|
//! | 4              | `FEASIBLE`              |
//! | 3              | `FEASIBLE_WITH_CAVEATS` |
//! | 2              | `MODERATE_RISK`         |
//! | 0-1            | `HIGH_RISK`             |
//!
//! Without a converged IRR, a computable bundle or a benchmark, the verdict is
//! `INSUFFICIENT_DATA`. Classification is re-evaluated from scratch on every
//! call; no history is kept.

mod feasibility_classifier;
mod feasibility_model;
mod feasibility_service;

pub use feasibility_classifier::*;
pub use feasibility_model::*;
pub use feasibility_service::*;
