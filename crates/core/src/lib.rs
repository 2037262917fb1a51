//! Business Feasibility Core - financial metrics engine and feasibility verdicts.
//!
//! Computes unit economics, return metrics (ROI, payback, IRR, break-even,
//! margins) and a benchmark-based feasibility verdict from the parameters of
//! a small-business plan. Everything here is pure computation; narrative
//! analysis providers plug in through the `analysis` traits and are
//! implemented in sibling crates.

pub mod analysis;
pub mod benchmarks;
pub mod config;
pub mod constants;
pub mod costs;
pub mod errors;
pub mod feasibility;
pub mod format;
pub mod inputs;
pub mod metrics;
pub mod report;
pub mod scenario;

// Re-export the types most callers touch
pub use benchmarks::{BenchmarkProvider, IndustryBenchmark, StaticBenchmarkProvider};
pub use config::EngineConfig;
pub use feasibility::{FeasibilityService, FeasibilityServiceTrait, FeasibilityStatus, Verdict};
pub use metrics::{FinancialInputs, MetricsBundle};
pub use scenario::ScenarioDelta;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
