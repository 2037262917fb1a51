//! Financial metrics engine.
//!
//! Pure functions over user-supplied business parameters:
//!
//! ```text
//! FinancialInputs → (scenario) → CostTotals → UnitEconomics
//!                                                  ↓
//!                         returns calculator + IRR solver → MetricsBundle
//! ```
//!
//! Numeric edge cases are reported through sentinel values rather than
//! errors: `+Infinity` for payback and break-even points that are never
//! reached, `NaN` for undefined margins and a non-converging IRR.

mod irr_solver;
mod metrics_calculator;
mod metrics_model;
mod returns_calculator;
mod unit_economics;

pub use irr_solver::*;
pub use metrics_calculator::*;
pub use metrics_model::*;
pub use returns_calculator::*;
pub use unit_economics::*;
