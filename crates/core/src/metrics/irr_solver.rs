//! Internal rate of return via Newton-Raphson.
//!
//! Finds the discount rate `r` at which
//!
//! ```text
//! NPV(r) = Σ CF_t / (1 + r)^t = 0
//! ```
//!
//! using `r ← r - NPV(r) / NPV'(r)` with `NPV'(r) = Σ -t·CF_t / (1 + r)^(t+1)`.
//! Converges quickly for the usual shape of one outlay followed by positive
//! flows; other shapes may not converge, which is reported as `NaN`.

use log::debug;

use crate::config::IrrConfig;

/// Net present value of `cash_flows` at `rate` (a fraction, 0.1 = 10%).
///
/// Index 0 is undiscounted.
pub fn npv(rate: f64, cash_flows: &[f64]) -> f64 {
    let base = 1.0 + rate;
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / base.powi(t as i32))
        .sum()
}

/// First derivative of [`npv`] with respect to the rate.
pub fn npv_derivative(rate: f64, cash_flows: &[f64]) -> f64 {
    let base = 1.0 + rate;
    cash_flows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(t, cf)| -(t as f64) * cf / base.powi(t as i32 + 1))
        .sum()
}

/// Builds the flat annuity projection used for IRR: the initial outlay as a
/// negative flow followed by `years` identical annual cash flows.
pub fn project_cash_flows(initial_capital: f64, annual_cash_flow: f64, years: usize) -> Vec<f64> {
    let mut flows = Vec::with_capacity(years + 1);
    flows.push(-initial_capital);
    flows.extend(std::iter::repeat(annual_cash_flow).take(years));
    flows
}

/// Solves for the IRR of `cash_flows`, returned in percent.
///
/// Stops as soon as `|NPV| < tolerance`. Returns `NaN` when the iteration
/// cap is reached, the derivative vanishes, or the estimate leaves the
/// finite range.
///
/// The tolerance is absolute. Once flows reach the tens of billions the
/// rounding error of `NPV` exceeds the default `1e-6`, so large plans need a
/// looser `IrrConfig::tolerance` to converge.
pub fn calculate_irr(cash_flows: &[f64], config: &IrrConfig) -> f64 {
    let mut rate = config.initial_guess;

    for iteration in 0..config.max_iterations {
        let value = npv(rate, cash_flows);
        if value.abs() < config.tolerance {
            return rate * 100.0;
        }

        let derivative = npv_derivative(rate, cash_flows);
        if derivative == 0.0 {
            debug!(
                "IRR aborted at iteration {}: NPV derivative is zero at rate {}",
                iteration, rate
            );
            return f64::NAN;
        }

        rate -= value / derivative;
        if !rate.is_finite() {
            debug!("IRR diverged at iteration {}", iteration);
            return f64::NAN;
        }
    }

    debug!(
        "IRR did not converge within {} iterations (last estimate {})",
        config.max_iterations, rate
    );
    f64::NAN
}
