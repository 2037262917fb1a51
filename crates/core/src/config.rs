//! Engine configuration.
//!
//! Holds the IRR solver parameters and the cash-flow projection length.
//! Defaults reproduce the documented behavior; callers may load overrides
//! from JSON, where any missing key keeps its default.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_IRR_GUESS, DEFAULT_IRR_MAX_ITERATIONS, DEFAULT_IRR_TOLERANCE,
    DEFAULT_PROJECTION_YEARS, MAX_PROJECTION_YEARS,
};
use crate::errors::{Error, Result};

/// Newton-Raphson parameters for the IRR solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IrrConfig {
    /// Starting rate estimate as a fraction (default: 0.1 = 10%)
    pub initial_guess: f64,

    /// Convergence threshold on |NPV| (default: 1e-6)
    pub tolerance: f64,

    /// Iteration cap before reporting non-convergence (default: 100)
    pub max_iterations: u32,
}

impl Default for IrrConfig {
    fn default() -> Self {
        Self {
            initial_guess: DEFAULT_IRR_GUESS,
            tolerance: DEFAULT_IRR_TOLERANCE,
            max_iterations: DEFAULT_IRR_MAX_ITERATIONS,
        }
    }
}

/// Configuration for a metrics computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// IRR solver parameters
    pub irr: IrrConfig,

    /// Years of flat annual cash flow projected after the initial outlay (default: 5)
    pub projection_years: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            irr: IrrConfig::default(),
            projection_years: DEFAULT_PROJECTION_YEARS,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every parameter is usable by the solver.
    pub fn validate(&self) -> Result<()> {
        if !self.irr.initial_guess.is_finite() || self.irr.initial_guess <= -1.0 {
            return Err(Error::InvalidConfigValue(format!(
                "irr.initialGuess must be a finite rate above -1, got {}",
                self.irr.initial_guess
            )));
        }
        if !self.irr.tolerance.is_finite() || self.irr.tolerance <= 0.0 {
            return Err(Error::InvalidConfigValue(format!(
                "irr.tolerance must be positive, got {}",
                self.irr.tolerance
            )));
        }
        if self.irr.max_iterations == 0 {
            return Err(Error::InvalidConfigValue(
                "irr.maxIterations must be at least 1".to_string(),
            ));
        }
        if self.projection_years == 0 || self.projection_years > MAX_PROJECTION_YEARS {
            return Err(Error::InvalidConfigValue(format!(
                "projectionYears must be between 1 and {}, got {}",
                MAX_PROJECTION_YEARS, self.projection_years
            )));
        }
        Ok(())
    }
}
