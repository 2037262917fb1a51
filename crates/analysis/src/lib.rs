//! Business Feasibility Analysis - narrative analysis providers.
//!
//! Implements `bizfeasibility_core::analysis::AnalysisProvider`.
//!
//! # Providers
//!
//! - `rule_based`: deterministic report from fixed metric thresholds

pub mod rule_based;

pub use rule_based::{RuleBasedAnalysisProvider, RuleThresholds};
