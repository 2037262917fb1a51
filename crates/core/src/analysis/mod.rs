//! Narrative analysis boundary.
//!
//! Turns a business profile and its computed metrics into a written
//! assessment. Providers may call out to a language model or work from fixed
//! rules; either way they sit behind [`AnalysisProvider`] so the metrics engine
//! stays free of I/O.
//!
//! - **Models** (`model.rs`) - `BusinessProfile`, `AnalysisRequest`, `AnalysisReport`
//! - **Traits** (`traits.rs`) - `AnalysisProvider`
//! - **Errors** (`errors.rs`) - `AnalysisError`

mod errors;
mod model;
mod traits;

pub use errors::*;
pub use model::*;
pub use traits::*;
