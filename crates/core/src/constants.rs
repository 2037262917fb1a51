/// Months per year, used to annualize monthly profit figures
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Default IRR starting estimate (10%)
pub const DEFAULT_IRR_GUESS: f64 = 0.1;

/// Default IRR convergence threshold on |NPV|
pub const DEFAULT_IRR_TOLERANCE: f64 = 1e-6;

/// Default Newton-Raphson iteration cap
pub const DEFAULT_IRR_MAX_ITERATIONS: u32 = 100;

/// Default number of projected years after the initial outlay
pub const DEFAULT_PROJECTION_YEARS: usize = 5;

/// Longest projection the engine accepts
pub const MAX_PROJECTION_YEARS: usize = 100;

/// Number of benchmark checks the classifier scores
pub const BENCHMARK_CHECK_COUNT: u8 = 4;

/// Industry key used when the form has no selection yet
pub const DEFAULT_INDUSTRY_KEY: &str = "food";

/// Display text for a metric that can never be reached (+Infinity)
pub const UNREACHABLE_TEXT: &str = "tidak tercapai";

/// Display text for a metric that cannot be determined (NaN)
pub const UNDETERMINABLE_TEXT: &str = "belum dapat dihitung";
