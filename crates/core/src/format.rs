//! Display formatting for metric values.
//!
//! Metrics carry IEEE sentinels: `+Infinity` for a payback period or
//! break-even point that is never reached, `NaN` for an undeterminable IRR or
//! margin. Presentation code goes through these helpers so those sentinels are
//! rendered as text instead of `inf` / `NaN`.
//!
//! Currency follows the id-ID convention (`.` thousands separator, `,` decimal
//! separator). Percentages and years use a plain `.` decimal point with a
//! fixed number of digits.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{UNDETERMINABLE_TEXT, UNREACHABLE_TEXT};

/// A metric value sorted by how it should be displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Finite(f64),
    /// `+Infinity`: the target is never reached
    Unreachable,
    /// `NaN` or `-Infinity`: the value cannot be computed
    Undeterminable,
}

impl MetricValue {
    pub fn classify(value: f64) -> Self {
        if value.is_nan() || value == f64::NEG_INFINITY {
            MetricValue::Undeterminable
        } else if value == f64::INFINITY {
            MetricValue::Unreachable
        } else {
            MetricValue::Finite(value)
        }
    }

    /// Formats the finite case with `f`, and the sentinels with their text.
    pub fn display_with(self, f: impl FnOnce(f64) -> String) -> String {
        match self {
            MetricValue::Finite(v) => f(v),
            MetricValue::Unreachable => UNREACHABLE_TEXT.to_string(),
            MetricValue::Undeterminable => UNDETERMINABLE_TEXT.to_string(),
        }
    }
}

/// `12.50%`
pub fn format_percent(value: f64) -> String {
    MetricValue::classify(value).display_with(|v| format!("{:.2}%", v))
}

/// `12.5%`, the shorter form used inside sentences.
pub fn format_percent_short(value: f64) -> String {
    MetricValue::classify(value).display_with(|v| format!("{:.1}%", v))
}

/// `2.5 tahun`
pub fn format_years(value: f64) -> String {
    MetricValue::classify(value).display_with(|v| format!("{:.1} tahun", v))
}

/// `250 unit/bulan`; fractional units round up since a part unit still has
/// to be sold.
pub fn format_units(value: f64) -> String {
    MetricValue::classify(value).display_with(|v| format!("{} unit/bulan", v.ceil()))
}

/// `Rp 5.000.000`, rounded to whole rupiah.
pub fn format_rupiah(value: f64) -> String {
    MetricValue::classify(value).display_with(|v| format!("Rp {}", format_number_id(v, 0)))
}

/// Formats a number with id-ID grouping and at most `decimal_places`
/// fraction digits (`1234567.891` → `1.234.567,89`).
pub fn format_number_id(value: f64, decimal_places: u32) -> String {
    let Some(decimal) = Decimal::from_f64_retain(value) else {
        // Outside Decimal's range; fall back to ungrouped output
        return format!("{:.*}", decimal_places as usize, value);
    };
    let rounded = decimal
        .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push(',');
        grouped.push_str(frac);
    }
    grouped
}

/// Formats a benchmark target the way it was configured (`18`, `2.5`).
pub fn format_target(value: f64) -> String {
    format!("{}", value)
}
