use log::debug;
use serde_json::Value;
use uuid::Uuid;

use super::inputs_model::{RawCostItem, RawFinancialInputs, RawScenarioDelta};
use crate::costs::CostItem;
use crate::errors::ValidationError;
use crate::metrics::FinancialInputs;
use crate::scenario::ScenarioDelta;

type ParseResult<T> = std::result::Result<T, ValidationError>;

/// Parses a number written the Indonesian way.
///
/// An optional `Rp` prefix and all whitespace are dropped. With a comma
/// present, `.` groups thousands and `,` is the decimal separator
/// (`"1.234,5"`). Without one, several dots or a single dot followed by
/// exactly three digits are thousands separators (`"5.000.000"`, `"1.500"`);
/// any other single dot is a decimal point (`"12.5"`).
///
/// Returns `Ok(None)` for blank text.
pub fn parse_id_number(text: &str) -> ParseResult<Option<f64>> {
    let trimmed = text.trim();
    let unprefixed = ["Rp", "RP", "rp"]
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed);
    let compact: String = unprefixed.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Ok(None);
    }

    let normalized = if compact.contains(',') {
        compact.replace('.', "").replace(',', ".")
    } else {
        match compact.matches('.').count() {
            0 => compact,
            1 => match compact.split_once('.') {
                Some((_, frac)) if frac.len() == 3 && frac.chars().all(|c| c.is_ascii_digit()) => {
                    compact.replace('.', "")
                }
                _ => compact,
            },
            _ => compact.replace('.', ""),
        }
    };

    Ok(Some(normalized.parse::<f64>()?))
}

/// Reads a loosely typed form value as a number.
///
/// `null`, a missing value and blank text give `Ok(None)`.
pub fn parse_number_value(field: &str, value: Option<&Value>) -> ParseResult<Option<f64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| ValidationError::invalid_field(field, "number out of range")),
        Some(Value::String(s)) => {
            parse_id_number(s).map_err(|e| ValidationError::invalid_field(field, e))
        }
        Some(other) => Err(ValidationError::invalid_field(
            field,
            format!("expected a number, got {}", other),
        )),
    }
}

fn required_amount(field: &str, value: Option<&Value>) -> ParseResult<f64> {
    let amount = parse_number_value(field, value)?
        .ok_or_else(|| ValidationError::MissingField(field.to_string()))?;
    if !amount.is_finite() {
        return Err(ValidationError::invalid_field(field, "must be a finite number"));
    }
    if amount < 0.0 {
        return Err(ValidationError::invalid_field(field, "must not be negative"));
    }
    Ok(amount)
}

fn cost_amount(field: &str, value: Option<&Value>) -> ParseResult<f64> {
    let amount = match parse_number_value(field, value) {
        Ok(Some(amount)) if amount.is_finite() => amount,
        Ok(_) => 0.0,
        Err(e) => {
            debug!("Treating unparseable cost amount as zero ({})", e);
            0.0
        }
    };
    if amount < 0.0 {
        return Err(ValidationError::invalid_field(field, "must not be negative"));
    }
    Ok(amount)
}

/// Coerces raw cost rows into [`CostItem`]s.
///
/// `collection` names the list in error messages (`fixedCosts[2].amount`).
pub fn parse_cost_items(collection: &str, rows: &[RawCostItem]) -> ParseResult<Vec<CostItem>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let field = format!("{}[{}].amount", collection, index);
            let amount = cost_amount(&field, row.amount.as_ref())?;
            let id = row
                .id
                .clone()
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            Ok(CostItem::with_id(id, row.name.clone().unwrap_or_default(), amount))
        })
        .collect()
}

/// Validates and coerces the raw form values.
///
/// Capital, price and volume are required and must be non-negative. Zero is
/// accepted here; the metrics engine reports it as "not computable".
pub fn parse_financial_inputs(raw: &RawFinancialInputs) -> ParseResult<FinancialInputs> {
    Ok(FinancialInputs {
        initial_capital: required_amount("initialCapital", raw.initial_capital.as_ref())?,
        unit_price: required_amount("unitPrice", raw.unit_price.as_ref())?,
        monthly_volume: required_amount("monthlyVolume", raw.monthly_volume.as_ref())?,
        fixed_costs: parse_cost_items("fixedCosts", &raw.fixed_costs)?,
        variable_costs: parse_cost_items("variableCosts", &raw.variable_costs)?,
    })
}

fn delta(field: &str, value: Option<&Value>) -> ParseResult<f64> {
    match parse_number_value(field, value)? {
        Some(pct) if !pct.is_finite() => Err(ValidationError::invalid_field(
            field,
            "must be a finite number",
        )),
        Some(pct) => Ok(pct),
        None => Ok(0.0),
    }
}

/// Parses scenario slider positions; missing deltas are zero.
pub fn parse_scenario(raw: &RawScenarioDelta) -> ParseResult<ScenarioDelta> {
    Ok(ScenarioDelta::new(
        delta("materialCostPct", raw.material_cost_pct.as_ref())?,
        delta("volumePct", raw.volume_pct.as_ref())?,
        delta("fixedCostPct", raw.fixed_cost_pct.as_ref())?,
    ))
}
