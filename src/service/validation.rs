//! Request presence checks and value coercion for the customer and order payloads.

use crate::error::AppError;
use crate::models::{CustomerPatch, EmailPatch, NewCustomer, NewOrder};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Fractional digits kept for `orders.total` (NUMERIC(10,2)).
pub const TOTAL_SCALE: u32 = 2;

pub struct RequestValidator;

impl RequestValidator {
    /// `name` is required; a missing, null or blank `email` is stored as NULL.
    pub fn new_customer(body: &Map<String, Value>) -> Result<NewCustomer, AppError> {
        let name = required_text(body, "name")?;
        let email = optional_text(body, "email")?.filter(|s| !s.trim().is_empty());
        Ok(NewCustomer { name, email })
    }

    /// Only supplied fields change, and a supplied `name` is written as given.
    /// A blank `email` clears the stored one.
    pub fn customer_patch(body: &Map<String, Value>) -> Result<CustomerPatch, AppError> {
        let name = optional_text(body, "name")?;
        let email = match optional_text(body, "email")? {
            None => EmailPatch::Keep,
            Some(email) if email.trim().is_empty() => EmailPatch::Clear,
            Some(email) => EmailPatch::Set(email),
        };
        Ok(CustomerPatch { name, email })
    }

    pub fn new_order(body: &Map<String, Value>) -> Result<NewOrder, AppError> {
        let customer_name = required_text(body, "customer_name")?;
        let total = coerce_total(body.get("total"));
        Ok(NewOrder { customer_name, total })
    }
}

pub fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

/// Field must be present and truthy: a non-blank string, a non-zero number or `true`.
pub fn required_text(body: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    match body.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Ok(n.to_string()),
        Some(Value::Bool(true)) => Ok("true".into()),
        Some(Value::Array(_)) | Some(Value::Object(_)) => {
            Err(AppError::Validation(format!("{} must be text", field)))
        }
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Scalars are accepted as text (numbers and booleans are stringified); null counts as absent.
fn optional_text(body: &Map<String, Value>, field: &str) -> Result<Option<String>, AppError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Array(_)) | Some(Value::Object(_)) => {
            Err(AppError::Validation(format!("{} must be text", field)))
        }
    }
}

/// Numeric coercion for order totals. Anything that does not yield a finite
/// number (including values too large for a decimal) becomes zero. The result
/// always carries two fractional digits, so zero is `0.00`.
pub fn coerce_total(value: Option<&Value>) -> Decimal {
    let parsed = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Some(Decimal::ZERO),
        Some(Value::Bool(true)) => Some(Decimal::ONE),
        Some(Value::Number(n)) => parse_decimal(&n.to_string()),
        Some(Value::String(s)) if s.trim().is_empty() => Some(Decimal::ZERO),
        Some(Value::String(s)) => parse_decimal(s.trim()),
        Some(Value::Array(_)) | Some(Value::Object(_)) => None,
    };
    let rounded = parsed
        .map(|d| d.round_dp_with_strategy(TOTAL_SCALE, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO);
    with_total_scale(rounded)
}

/// Pad a total to `TOTAL_SCALE` digits. Used on coerced input and on decoded rows,
/// since a zero NUMERIC decodes without its scale.
pub fn with_total_scale(mut total: Decimal) -> Decimal {
    total.rescale(TOTAL_SCALE);
    total
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if let Ok(d) = Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)) {
        return Some(d);
    }
    s.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .and_then(Decimal::from_f64)
}
