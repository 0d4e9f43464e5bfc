//! Field checks shared by the request handlers.
//!
//! Clients send identifiers either as JSON numbers or as numeric strings, and
//! treat empty strings and zero as "not supplied". These helpers keep that
//! behaviour identical across endpoints.

use serde_json::Value;

use shared_models::error::AppError;

/// True when a JSON value counts as supplied: not absent, null, empty,
/// zero or false.
pub fn is_supplied(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Bool(b)) => *b,
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(fields)) => !fields.is_empty(),
    }
}

pub fn is_supplied_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}

/// Reads an integer from a JSON number or numeric string.
pub fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => parse_int(s),
        _ => None,
    }
}

pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// A required integer id from a JSON body.
pub fn require_int(value: Option<&Value>, field: &str) -> Result<i64, AppError> {
    if !is_supplied(value) {
        return Err(AppError::MissingFields(format!("Missing {}", field)));
    }
    value
        .and_then(as_int)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid {}", field)))
}

/// A required integer id from a query string.
pub fn require_query_int(value: Option<&str>, field: &str) -> Result<i64, AppError> {
    if !is_supplied_text(value) {
        return Err(AppError::MissingFields(format!("Missing {}", field)));
    }
    value
        .and_then(parse_int)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid {}", field)))
}
