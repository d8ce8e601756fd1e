//! Flat field-map view of a settings value.

use serde_json::{Map, Number, Value};

use super::{FieldError, Settings};

/// Ordered field name to value mapping of one settings section.
pub type FieldMap = Map<String, Value>;

/// Serializes a settings value into its flat field map.
///
/// # Errors
///
/// Returns [`FieldError::NotFlat`] if the schema does not serialize to an object.
pub fn to_fields<S: Settings>(settings: &S) -> Result<FieldMap, FieldError> {
    match serde_json::to_value(settings)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(FieldError::NotFlat {
            section: S::SECTION,
        }),
    }
}

/// Deserializes a settings value from its flat field map.
///
/// # Errors
///
/// Returns an error if a field has the wrong type or a required field is missing.
pub fn from_fields<S: Settings>(fields: FieldMap) -> Result<S, FieldError> {
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Copies stored values onto `base` for every field `base` already has.
///
/// Stored keys unknown to the schema are ignored; fields absent from
/// `stored` keep their value from `base`.
#[must_use]
pub fn overlay(mut base: FieldMap, stored: &FieldMap) -> FieldMap {
    for (name, value) in &mut base {
        if let Some(stored_value) = stored.get(name) {
            value.clone_from(stored_value);
        }
    }
    base
}

/// Converts a raw command-line string into the JSON type of `current`.
///
/// Range checks (e.g. a `u16` port) are left to [`from_fields`].
///
/// # Errors
///
/// Returns [`FieldError::Binding`] if `raw` cannot represent the field's type.
pub fn coerce(field: &str, raw: &str, current: &Value) -> Result<Value, FieldError> {
    let binding = |expected| FieldError::Binding {
        field: field.to_string(),
        raw: raw.to_string(),
        expected,
    };

    match current {
        Value::String(_) => Ok(Value::String(raw.to_string())),
        // Unset optional: take the JSON reading if there is one, else the text.
        Value::Null => {
            Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
        }
        Value::Bool(_) => parse_bool(raw)
            .map(Value::Bool)
            .ok_or_else(|| binding("true or false")),
        Value::Number(n) if n.is_f64() => raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| binding("a number")),
        Value::Number(_) => parse_integer(raw).ok_or_else(|| binding("an integer")),
        Value::Array(_) | Value::Object(_) => {
            serde_json::from_str(raw).map_err(|_| binding("a JSON value"))
        }
    }
}

/// Binds one raw command-line value onto `fields`, validating it against `S`.
///
/// `fields` is left untouched when the field is unknown or the value does not fit.
///
/// # Errors
///
/// Returns an error if the value cannot be coerced or fails schema validation.
pub fn bind<S: Settings>(fields: &mut FieldMap, field: &str, raw: &str) -> Result<(), FieldError> {
    let Some(current) = fields.get(field) else {
        return Err(FieldError::Binding {
            field: field.to_string(),
            raw: raw.to_string(),
            expected: "a field of this schema",
        });
    };

    let unset = current.is_null();
    let value = coerce(field, raw, current)?;

    // Validate the whole candidate so out-of-range values are rejected here.
    match try_candidate::<S>(fields, field, value) {
        Ok(candidate) => {
            *fields = candidate;
            Ok(())
        }
        // An optional string given digits or `true` still wants the text.
        Err(_) if unset => {
            *fields = try_candidate::<S>(fields, field, Value::String(raw.to_string()))?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn try_candidate<S: Settings>(
    fields: &FieldMap,
    field: &str,
    value: Value,
) -> Result<FieldMap, FieldError> {
    let mut candidate = fields.clone();
    candidate.insert(field.to_string(), value);
    from_fields::<S>(candidate.clone())?;
    Ok(candidate)
}

fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_integer(raw: &str) -> Option<Value> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map(Value::from)
        .or_else(|_| raw.parse::<u64>().map(Value::from))
        .ok()
}
