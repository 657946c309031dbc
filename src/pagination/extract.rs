//! Field extraction from decoded pages
//!
//! Pages decoded as JSON are inspected by field name. Lookups never panic:
//! a missing field, a `null` value, or a value of the wrong kind is reported
//! as an error naming the field.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use std::fmt;

/// Kind of value expected in a page field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A whole JSON number
    Integer,
    /// A JSON array
    Sequence,
    /// A nested JSON object
    Object,
}

impl FieldKind {
    fn matches(self, value: &JsonValue) -> bool {
        match self {
            FieldKind::Integer => value.as_i64().is_some(),
            FieldKind::Sequence => value.is_array(),
            FieldKind::Object => value.is_object(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Integer => "an integer",
            FieldKind::Sequence => "a sequence",
            FieldKind::Object => "an object",
        };
        f.write_str(name)
    }
}

/// Describe the kind of a JSON value for error messages
fn describe(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(n) if n.is_i64() => "an integer",
        JsonValue::Number(n) if n.is_u64() => "an out-of-range integer",
        JsonValue::Number(_) => "a float",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a sequence",
        JsonValue::Object(_) => "an object",
    }
}

/// Look up `field` in `container` and check that it holds a value of `kind`.
pub fn extract_field<'a>(
    container: &'a JsonValue,
    field: &str,
    kind: FieldKind,
) -> Result<&'a JsonValue> {
    let JsonValue::Object(map) = container else {
        return Err(Error::Shape {
            found: describe(container),
        });
    };

    let value = map.get(field).ok_or_else(|| Error::field_not_found(field))?;

    if !kind.matches(value) {
        return Err(Error::KindMismatch {
            field: field.to_string(),
            expected: kind,
            found: describe(value),
        });
    }

    Ok(value)
}

/// Walk nested objects along `path` and check the last field against `kind`.
///
/// Every field but the last must hold an object.
pub fn extract_path<'a>(
    container: &'a JsonValue,
    path: &[&str],
    kind: FieldKind,
) -> Result<&'a JsonValue> {
    let Some((last, parents)) = path.split_last() else {
        return Err(Error::invalid_argument("field path must not be empty"));
    };

    let mut current = container;
    for field in parents {
        current = extract_field(current, field, FieldKind::Object)?;
    }
    extract_field(current, last, kind)
}

/// Read an integer field
pub fn extract_integer(container: &JsonValue, field: &str) -> Result<i64> {
    let value = extract_field(container, field, FieldKind::Integer)?;
    // Kind check above guarantees an i64
    Ok(value.as_i64().unwrap_or_default())
}

/// Read a sequence field
pub fn extract_sequence<'a>(container: &'a JsonValue, field: &str) -> Result<&'a [JsonValue]> {
    let value = extract_field(container, field, FieldKind::Sequence)?;
    Ok(value.as_array().map_or(&[][..], Vec::as_slice))
}

/// Read a nested object field
pub fn extract_object<'a>(container: &'a JsonValue, field: &str) -> Result<&'a JsonObject> {
    match extract_field(container, field, FieldKind::Object)? {
        JsonValue::Object(map) => Ok(map),
        other => Err(Error::KindMismatch {
            field: field.to_string(),
            expected: FieldKind::Object,
            found: describe(other),
        }),
    }
}
