//! Provides JSON parsing helpers for transform documents.
//!
//! Helpers for pulling typed values out of a `serde_json` object, failing with
//! a [`SchemaError`] instead of guessing when the shape is wrong.
//!
//! # Examples
//! ```
//! use serde_json::json;
//!
//! use display_transforms::transform::{json::parse_vector3, Vector3};
//!
//! let obj = json!({ "scale": [1, 2, 3] });
//! let v = parse_vector3(obj.as_object().unwrap(), "scale", Vector3::ONE).unwrap();
//! assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
//! ```

use serde_json::{Map, Value};

use super::{SchemaError, SchemaResult, Vector3};

/// Parses the named 3-element numeric array of `object`, or returns `default`
/// when the key is absent.
///
/// # Errors
/// Returns [`SchemaError::ArityMismatch`] when the array does not hold exactly
/// three elements and [`SchemaError::TypeMismatch`] when the field is not an
/// array or an element is not a number.
///
/// # Examples
/// ```
/// use serde_json::json;
///
/// use display_transforms::transform::{json::parse_vector3, SchemaError, Vector3};
///
/// let obj = json!({ "rotation": [1, 2] });
/// let obj = obj.as_object().unwrap();
/// assert_eq!(
///     parse_vector3(obj, "rotation", Vector3::ZERO),
///     Err(SchemaError::ArityMismatch { field: "rotation".to_string(), expected: 3, found: 2 })
/// );
/// assert_eq!(parse_vector3(obj, "scale", Vector3::ONE), Ok(Vector3::ONE));
/// ```
pub fn parse_vector3(
    object: &Map<String, Value>,
    key: &str,
    default: Vector3,
) -> SchemaResult<Vector3> {
    let value = match object.get(key) {
        Some(value) => value,
        None => return Ok(default),
    };

    let arr = value.as_array().ok_or_else(|| SchemaError::TypeMismatch {
        field: key.to_string(),
        index: None,
        expected: "array",
    })?;

    if arr.len() != 3 {
        return Err(SchemaError::ArityMismatch {
            field: key.to_string(),
            expected: 3,
            found: arr.len(),
        });
    }

    let mut components = [0.0f32; 3];
    for (i, element) in arr.iter().enumerate() {
        components[i] = as_f32(element).ok_or_else(|| SchemaError::TypeMismatch {
            field: key.to_string(),
            index: Some(i),
            expected: "number",
        })?;
    }

    Ok(Vector3::from_array(components))
}

/// Reads a JSON number (integer or decimal) as `f32`.
fn as_f32(value: &Value) -> Option<f32> {
    value.as_f64().map(|n| n as f32)
}

/// Returns the named sub-object of `object`, `None` when the key is absent.
///
/// # Errors
/// Returns [`SchemaError::TypeMismatch`] when the key is present but does not
/// hold an object.
pub fn optional_object<'a>(
    object: &'a Map<String, Value>,
    key: &str,
) -> SchemaResult<Option<&'a Map<String, Value>>> {
    match object.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_object()
            .map(Some)
            .ok_or_else(|| SchemaError::TypeMismatch {
                field: key.to_string(),
                index: None,
                expected: "object",
            }),
    }
}
