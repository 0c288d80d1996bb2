//! Resolves a single transform block into a [`Transformation`].
//!
//! A block is a JSON object with optional `rotation`, `translation` and
//! `scale` arrays:
//!
//! ```json
//! { "rotation": [0, 45, 0], "translation": [0, 3, 1], "scale": [0.5, 0.5, 0.5] }
//! ```
//!
//! Translation is authored in 1/16 block units and converted with
//! [`TRANSLATION_UNIT`] before it is clamped.

use serde_json::{Map, Value};

use super::json::parse_vector3;
use super::{
    SchemaError, SchemaResult, Transformation, Vector3, MAX_SCALE, MAX_TRANSLATION,
    TRANSLATION_UNIT,
};

const DEFAULT_ROTATION: Vector3 = Vector3::ZERO;
const DEFAULT_TRANSLATION: Vector3 = Vector3::ZERO;
const DEFAULT_SCALE: Vector3 = Vector3::ONE;

/// Resolves a transform block.
///
/// # Errors
/// Returns [`SchemaError::NotAnObject`] when `value` is not an object, or the
/// error of the first malformed vector.
///
/// # Examples
/// ```
/// use serde_json::json;
///
/// use display_transforms::transform::{parse_transformation, Vector3};
///
/// let t = parse_transformation(&json!({ "translation": [160, 0, 0] })).unwrap();
/// assert_eq!(t.translation, Vector3::new(5.0, 0.0, 0.0));
/// ```
pub fn parse_transformation(value: &Value) -> SchemaResult<Transformation> {
    let object = value.as_object().ok_or(SchemaError::NotAnObject)?;
    parse_transformation_object(object)
}

/// Resolves a transform block that is already known to be an object.
pub fn parse_transformation_object(object: &Map<String, Value>) -> SchemaResult<Transformation> {
    let rotation = parse_vector3(object, "rotation", DEFAULT_ROTATION)?;

    let translation = parse_vector3(object, "translation", DEFAULT_TRANSLATION)?;
    let translation = clamp_symmetric(translation * TRANSLATION_UNIT, MAX_TRANSLATION);

    let scale = parse_vector3(object, "scale", DEFAULT_SCALE)?;
    let scale = clamp_symmetric(scale, MAX_SCALE);

    Ok(Transformation::new(rotation, translation, scale))
}

/// Clamps every component of `v` to `[-limit, limit]`.
#[inline]
fn clamp_symmetric(v: Vector3, limit: f32) -> Vector3 {
    v.clamp(Vector3::splat(-limit), Vector3::splat(limit))
}
