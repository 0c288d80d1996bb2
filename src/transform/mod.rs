//! Provides the display transform types and their JSON resolvers.
//!
//! A [`Transformation`] is a rotation/translation/scale triple resolved from a
//! small JSON object. A [`DisplayTransformTable`] holds one transformation for
//! every [`DisplayContext`] an item can be shown in.
//!
//! # Examples
//! ```
//! use serde_json::json;
//!
//! use display_transforms::transform::{self, DisplayContext, Transformation};
//!
//! let table = transform::parse_display_table(&json!({
//!     "gui": { "rotation": [30, 225, 0], "scale": [0.625, 0.625, 0.625] }
//! }))
//! .unwrap();
//! assert_eq!(table[DisplayContext::Ground], Transformation::IDENTITY);
//! assert!(table.is_defined(DisplayContext::Gui));
//! ```

pub mod descriptor;
pub mod display;
pub mod json;
pub mod matrix;

pub use descriptor::parse_transformation;
pub use display::{parse_display_table, DisplayContext, DisplayTransformTable};
pub use json::parse_vector3;
pub use matrix::Hand;

/// A 3-component vector used for rotation, translation and scale.
///
/// # Examples
/// ```
/// use display_transforms::transform::Vector3;
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
pub type Vector3 = glam::Vec3;

/// Conversion factor from authored translation units (1/16 block) to blocks.
pub const TRANSLATION_UNIT: f32 = 0.0625;

/// Largest magnitude a translation component may have after unit conversion.
pub const MAX_TRANSLATION: f32 = 5.0;

/// Largest magnitude a scale component may have.
pub const MAX_SCALE: f32 = 4.0;

/// Represents a resolved rotation, translation and scale.
///
/// Rotation is in degrees and kept as authored. Translation is already
/// converted to block units and clamped to [`MAX_TRANSLATION`]; scale is
/// clamped to [`MAX_SCALE`].
///
/// # Examples
/// ```
/// use display_transforms::transform::{Transformation, Vector3};
///
/// let t = Transformation::IDENTITY;
/// assert_eq!(t.scale, Vector3::ONE);
/// assert!(t.is_identity());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transformation {
    /// Euler angles in degrees [X, Y, Z].
    pub rotation: Vector3,
    /// Offset in block units.
    pub translation: Vector3,
    /// Per-axis scale factor.
    pub scale: Vector3,
}

impl Transformation {
    /// The no-op transformation.
    pub const IDENTITY: Transformation = Transformation {
        rotation: Vector3::ZERO,
        translation: Vector3::ZERO,
        scale: Vector3::ONE,
    };

    /// Creates a transformation from already-resolved components.
    ///
    /// No clamping is applied here; use [`parse_transformation`] for authored
    /// input.
    pub const fn new(rotation: Vector3, translation: Vector3, scale: Vector3) -> Self {
        Self {
            rotation,
            translation,
            scale,
        }
    }

    /// Checks whether this transformation leaves points unchanged.
    ///
    /// # Examples
    /// ```
    /// use display_transforms::transform::{Transformation, Vector3};
    ///
    /// let t = Transformation::new(Vector3::ZERO, Vector3::ZERO, Vector3::splat(2.0));
    /// assert!(!t.is_identity());
    /// ```
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Errors raised while resolving a transform document.
///
/// # Examples
/// ```
/// use display_transforms::transform::SchemaError;
///
/// let err = SchemaError::ArityMismatch {
///     field: "rotation".to_string(),
///     expected: 3,
///     found: 2,
/// };
/// assert_eq!(format!("{}", err), "Expected 3 rotation values, found: 2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaError {
    /// A vector array has the wrong number of elements.
    ArityMismatch {
        field: String,
        expected: usize,
        found: usize,
    },
    /// A value has the wrong JSON type.
    ///
    /// `index` is set when an array element is at fault and `None` when the
    /// field itself is.
    TypeMismatch {
        field: String,
        index: Option<usize>,
        expected: &'static str,
    },
    /// The input document is not a JSON object.
    NotAnObject,
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::ArityMismatch {
                field,
                expected,
                found,
            } => write!(f, "Expected {} {} values, found: {}", expected, field, found),
            SchemaError::TypeMismatch {
                field,
                index: Some(i),
                expected,
            } => write!(f, "Expected {}[{}] to be a {}", field, i, expected),
            SchemaError::TypeMismatch {
                field,
                index: None,
                expected,
            } => write!(f, "Expected {} to be an {}", field, expected),
            SchemaError::NotAnObject => write!(f, "Expected a JSON object"),
        }
    }
}

impl std::error::Error for SchemaError {}

/// The result type for transform resolution.
pub type SchemaResult<T> = Result<T, SchemaError>;
