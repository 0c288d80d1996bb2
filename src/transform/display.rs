//! Resolves the `display` block of an item model into a full table of
//! per-context transformations.
//!
//! Every [`DisplayContext`] always receives a value. Contexts missing from the
//! document resolve to [`Transformation::IDENTITY`], except the two left-hand
//! contexts, which take a copy of their right-hand counterpart.
//!
//! # Examples
//! ```
//! use serde_json::json;
//!
//! use display_transforms::transform::{parse_display_table, DisplayContext, Vector3};
//!
//! let table = parse_display_table(&json!({
//!     "thirdperson_righthand": { "scale": [2, 2, 2] }
//! }))
//! .unwrap();
//! assert_eq!(table[DisplayContext::ThirdPersonLeft].scale, Vector3::splat(2.0));
//! ```

use std::ops::Index;

use serde_json::{Map, Value};

use super::descriptor::parse_transformation_object;
use super::json::optional_object;
use super::matrix::Hand;
use super::{SchemaError, SchemaResult, Transformation};

/// A context in which an item can be displayed.
///
/// # Examples
/// ```
/// use display_transforms::transform::DisplayContext;
///
/// assert_eq!(DisplayContext::Gui.json_key(), "gui");
/// assert_eq!(
///     DisplayContext::from_json_key("firstperson_lefthand"),
///     Some(DisplayContext::FirstPersonLeft)
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayContext {
    ThirdPersonRight,
    ThirdPersonLeft,
    FirstPersonRight,
    FirstPersonLeft,
    Head,
    Gui,
    Ground,
    Fixed,
}

impl DisplayContext {
    /// All contexts, in table order.
    pub const ALL: [DisplayContext; 8] = [
        DisplayContext::ThirdPersonRight,
        DisplayContext::ThirdPersonLeft,
        DisplayContext::FirstPersonRight,
        DisplayContext::FirstPersonLeft,
        DisplayContext::Head,
        DisplayContext::Gui,
        DisplayContext::Ground,
        DisplayContext::Fixed,
    ];

    /// Returns the key this context uses in a `display` block.
    pub fn json_key(self) -> &'static str {
        match self {
            DisplayContext::ThirdPersonRight => "thirdperson_righthand",
            DisplayContext::ThirdPersonLeft => "thirdperson_lefthand",
            DisplayContext::FirstPersonRight => "firstperson_righthand",
            DisplayContext::FirstPersonLeft => "firstperson_lefthand",
            DisplayContext::Head => "head",
            DisplayContext::Gui => "gui",
            DisplayContext::Ground => "ground",
            DisplayContext::Fixed => "fixed",
        }
    }

    /// Looks up a context by its `display` block key.
    pub fn from_json_key(key: &str) -> Option<DisplayContext> {
        Self::ALL.into_iter().find(|ctx| ctx.json_key() == key)
    }

    /// Returns the hand this context is rendered in.
    ///
    /// # Examples
    /// ```
    /// use display_transforms::transform::{DisplayContext, Hand};
    ///
    /// assert_eq!(DisplayContext::FirstPersonLeft.hand(), Hand::Left);
    /// assert_eq!(DisplayContext::Gui.hand(), Hand::Right);
    /// ```
    pub fn hand(self) -> Hand {
        match self {
            DisplayContext::ThirdPersonLeft | DisplayContext::FirstPersonLeft => Hand::Left,
            _ => Hand::Right,
        }
    }

    /// Returns the right-hand context a left-hand context inherits from.
    fn inherits_from(self) -> Option<DisplayContext> {
        match self {
            DisplayContext::ThirdPersonLeft => Some(DisplayContext::ThirdPersonRight),
            DisplayContext::FirstPersonLeft => Some(DisplayContext::FirstPersonRight),
            _ => None,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for DisplayContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.json_key())
    }
}

/// One resolved [`Transformation`] per [`DisplayContext`].
///
/// # Examples
/// ```
/// use display_transforms::transform::{DisplayContext, DisplayTransformTable, Transformation};
///
/// let table = DisplayTransformTable::default();
/// assert_eq!(table.get(DisplayContext::Fixed), Transformation::IDENTITY);
/// assert_eq!(table.iter().count(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayTransformTable {
    entries: [Transformation; 8],
}

impl DisplayTransformTable {
    /// Returns the transformation for `context`.
    pub fn get(&self, context: DisplayContext) -> Transformation {
        self.entries[context.slot()]
    }

    /// Checks whether `context` has anything other than the identity.
    pub fn is_defined(&self, context: DisplayContext) -> bool {
        !self.entries[context.slot()].is_identity()
    }

    /// Iterates all contexts with their transformation, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (DisplayContext, &Transformation)> + '_ {
        DisplayContext::ALL.into_iter().zip(self.entries.iter())
    }
}

impl Default for DisplayTransformTable {
    fn default() -> Self {
        Self {
            entries: [Transformation::IDENTITY; 8],
        }
    }
}

impl Index<DisplayContext> for DisplayTransformTable {
    type Output = Transformation;

    fn index(&self, context: DisplayContext) -> &Transformation {
        &self.entries[context.slot()]
    }
}

/// Resolves a `display` block into a [`DisplayTransformTable`].
///
/// # Errors
/// Returns [`SchemaError::NotAnObject`] when `value` is not an object,
/// [`SchemaError::TypeMismatch`] when a context key does not hold an object,
/// or the first error raised inside a context's transform block. No partial
/// table is ever returned.
///
/// # Examples
/// ```
/// use serde_json::json;
///
/// use display_transforms::transform::{parse_display_table, DisplayTransformTable};
///
/// assert_eq!(parse_display_table(&json!({})).unwrap(), DisplayTransformTable::default());
/// assert!(parse_display_table(&json!({ "gui": { "rotation": [1, 2] } })).is_err());
/// ```
pub fn parse_display_table(value: &Value) -> SchemaResult<DisplayTransformTable> {
    let object = value.as_object().ok_or(SchemaError::NotAnObject)?;
    parse_display_object(object)
}

/// Resolves a `display` block that is already known to be an object.
pub fn parse_display_object(object: &Map<String, Value>) -> SchemaResult<DisplayTransformTable> {
    let mut entries = [Transformation::IDENTITY; 8];

    // ALL lists each right hand before its left hand, so the source slot is
    // already resolved when the left hand is reached.
    for context in DisplayContext::ALL {
        let resolved = match optional_object(object, context.json_key())? {
            Some(block) => parse_transformation_object(block)?,
            None => match context.inherits_from() {
                Some(source) => {
                    log::trace!("{} not specified, copying {}", context, source);
                    entries[source.slot()]
                }
                None => Transformation::IDENTITY,
            },
        };
        entries[context.slot()] = resolved;
    }

    Ok(DisplayTransformTable { entries })
}
