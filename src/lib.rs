//! Provides parsing and resolution of item display transforms.
//!
//! Item models describe how an item is posed in each place it can be shown
//! (held in either hand, worn on the head, in the inventory, dropped on the
//! ground, in an item frame) with a small JSON `display` block. This crate
//! turns that block into a fully populated, validated table of
//! rotation/translation/scale transforms.
//!
//! - [`transform`] holds the strict, pure resolvers and the value types.
//! - [`model`] reads whole item model documents that name an OBJ parent and
//!   loads batches of them with per-document failure isolation.
//!
//! The library never installs a logger; it reports through the `log` facade.
//!
//! # Examples
//! ```
//! use serde_json::json;
//!
//! use display_transforms::transform::{parse_display_table, DisplayContext, Vector3};
//!
//! let table = parse_display_table(&json!({
//!     "firstperson_righthand": { "rotation": [0, -90, 25], "translation": [1.13, 3.2, 1.13] }
//! }))
//! .unwrap();
//! let left = table[DisplayContext::FirstPersonLeft];
//! assert_eq!(left, table[DisplayContext::FirstPersonRight]);
//! assert_eq!(left.scale, Vector3::ONE);
//! ```

pub mod model;
pub mod transform;

pub use model::{ItemModel, ItemModelLoader, LoaderOptions, ModelError, ModelId};
pub use transform::{
    parse_display_table, parse_transformation, parse_vector3, DisplayContext,
    DisplayTransformTable, SchemaError, Transformation, Vector3,
};
