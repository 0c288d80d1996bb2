//! Provides item model documents whose geometry comes from an OBJ parent.
//!
//! An item model is a small JSON document naming an `.obj` parent and an
//! optional `display` block:
//!
//! ```json
//! {
//!     "parent": "mymod:models/item/wrench.obj",
//!     "display": { "gui": { "rotation": [30, 225, 0] } }
//! }
//! ```
//!
//! Documents with any other parent are not OBJ item models and are rejected
//! with [`ModelError::NotObjModel`], which callers usually treat as "not mine"
//! rather than as a failure.
//!
//! # Examples
//! ```
//! use display_transforms::model::{ItemModel, LoaderOptions};
//!
//! let doc = br#"{ "parent": "mymod:models/item/wrench.obj" }"#;
//! let model = ItemModel::from_slice(doc, &LoaderOptions::default()).unwrap();
//! assert_eq!(model.parent.path, "models/item/wrench.obj");
//! assert!(model.display.is_none());
//! ```

pub mod id;
pub mod loader;

pub use id::{ModelId, ResourcePath};
pub use loader::ItemModelLoader;

use serde::Deserialize;
use serde_json::Value;

use crate::transform::{
    display::parse_display_object, json::optional_object, DisplayTransformTable, SchemaError,
};

/// Extension a parent must carry for the document to be an OBJ item model.
pub const OBJ_EXTENSION: &str = "obj";

/// JSON dialect accepted when decoding documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSyntax {
    /// Plain JSON via `serde_json`.
    #[default]
    Strict,
    /// JSON5 via `json5`: comments, trailing commas, unquoted keys.
    Lenient,
}

/// Options for decoding and loading item model documents.
///
/// Deserializable so a host can embed it in its own configuration; missing
/// fields take their defaults.
///
/// # Examples
/// ```
/// use display_transforms::model::{DocumentSyntax, LoaderOptions};
///
/// let opts: LoaderOptions = serde_json::from_str(r#"{ "syntax": "lenient" }"#).unwrap();
/// assert_eq!(opts.syntax, DocumentSyntax::Lenient);
/// assert!(opts.quiet_foreign);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    pub syntax: DocumentSyntax,
    /// Skip documents that are not OBJ item models without a warning.
    pub quiet_foreign: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            syntax: DocumentSyntax::Strict,
            quiet_foreign: true,
        }
    }
}

/// Errors that can occur while reading an item model document.
///
/// # Examples
/// ```
/// use display_transforms::model::ModelError;
///
/// let err = ModelError::NotObjModel("block/stone".to_string());
/// assert!(err.is_foreign());
/// ```
#[derive(Debug)]
pub enum ModelError {
    /// The document is not valid JSON (or JSON5) text.
    InvalidJson(String),
    /// The document is not an OBJ item model.
    NotObjModel(String),
    /// A resource identifier is malformed.
    InvalidIdentifier(String),
    /// The document is an OBJ item model with a malformed `display` block.
    Schema(SchemaError),
}

impl ModelError {
    /// Checks whether this error only means the document belongs to another
    /// loader.
    pub fn is_foreign(&self) -> bool {
        matches!(self, ModelError::NotObjModel(_))
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidJson(msg) => write!(f, "Invalid JSON: {}", msg),
            ModelError::NotObjModel(parent) => {
                write!(f, "Parent of OBJ item model must be a .obj file, got: {}", parent)
            }
            ModelError::InvalidIdentifier(id) => write!(f, "Invalid identifier: {}", id),
            ModelError::Schema(e) => write!(f, "Invalid display block: {}", e),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Schema(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SchemaError> for ModelError {
    fn from(e: SchemaError) -> Self {
        ModelError::Schema(e)
    }
}

/// An item model backed by an OBJ parent.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemModel {
    /// Location of the OBJ geometry.
    pub parent: ResourcePath,
    /// Resolved `display` block, if the document has one.
    pub display: Option<DisplayTransformTable>,
}

impl ItemModel {
    /// Decodes and resolves an item model document.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidJson`] when the bytes are not a JSON
    /// document in the configured syntax, otherwise see [`ItemModel::from_value`].
    pub fn from_slice(data: &[u8], options: &LoaderOptions) -> Result<Self, ModelError> {
        let value = decode_document(data, options.syntax)?;
        Self::from_value(&value)
    }

    /// Resolves an already-parsed item model document.
    ///
    /// # Errors
    /// Returns [`ModelError::NotObjModel`] when `parent` is missing, not a
    /// string, or not an `.obj` path, and [`ModelError::Schema`] when the
    /// document or its `display` block is malformed.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    ///
    /// use display_transforms::model::{ItemModel, ModelError};
    ///
    /// let result = ItemModel::from_value(&json!({ "parent": "item/generated" }));
    /// assert!(matches!(result, Err(ModelError::NotObjModel(_))));
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        let object = value.as_object().ok_or(SchemaError::NotAnObject)?;

        let parent = match object.get("parent") {
            Some(Value::String(s)) => s,
            Some(other) => return Err(ModelError::NotObjModel(other.to_string())),
            None => return Err(ModelError::NotObjModel(String::new())),
        };
        if !id::path_has_extension(parent, OBJ_EXTENSION) {
            return Err(ModelError::NotObjModel(parent.clone()));
        }
        let parent: ResourcePath = parent.parse()?;

        let display = optional_object(object, "display")?
            .map(parse_display_object)
            .transpose()?;

        Ok(Self { parent, display })
    }

    /// Returns the display table, or an all-identity table when the document
    /// has no `display` block.
    pub fn display_or_identity(&self) -> DisplayTransformTable {
        self.display.unwrap_or_default()
    }
}

/// Parses document bytes into a JSON value tree.
fn decode_document(data: &[u8], syntax: DocumentSyntax) -> Result<Value, ModelError> {
    let text = std::str::from_utf8(data)
        .map_err(|_| ModelError::InvalidJson("Invalid UTF-8 in model file".to_string()))?;

    match syntax {
        DocumentSyntax::Strict => {
            serde_json::from_str(text).map_err(|e| ModelError::InvalidJson(e.to_string()))
        }
        DocumentSyntax::Lenient => {
            json5::from_str(text).map_err(|e| ModelError::InvalidJson(e.to_string()))
        }
    }
}
