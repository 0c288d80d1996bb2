//! Provides namespaced resource identifiers for item models.
//!
//! # Examples
//! ```
//! use display_transforms::model::ModelId;
//!
//! let id: ModelId = "mymod:wrench#inventory".parse().unwrap();
//! assert!(id.is_inventory());
//! assert_eq!(id.item_model_path().to_string(), "mymod:models/item/wrench.json");
//! ```

use std::str::FromStr;

use super::ModelError;

/// Namespace used when an identifier does not name one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Variant under which item models are requested.
pub const INVENTORY_VARIANT: &str = "inventory";

/// A `namespace:path` resource location.
///
/// # Examples
/// ```
/// use display_transforms::model::ResourcePath;
///
/// let p: ResourcePath = "models/item/stick.obj".parse().unwrap();
/// assert_eq!(p.namespace, "minecraft");
/// assert!(p.has_extension("obj"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    pub namespace: String,
    pub path: String,
}

impl ResourcePath {
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Checks whether the path ends in `.<ext>` (case-sensitive).
    pub fn has_extension(&self, ext: &str) -> bool {
        path_has_extension(&self.path, ext)
    }
}

impl FromStr for ResourcePath {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = match s.split_once(':') {
            Some((ns, path)) => (if ns.is_empty() { DEFAULT_NAMESPACE } else { ns }, path),
            None => (DEFAULT_NAMESPACE, s),
        };

        if path.is_empty() {
            return Err(ModelError::InvalidIdentifier(s.to_string()));
        }
        if !is_valid_segment(namespace, false) || !is_valid_segment(path, true) {
            return Err(ModelError::InvalidIdentifier(s.to_string()));
        }

        Ok(Self::new(namespace, path))
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Checks whether a raw path string ends in `.<ext>` (case-sensitive).
pub fn path_has_extension(path: &str, ext: &str) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(stem, found)| !stem.is_empty() && found == ext)
}

fn is_valid_segment(s: &str, allow_slash: bool) -> bool {
    s.chars().all(|c| {
        c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || matches!(c, '_' | '-' | '.')
            || (allow_slash && c == '/')
    })
}

/// A model request: a resource location plus an optional variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelId {
    pub resource: ResourcePath,
    pub variant: Option<String>,
}

impl ModelId {
    /// Checks whether this id requests the inventory (item) variant.
    pub fn is_inventory(&self) -> bool {
        self.variant.as_deref() == Some(INVENTORY_VARIANT)
    }

    /// Returns the location of the item model document for this id.
    pub fn item_model_path(&self) -> ResourcePath {
        ResourcePath::new(
            self.resource.namespace.clone(),
            format!("models/item/{}.json", self.resource.path),
        )
    }
}

impl FromStr for ModelId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (resource, variant) = match s.split_once('#') {
            Some((resource, variant)) => (resource, Some(variant.to_string())),
            None => (s, None),
        };
        Ok(Self {
            resource: resource.parse()?,
            variant,
        })
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.variant {
            Some(v) => write!(f, "{}#{}", self.resource, v),
            None => write!(f, "{}", self.resource),
        }
    }
}
