//! Loads batches of item model documents, isolating failures per document.
//!
//! A host hands the loader model ids together with the bytes of their item
//! model documents. Documents that turn out not to be OBJ item models are
//! skipped quietly; malformed OBJ item models are logged and skipped. One bad
//! document never aborts the rest of the batch.
//!
//! # Examples
//! ```
//! use display_transforms::model::{ItemModelLoader, LoaderOptions, ModelId};
//!
//! let loader = ItemModelLoader::new(LoaderOptions::default());
//! let docs: Vec<(ModelId, Vec<u8>)> = vec![
//!     ("mymod:wrench#inventory".parse().unwrap(), br#"{ "parent": "mymod:wrench.obj" }"#.to_vec()),
//!     ("mymod:stone#inventory".parse().unwrap(), br#"{ "parent": "block/stone" }"#.to_vec()),
//! ];
//! let loaded = loader.load_all(docs);
//! assert_eq!(loaded.len(), 1);
//! ```

use super::{ItemModel, LoaderOptions, ModelError, ModelId};

/// Loads item models according to a fixed set of [`LoaderOptions`].
#[derive(Clone, Debug, Default)]
pub struct ItemModelLoader {
    options: LoaderOptions,
}

impl ItemModelLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Resolves one document, returning `Ok(None)` for ids this loader does
    /// not handle (anything but the inventory variant).
    ///
    /// # Errors
    /// Returns the [`ModelError`] raised while reading the document.
    pub fn try_load(&self, id: &ModelId, data: &[u8]) -> Result<Option<ItemModel>, ModelError> {
        if !id.is_inventory() {
            return Ok(None);
        }
        ItemModel::from_slice(data, &self.options).map(Some)
    }

    /// Resolves one document, logging and swallowing any failure.
    pub fn load(&self, id: &ModelId, data: &[u8]) -> Option<ItemModel> {
        match self.try_load(id, data) {
            Ok(model) => model,
            Err(e) if e.is_foreign() => {
                if self.options.quiet_foreign {
                    log::debug!("Skipping {}: {}", id, e);
                } else {
                    log::warn!("Skipping {}: {}", id, e);
                }
                None
            }
            Err(e) => {
                log::error!("Unable to load OBJ item model {}: {}", id, e);
                None
            }
        }
    }

    /// Resolves every document of a batch, keeping only the ones that loaded.
    pub fn load_all<I, D>(&self, documents: I) -> Vec<(ModelId, ItemModel)>
    where
        I: IntoIterator<Item = (ModelId, D)>,
        D: AsRef<[u8]>,
    {
        let loaded: Vec<_> = documents
            .into_iter()
            .filter_map(|(id, data)| {
                let model = self.load(&id, data.as_ref())?;
                Some((id, model))
            })
            .collect();

        log::debug!("Loaded {} OBJ item models", loaded.len());
        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ModelId {
        s.parse().unwrap()
    }

    #[test]
    fn test_non_inventory_variant_ignored() {
        let loader = ItemModelLoader::default();
        let doc = br#"{ "parent": "a.obj" }"#;
        assert!(loader.try_load(&id("m:a#facing=north"), doc).unwrap().is_none());
        assert!(loader.try_load(&id("m:a"), doc).unwrap().is_none());
        assert!(loader.try_load(&id("m:a#inventory"), doc).unwrap().is_some());
    }

    #[test]
    fn test_load_swallows_errors() {
        let loader = ItemModelLoader::default();
        assert!(loader.load(&id("m:a#inventory"), b"{").is_none());
        assert!(loader.load(&id("m:a#inventory"), br#"{ "parent": "block/cube" }"#).is_none());
        assert!(loader
            .load(&id("m:a#inventory"), br#"{ "parent": "a.obj", "display": 1 }"#)
            .is_none());
    }

    #[test]
    fn test_try_load_reports_errors() {
        let loader = ItemModelLoader::default();
        let err = loader
            .try_load(&id("m:a#inventory"), br#"{ "parent": "a.obj", "display": { "gui": { "rotation": [1, 2] } } }"#)
            .unwrap_err();
        assert!(!err.is_foreign());
        assert!(matches!(err, ModelError::Schema(_)));
    }
}
