//! `localStorage` adapter for the content registry.

use contracts::domain::a001_content_item::{codec, ContentItem, ContentStore, RegistryError};

fn storage() -> Result<web_sys::Storage, RegistryError> {
    let window = web_sys::window().ok_or_else(|| RegistryError::Storage("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| RegistryError::Storage(format!("{e:?}")))?
        .ok_or_else(|| RegistryError::Storage("localStorage is disabled".into()))
}

/// Registry store holding the whole collection under one `localStorage` key
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Drop the stored collection; the next initialize will seed again
    pub fn clear(&self) -> Result<(), RegistryError> {
        storage()?
            .remove_item(&self.key)
            .map_err(|e| RegistryError::Storage(format!("{e:?}")))
    }
}

impl ContentStore for LocalStorageStore {
    fn load(&self) -> Result<Option<Vec<ContentItem>>, RegistryError> {
        let raw = storage()?
            .get_item(&self.key)
            .map_err(|e| RegistryError::Storage(format!("{e:?}")))?;
        raw.as_deref().map(codec::decode).transpose()
    }

    fn save(&mut self, items: &[ContentItem]) -> Result<(), RegistryError> {
        let raw = codec::encode(items)?;
        // set_item throws QuotaExceededError when the origin is out of space
        storage()?
            .set_item(&self.key, &raw)
            .map_err(|e| RegistryError::Storage(format!("{e:?}")))
    }
}
