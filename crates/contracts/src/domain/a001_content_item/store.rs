use super::aggregate::ContentItem;
use super::codec;
use super::error::RegistryError;

/// Persistence port of the content registry.
///
/// Implementations hold the whole collection under a single key.
pub trait ContentStore {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<Vec<ContentItem>>, RegistryError>;

    /// Replace the stored collection
    fn save(&mut self, items: &[ContentItem]) -> Result<(), RegistryError>;
}

/// Store kept in process memory, holding the encoded blob like a browser
/// storage slot would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    blob: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw stored blob
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            ..Self::default()
        }
    }

    /// Make every following `save` fail with a storage error
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// Number of successful saves
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ContentStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<ContentItem>>, RegistryError> {
        self.blob.as_deref().map(codec::decode).transpose()
    }

    fn save(&mut self, items: &[ContentItem]) -> Result<(), RegistryError> {
        if self.fail_writes {
            return Err(RegistryError::Storage("quota exceeded".into()));
        }
        self.blob = Some(codec::encode(items)?);
        self.writes += 1;
        Ok(())
    }
}
