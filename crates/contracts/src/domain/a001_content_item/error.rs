use super::aggregate::{ContentItemId, ContentKind};

/// Outcome of a failed registry operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Mutation target does not exist; state is unchanged
    #[error("content item not found: {0}")]
    NotFound(ContentItemId),

    /// Patch shape does not match the item type; state is unchanged
    #[error("content item {id} holds a {expected} value")]
    ShapeMismatch {
        id: ContentItemId,
        expected: ContentKind,
    },

    /// Underlying storage unavailable or write rejected
    #[error("storage error: {0}")]
    Storage(String),

    /// Stored blob could not be decoded
    #[error("corrupt content data: {0}")]
    CorruptData(String),
}

impl RegistryError {
    pub fn storage(e: impl std::fmt::Display) -> Self {
        RegistryError::Storage(e.to_string())
    }
}
