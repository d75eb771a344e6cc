//! Localized site content.
//!
//! Every editable piece of text or image on the public site is a
//! [`ContentItem`](aggregate::ContentItem). The [`ContentRegistry`](registry::ContentRegistry)
//! owns the whole collection and persists it as one JSON array through a
//! [`ContentStore`](store::ContentStore) port.

pub mod aggregate;
pub mod codec;
pub mod collection;
pub mod error;
pub mod registry;
pub mod seed;
pub mod store;

pub use aggregate::{ContentItem, ContentItemDto, ContentItemId, ContentKind, ContentValue, ValuePatch};
pub use collection::ContentCollection;
pub use error::RegistryError;
pub use registry::ContentRegistry;
pub use store::{ContentStore, InMemoryStore};
