//! Content registry shared by every component.
//!
//! The registry lives in a local (non-`Send`) stored value; `revision` is
//! bumped after each committed mutation so readers re-render.

use crate::shared::storage::LocalStorageStore;
use contracts::domain::a001_content_item::{ContentItem, ContentRegistry, RegistryError};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

pub type SiteRegistry = ContentRegistry<LocalStorageStore>;

fn open_registry() -> Result<SiteRegistry, RegistryError> {
    ContentRegistry::initialize(LocalStorageStore::new(ContentItem::collection_name()))
}

#[derive(Clone, Copy)]
pub struct ContentContext {
    registry: StoredValue<Option<SiteRegistry>, LocalStorage>,
    pub revision: RwSignal<u64>,
    /// Set when the stored content could not be loaded
    pub load_error: RwSignal<Option<String>>,
}

impl ContentContext {
    pub fn new() -> Self {
        let (registry, load_error) = match open_registry() {
            Ok(registry) => {
                log::info!("Content registry loaded: {} items", registry.list_all().len());
                (Some(registry), None)
            }
            Err(e) => {
                log::error!("Content registry failed to load: {}", e);
                (None, Some(e.to_string()))
            }
        };
        Self {
            registry: StoredValue::new_local(registry),
            revision: RwSignal::new(0),
            load_error: RwSignal::new(load_error),
        }
    }

    /// Read from the registry, tracking `revision`. `None` while the registry
    /// is unavailable.
    pub fn read<R>(&self, f: impl FnOnce(&SiteRegistry) -> R) -> Option<R> {
        self.revision.track();
        self.registry.with_value(|slot| slot.as_ref().map(f))
    }

    /// Run a mutation; readers are notified only when it was persisted.
    pub fn mutate(
        &self,
        f: impl FnOnce(&mut SiteRegistry) -> Result<(), RegistryError>,
    ) -> Result<(), String> {
        let mut outcome = Err("content registry is not loaded".to_string());
        self.registry.update_value(|slot| {
            if let Some(registry) = slot.as_mut() {
                outcome = f(registry).map_err(|e| e.to_string());
            }
        });
        match &outcome {
            Ok(()) => self.revision.update(|r| *r += 1),
            Err(e) => log::warn!("Content mutation failed: {}", e),
        }
        outcome
    }

    /// Discard unreadable stored content and start again from the defaults
    pub fn recover(&self) {
        let store = LocalStorageStore::new(ContentItem::collection_name());
        if let Err(e) = store.clear() {
            self.load_error.set(Some(e.to_string()));
            return;
        }
        match open_registry() {
            Ok(registry) => {
                log::info!("Content registry restored from defaults");
                self.registry.set_value(Some(registry));
                self.load_error.set(None);
                self.revision.update(|r| *r += 1);
            }
            Err(e) => self.load_error.set(Some(e.to_string())),
        }
    }
}

impl Default for ContentContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_content() -> ContentContext {
    use_context::<ContentContext>().expect("ContentContext not found in context")
}
