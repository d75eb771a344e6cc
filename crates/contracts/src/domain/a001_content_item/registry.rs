use super::aggregate::{ContentItem, ContentItemId, ValuePatch};
use super::collection::{ContentCollection, SectionGroup};
use super::error::RegistryError;
use super::seed;
use super::store::ContentStore;
use crate::shared::i18n::Locale;

/// Registry of every content item of the site.
///
/// Loads once from its store, serves reads from memory and writes the whole
/// collection back on every mutation. A mutation is committed in memory only
/// after the store accepted it. Assumes a single writer.
pub struct ContentRegistry<S: ContentStore> {
    store: S,
    collection: ContentCollection,
}

impl<S: ContentStore> ContentRegistry<S> {
    /// Load the stored collection, seeding and persisting the default content
    /// when the store is empty.
    pub fn initialize(mut store: S) -> Result<Self, RegistryError> {
        let collection = match store.load()? {
            Some(items) => ContentCollection::new(items),
            None => {
                let items = seed::default_content();
                store.save(&items)?;
                ContentCollection::new(items)
            }
        };
        Ok(Self { store, collection })
    }

    pub fn list_all(&self) -> &[ContentItem] {
        self.collection.items()
    }

    pub fn collection(&self) -> &ContentCollection {
        &self.collection
    }

    pub fn by_page(&self, page: &str) -> Vec<&ContentItem> {
        self.collection.by_page(page)
    }

    pub fn find(&self, id: &ContentItemId) -> Option<&ContentItem> {
        self.collection.find(id)
    }

    pub fn read_value(
        &self,
        page: &str,
        section: &str,
        field: &str,
        locale: Option<Locale>,
    ) -> String {
        self.collection.read_value(page, section, field, locale)
    }

    pub fn group_by_section(&self, page: &str) -> Vec<SectionGroup<'_>> {
        self.collection.group_by_section(page)
    }

    pub fn pages(&self) -> Vec<&str> {
        self.collection.pages()
    }

    /// Append an item. Id uniqueness is the caller's responsibility.
    pub fn add(&mut self, item: ContentItem) -> Result<(), RegistryError> {
        let next = self.collection.with_added(item);
        self.commit(next)
    }

    pub fn update(&mut self, id: &ContentItemId, patch: &ValuePatch) -> Result<(), RegistryError> {
        let next = self.collection.with_updated(id, patch)?;
        self.commit(next)
    }

    pub fn delete(&mut self, id: &ContentItemId) -> Result<(), RegistryError> {
        let next = self.collection.with_deleted(id)?;
        self.commit(next)
    }

    /// Replace the whole collection
    pub fn reset(&mut self, items: Vec<ContentItem>) -> Result<(), RegistryError> {
        self.commit(ContentCollection::new(items))
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), RegistryError> {
        self.reset(seed::default_content())
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn commit(&mut self, next: ContentCollection) -> Result<(), RegistryError> {
        self.store.save(next.items())?;
        self.collection = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_content_item::store::InMemoryStore;
    use crate::domain::common::{LocalizedPatch, LocalizedText};

    fn item(id: &str, page: &str, ar: &str, fr: &str) -> ContentItem {
        ContentItem::text(
            ContentItemId::new(id),
            page,
            "main",
            id,
            id,
            LocalizedText::new(ar, fr),
        )
    }

    fn registry_with(items: Vec<ContentItem>) -> ContentRegistry<InMemoryStore> {
        let mut store = InMemoryStore::new();
        store.save(&items).unwrap();
        ContentRegistry::initialize(store).unwrap()
    }

    fn ids(registry: &ContentRegistry<InMemoryStore>) -> Vec<String> {
        registry.list_all().iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn seeds_empty_storage_and_persists_immediately() {
        let registry = ContentRegistry::initialize(InMemoryStore::new()).unwrap();
        assert!(!registry.list_all().is_empty());
        for page in seed::KNOWN_PAGES {
            assert!(!registry.by_page(page).is_empty(), "no seed item for {page}");
        }
        let store = registry.into_store();
        assert_eq!(store.writes(), 1);
        assert!(store.blob().is_some());
    }

    #[test]
    fn stored_collection_is_not_reseeded() {
        let registry = registry_with(vec![item("a", "about", "A", "B")]);
        assert_eq!(ids(&registry), vec!["a"]);
    }

    #[test]
    fn corrupt_blob_is_reported() {
        let result = ContentRegistry::initialize(InMemoryStore::with_blob("not json"));
        assert!(matches!(result, Err(RegistryError::CorruptData(_))));
    }

    #[test]
    fn seed_write_failure_is_reported() {
        let mut store = InMemoryStore::new();
        store.fail_writes(true);
        let result = ContentRegistry::initialize(store);
        assert!(matches!(result, Err(RegistryError::Storage(_))));
    }

    #[test]
    fn read_by_page_is_idempotent() {
        let registry = ContentRegistry::initialize(InMemoryStore::new()).unwrap();
        let first: Vec<ContentItem> = registry.by_page("home").into_iter().cloned().collect();
        let second: Vec<ContentItem> = registry.by_page("home").into_iter().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn added_item_survives_reload() {
        let mut registry = ContentRegistry::initialize(InMemoryStore::new()).unwrap();
        let added = item("about-history-body-1700000000000", "about", "تاريخ", "Histoire");
        registry.add(added.clone()).unwrap();

        let reloaded = ContentRegistry::initialize(registry.into_store()).unwrap();
        assert_eq!(reloaded.find(&added.id), Some(&added));
    }

    #[test]
    fn update_merges_single_locale() {
        let mut registry = registry_with(vec![item("x", "home", "A", "B")]);
        let id = ContentItemId::new("x");
        registry
            .update(&id, &ValuePatch::Text(LocalizedPatch::only(Locale::Fr, "C")))
            .unwrap();
        assert_eq!(registry.read_value("home", "main", "x", Some(Locale::Ar)), "A");
        assert_eq!(registry.read_value("home", "main", "x", Some(Locale::Fr)), "C");

        let reloaded = ContentRegistry::initialize(registry.into_store()).unwrap();
        assert_eq!(reloaded.read_value("home", "main", "x", Some(Locale::Fr)), "C");
    }

    #[test]
    fn update_replaces_image() {
        let mut registry = registry_with(vec![ContentItem::image(
            ContentItemId::new("logo"),
            "home",
            "header",
            "logo",
            "Logo",
            "/old.png",
        )]);
        registry
            .update(&ContentItemId::new("logo"), &ValuePatch::Image("data:image/png;base64,AA==".into()))
            .unwrap();
        assert_eq!(
            registry.read_value("home", "header", "logo", None),
            "data:image/png;base64,AA=="
        );
    }

    #[test]
    fn update_with_wrong_shape_is_rejected() {
        let mut registry = registry_with(vec![item("x", "home", "A", "B")]);
        let before = registry.list_all().to_vec();
        let err = registry
            .update(&ContentItemId::new("x"), &ValuePatch::Image("u".into()))
            .unwrap_err();
        assert!(matches!(err, RegistryError::ShapeMismatch { .. }));
        assert_eq!(registry.list_all(), before.as_slice());
    }

    #[test]
    fn delete_is_exact() {
        let mut registry = registry_with(vec![
            item("a", "home", "1", "1"),
            item("b", "home", "2", "2"),
            item("c", "about", "3", "3"),
        ]);
        let before = registry.list_all().to_vec();
        registry.delete(&ContentItemId::new("b")).unwrap();
        assert_eq!(ids(&registry), vec!["a", "c"]);
        assert_eq!(registry.list_all()[0], before[0]);
        assert_eq!(registry.list_all()[1], before[2]);
    }

    #[test]
    fn unknown_id_is_not_found_and_changes_nothing() {
        let mut registry = registry_with(vec![item("a", "home", "1", "1")]);
        let before = registry.list_all().to_vec();
        let missing = ContentItemId::new("missing");

        let update = registry.update(&missing, &ValuePatch::Text(LocalizedPatch::only(Locale::Ar, "z")));
        assert_eq!(update, Err(RegistryError::NotFound(missing.clone())));
        assert_eq!(registry.delete(&missing), Err(RegistryError::NotFound(missing)));
        assert_eq!(registry.list_all(), before.as_slice());
        // one write from the test setup only
        assert_eq!(registry.into_store().writes(), 1);
    }

    #[test]
    fn failed_save_keeps_previous_state() {
        let mut registry = registry_with(vec![item("a", "home", "1", "1")]);
        let mut store = registry.into_store();
        store.fail_writes(true);
        registry = ContentRegistry::initialize(store).unwrap();

        let err = registry.add(item("b", "home", "2", "2")).unwrap_err();
        assert!(matches!(err, RegistryError::Storage(_)));
        assert!(registry.delete(&ContentItemId::new("a")).is_err());
        assert_eq!(ids(&registry), vec!["a"]);
    }

    #[test]
    fn filter_by_page() {
        let registry = registry_with(vec![
            item("a", "home", "1", "1"),
            item("b", "about", "2", "2"),
            item("c", "about", "3", "3"),
        ]);
        let about = registry.by_page("about");
        assert_eq!(about.len(), 2);
        assert!(about.iter().all(|i| i.page == "about"));
        assert!(registry.by_page("nonexistent-page").is_empty());
    }

    #[test]
    fn read_value_of_missing_item_is_empty() {
        let registry = registry_with(vec![item("a", "home", "1", "1")]);
        assert_eq!(registry.read_value("home", "main", "nope", Some(Locale::Fr)), "");
    }

    #[test]
    fn reset_to_defaults_restores_seed() {
        let mut registry = registry_with(vec![item("a", "home", "1", "1")]);
        registry.reset_to_defaults().unwrap();
        assert_eq!(registry.list_all(), seed::default_content().as_slice());
    }
}
