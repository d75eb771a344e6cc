use super::aggregate::{ContentItem, ContentItemId, ValuePatch};
use super::error::RegistryError;
use crate::shared::i18n::Locale;

/// Items of one section of a page, in collection order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup<'a> {
    pub section: &'a str,
    pub items: Vec<&'a ContentItem>,
}

/// The full set of content items, without any persistence.
///
/// Mutations return the next collection and leave `self` untouched, so a
/// caller can persist first and commit only on success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentCollection {
    items: Vec<ContentItem>,
}

impl ContentCollection {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<ContentItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &ContentItemId) -> Option<&ContentItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn by_page(&self, page: &str) -> Vec<&ContentItem> {
        self.items.iter().filter(|item| item.page == page).collect()
    }

    /// First item matching the classifiers, projected to a string.
    /// Empty when nothing matches.
    pub fn read_value(
        &self,
        page: &str,
        section: &str,
        field: &str,
        locale: Option<Locale>,
    ) -> String {
        self.items
            .iter()
            .find(|item| item.matches(page, section, field))
            .map(|item| item.value.resolve(locale))
            .unwrap_or_default()
    }

    /// Sections of a page in first-appearance order
    pub fn group_by_section(&self, page: &str) -> Vec<SectionGroup<'_>> {
        let mut groups: Vec<SectionGroup<'_>> = Vec::new();
        for item in self.items.iter().filter(|item| item.page == page) {
            match groups.iter_mut().find(|g| g.section == item.section) {
                Some(group) => group.items.push(item),
                None => groups.push(SectionGroup {
                    section: &item.section,
                    items: vec![item],
                }),
            }
        }
        groups
    }

    /// Distinct page names in first-appearance order
    pub fn pages(&self) -> Vec<&str> {
        let mut pages: Vec<&str> = Vec::new();
        for item in &self.items {
            if !pages.contains(&item.page.as_str()) {
                pages.push(&item.page);
            }
        }
        pages
    }

    pub fn with_added(&self, item: ContentItem) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// Patches every item carrying the id
    pub fn with_updated(&self, id: &ContentItemId, patch: &ValuePatch) -> Result<Self, RegistryError> {
        if self.find(id).is_none() {
            return Err(RegistryError::NotFound(id.clone()));
        }
        let mut items = self.items.clone();
        for item in items.iter_mut().filter(|item| &item.id == id) {
            item.apply(patch)
                .map_err(|expected| RegistryError::ShapeMismatch {
                    id: id.clone(),
                    expected,
                })?;
        }
        Ok(Self { items })
    }

    /// Removes every item carrying the id
    pub fn with_deleted(&self, id: &ContentItemId) -> Result<Self, RegistryError> {
        if self.find(id).is_none() {
            return Err(RegistryError::NotFound(id.clone()));
        }
        let items = self
            .items
            .iter()
            .filter(|item| &item.id != id)
            .cloned()
            .collect();
        Ok(Self { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::LocalizedText;

    fn text(page: &str, section: &str, field: &str) -> ContentItem {
        ContentItem::text(
            ContentItemId::seeded(page, section, field),
            page,
            section,
            field,
            field,
            LocalizedText::new(format!("{field}-ar"), format!("{field}-fr")),
        )
    }

    fn sample() -> ContentCollection {
        ContentCollection::new(vec![
            text("home", "hero", "title"),
            text("about", "history", "body"),
            text("home", "intro", "body"),
            text("home", "hero", "subtitle"),
        ])
    }

    #[test]
    fn groups_sections_in_first_appearance_order() {
        let collection = sample();
        let groups = collection.group_by_section("home");
        let sections: Vec<&str> = groups.iter().map(|g| g.section).collect();
        assert_eq!(sections, vec!["hero", "intro"]);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[0].items[1].field, "subtitle");
    }

    #[test]
    fn pages_are_distinct() {
        assert_eq!(sample().pages(), vec!["home", "about"]);
    }

    #[test]
    fn read_value_without_locale_on_text_is_empty() {
        let collection = sample();
        assert_eq!(collection.read_value("home", "hero", "title", None), "");
        assert_eq!(
            collection.read_value("home", "hero", "title", Some(Locale::Ar)),
            "title-ar"
        );
    }

    #[test]
    fn duplicate_ids_are_updated_and_deleted_together() {
        let id = ContentItemId::new("d");
        let dup = |ar: &str| {
            ContentItem::text(id.clone(), "home", "s", "f", "f", LocalizedText::new(ar, ar))
        };
        let collection = ContentCollection::new(vec![
            dup("1"),
            text("home", "hero", "title"),
            dup("2"),
        ]);

        let patch = ValuePatch::Text(crate::domain::common::LocalizedPatch::only(Locale::Ar, "Z"));
        let updated = collection.with_updated(&id, &patch).unwrap();
        let ar: Vec<String> = updated
            .items()
            .iter()
            .filter(|item| item.id == id)
            .map(|item| item.value.resolve(Some(Locale::Ar)))
            .collect();
        assert_eq!(ar, vec!["Z", "Z"]);

        let deleted = updated.with_deleted(&id).unwrap();
        assert_eq!(deleted.len(), 1);
        assert!(deleted.find(&id).is_none());
    }

    #[test]
    fn with_updated_leaves_source_untouched() {
        let collection = sample();
        let id = ContentItemId::seeded("home", "hero", "title");
        let patch = ValuePatch::Text(crate::domain::common::LocalizedPatch::only(Locale::Fr, "C"));
        let next = collection.with_updated(&id, &patch).unwrap();
        assert_eq!(collection, sample());
        assert_eq!(next.read_value("home", "hero", "title", Some(Locale::Fr)), "C");
    }
}
