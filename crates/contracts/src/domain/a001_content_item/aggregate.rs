use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, AggregateRoot, LocalizedPatch, LocalizedText};
use crate::shared::i18n::Locale;

// ============================================================================
// ID Type
// ============================================================================

/// Content item identifier, assigned by the caller.
///
/// Editor-created items use `{page}-{section}-{field}-{timestamp}`;
/// seed items use the stable `{page}-{section}-{field}` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentItemId(pub String);

impl ContentItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Stable id for seed content
    pub fn seeded(page: &str, section: &str, field: &str) -> Self {
        Self(format!("{}-{}-{}", page, section, field))
    }

    /// Fresh id for an item created from the editor
    pub fn generate(page: &str, section: &str, field: &str) -> Self {
        let timestamp = chrono::Utc::now().timestamp_millis();
        Self(format!("{}-{}-{}-{}", page, section, field, timestamp))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ContentItemId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Content item id cannot be empty".into());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl std::fmt::Display for ContentItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Value
// ============================================================================

/// The `type` tag of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Text,
    Image,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
        }
    }

    /// Dictionary key of the display name
    pub fn label_key(&self) -> &'static str {
        match self {
            ContentKind::Text => "admin.type.text",
            ContentKind::Image => "admin.type.image",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(ContentKind::Text),
            "image" => Some(ContentKind::Image),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value of a content item; the variant is the item's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentValue {
    Text(LocalizedText),
    /// URL or base64 data URL
    Image(String),
}

impl ContentValue {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentValue::Text(_) => ContentKind::Text,
            ContentValue::Image(_) => ContentKind::Image,
        }
    }

    /// Projection used by readers: image → its string; text → the requested
    /// locale, or empty when no locale is given.
    pub fn resolve(&self, locale: Option<Locale>) -> String {
        match (self, locale) {
            (ContentValue::Image(url), _) => url.clone(),
            (ContentValue::Text(text), Some(locale)) => text.get(locale).to_string(),
            (ContentValue::Text(_), None) => String::new(),
        }
    }
}

/// Change to the value of an existing item.
///
/// Wire form: `{"type":"text","value":{"fr":"…"}}` or `{"type":"image","value":"…"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ValuePatch {
    /// Merge onto the existing locale pair
    Text(LocalizedPatch),
    /// Replace the image string
    Image(String),
}

impl ValuePatch {
    pub fn kind(&self) -> ContentKind {
        match self {
            ValuePatch::Text(_) => ContentKind::Text,
            ValuePatch::Image(_) => ContentKind::Image,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// One editable unit of site text or image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContentItemRecord", into = "ContentItemRecord")]
pub struct ContentItem {
    pub id: ContentItemId,
    pub page: String,
    pub section: String,
    pub field: String,
    pub label: String,
    pub value: ContentValue,
}

impl ContentItem {
    pub fn text(
        id: ContentItemId,
        page: impl Into<String>,
        section: impl Into<String>,
        field: impl Into<String>,
        label: impl Into<String>,
        value: LocalizedText,
    ) -> Self {
        Self {
            id,
            page: page.into(),
            section: section.into(),
            field: field.into(),
            label: label.into(),
            value: ContentValue::Text(value),
        }
    }

    pub fn image(
        id: ContentItemId,
        page: impl Into<String>,
        section: impl Into<String>,
        field: impl Into<String>,
        label: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            page: page.into(),
            section: section.into(),
            field: field.into(),
            label: label.into(),
            value: ContentValue::Image(url.into()),
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.value.kind()
    }

    pub fn matches(&self, page: &str, section: &str, field: &str) -> bool {
        self.page == page && self.section == section && self.field == field
    }

    /// Apply a value patch; `Err` carries the kind the item expects when the
    /// patch has the other shape.
    pub fn apply(&mut self, patch: &ValuePatch) -> Result<(), ContentKind> {
        match (&mut self.value, patch) {
            (ContentValue::Text(text), ValuePatch::Text(p)) => {
                text.apply(p);
                Ok(())
            }
            (ContentValue::Image(url), ValuePatch::Image(new_url)) => {
                *url = new_url.clone();
                Ok(())
            }
            (value, _) => Err(value.kind()),
        }
    }
}

impl AggregateRoot for ContentItem {
    type Id = ContentItemId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "site_content"
    }

    fn element_name() -> &'static str {
        "content.element"
    }

    fn list_name() -> &'static str {
        "content.list"
    }
}

// ============================================================================
// Persisted shape
// ============================================================================

/// JSON shape of one stored item: `type` tag next to an untyped `value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentItemRecord {
    id: ContentItemId,
    #[serde(rename = "type")]
    kind: ContentKind,
    page: String,
    section: String,
    field: String,
    #[serde(default)]
    label: String,
    value: RecordValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RecordValue {
    Plain(String),
    Localized(LocalizedText),
}

impl TryFrom<ContentItemRecord> for ContentItem {
    type Error = String;

    fn try_from(r: ContentItemRecord) -> Result<Self, Self::Error> {
        let value = match (r.kind, r.value) {
            (ContentKind::Text, RecordValue::Localized(text)) => ContentValue::Text(text),
            (ContentKind::Image, RecordValue::Plain(url)) => ContentValue::Image(url),
            (kind, _) => {
                return Err(format!(
                    "value of item '{}' does not match its type '{}'",
                    r.id, kind
                ))
            }
        };
        Ok(ContentItem {
            id: r.id,
            page: r.page,
            section: r.section,
            field: r.field,
            label: r.label,
            value,
        })
    }
}

impl From<ContentItem> for ContentItemRecord {
    fn from(item: ContentItem) -> Self {
        let kind = item.kind();
        let value = match item.value {
            ContentValue::Text(text) => RecordValue::Localized(text),
            ContentValue::Image(url) => RecordValue::Plain(url),
        };
        Self {
            id: item.id,
            kind,
            page: item.page,
            section: item.section,
            field: item.field,
            label: item.label,
            value,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Flat form state of the content editor
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContentItemDto {
    pub id: Option<String>,
    pub kind: ContentKind,
    pub page: String,
    pub section: String,
    pub field: String,
    pub label: String,
    pub ar: String,
    pub fr: String,
    pub url: String,
}

impl ContentItemDto {
    /// Empty form pre-filled with a page
    pub fn for_page(page: &str) -> Self {
        Self {
            page: page.to_string(),
            ..Default::default()
        }
    }

    /// Only value changes are saved for an existing item, so its label and
    /// classifiers are fixed once it has an id
    pub fn is_locked(&self) -> bool {
        self.id.is_some()
    }

    /// Returns `false` and keeps the label when the item already exists
    pub fn set_label(&mut self, label: impl Into<String>) -> bool {
        if self.is_locked() {
            return false;
        }
        self.label = label.into();
        true
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.page.trim().is_empty() {
            return Err("Page is required".into());
        }
        if self.section.trim().is_empty() {
            return Err("Section is required".into());
        }
        if self.field.trim().is_empty() {
            return Err("Field is required".into());
        }
        Ok(())
    }

    /// Build a new item; a fresh id is generated when the form has none
    pub fn into_item(self) -> ContentItem {
        let page = self.page.trim().to_string();
        let section = self.section.trim().to_string();
        let field = self.field.trim().to_string();
        let id = self
            .id
            .as_deref()
            .and_then(|s| ContentItemId::from_string(s).ok())
            .unwrap_or_else(|| ContentItemId::generate(&page, &section, &field));
        let value = match self.kind {
            ContentKind::Text => ContentValue::Text(LocalizedText::new(self.ar, self.fr)),
            ContentKind::Image => ContentValue::Image(self.url),
        };
        ContentItem {
            id,
            page,
            section,
            field,
            label: self.label,
            value,
        }
    }

    /// Value change for an existing item: a full locale pair or a new image string
    pub fn to_patch(&self) -> ValuePatch {
        match self.kind {
            ContentKind::Text => ValuePatch::Text(LocalizedPatch::full(LocalizedText::new(
                self.ar.clone(),
                self.fr.clone(),
            ))),
            ContentKind::Image => ValuePatch::Image(self.url.clone()),
        }
    }
}

impl From<&ContentItem> for ContentItemDto {
    fn from(item: &ContentItem) -> Self {
        let (ar, fr, url) = match &item.value {
            ContentValue::Text(text) => (text.ar.clone(), text.fr.clone(), String::new()),
            ContentValue::Image(url) => (String::new(), String::new(), url.clone()),
        };
        Self {
            id: Some(item.id.as_string()),
            kind: item.kind(),
            page: item.page.clone(),
            section: item.section.clone(),
            field: item.field.clone(),
            label: item.label.clone(),
            ar,
            fr,
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title() -> ContentItem {
        ContentItem::text(
            ContentItemId::seeded("home", "hero", "title"),
            "home",
            "hero",
            "title",
            "Hero title",
            LocalizedText::new("A", "B"),
        )
    }

    #[test]
    fn text_item_serializes_with_type_tag() {
        let json = serde_json::to_value(title()).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["id"], "home-hero-title");
        assert_eq!(json["value"]["ar"], "A");
        assert_eq!(json["value"]["fr"], "B");
    }

    #[test]
    fn image_item_value_is_plain_string() {
        let item = ContentItem::image(
            ContentItemId::new("home-hero-image"),
            "home",
            "hero",
            "image",
            "Hero image",
            "/static/img/hero.jpg",
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["value"], "/static/img/hero.jpg");
    }

    #[test]
    fn rejects_value_that_contradicts_type() {
        let raw = r#"{"id":"x","type":"image","page":"home","section":"s","field":"f",
                      "label":"l","value":{"ar":"A","fr":"B"}}"#;
        let err = serde_json::from_str::<ContentItem>(raw).unwrap_err();
        assert!(err.to_string().contains("does not match"));

        let raw = r#"{"id":"y","type":"text","page":"home","section":"s","field":"f",
                      "label":"l","value":"plain"}"#;
        assert!(serde_json::from_str::<ContentItem>(raw).is_err());
    }

    #[test]
    fn missing_label_defaults_to_empty() {
        let raw = r#"{"id":"x","type":"image","page":"p","section":"s","field":"f","value":"u"}"#;
        let item: ContentItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.label, "");
    }

    #[test]
    fn apply_rejects_wrong_patch_shape() {
        let mut item = title();
        let err = item.apply(&ValuePatch::Image("x".into())).unwrap_err();
        assert_eq!(err, ContentKind::Text);
        assert_eq!(item, title());
    }

    #[test]
    fn value_patch_wire_form() {
        let patch: ValuePatch =
            serde_json::from_str(r#"{"type":"text","value":{"fr":"C"}}"#).unwrap();
        assert_eq!(patch, ValuePatch::Text(LocalizedPatch::only(Locale::Fr, "C")));
        let patch: ValuePatch = serde_json::from_str(r#"{"type":"image","value":"u"}"#).unwrap();
        assert_eq!(patch, ValuePatch::Image("u".into()));
    }

    #[test]
    fn dto_generates_id_for_new_item() {
        let dto = ContentItemDto {
            page: "about".into(),
            section: "history".into(),
            field: "body".into(),
            ar: "نص".into(),
            fr: "Texte".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        let item = dto.into_item();
        assert!(item.id.as_str().starts_with("about-history-body-"));
        assert_eq!(item.value.resolve(Some(Locale::Fr)), "Texte");
    }

    #[test]
    fn existing_item_label_is_fixed() {
        let mut dto = ContentItemDto::from(&title());
        assert!(dto.is_locked());
        assert!(!dto.set_label("Renamed"));
        assert_eq!(dto.label, "Hero title");

        // what the editor saves for an existing item carries no label
        let mut item = title();
        item.apply(&dto.to_patch()).unwrap();
        assert_eq!(item.label, "Hero title");

        let mut fresh = ContentItemDto::for_page("home");
        assert!(fresh.set_label("Intro"));
        assert_eq!(fresh.label, "Intro");
    }

    #[test]
    fn dto_requires_classifiers() {
        let dto = ContentItemDto::for_page("home");
        assert!(dto.validate().is_err());
    }
}
