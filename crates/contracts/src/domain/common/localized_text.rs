use serde::{Deserialize, Serialize};

use crate::shared::i18n::Locale;

/// A pair of parallel Arabic and French strings for the same piece of text.
///
/// A missing key in stored JSON decodes as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub ar: String,
    #[serde(default)]
    pub fr: String,
}

impl LocalizedText {
    pub fn new(ar: impl Into<String>, fr: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            fr: fr.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ar => &self.ar,
            Locale::Fr => &self.fr,
        }
    }

    /// Merge a partial patch; fields absent from the patch are left untouched.
    pub fn apply(&mut self, patch: &LocalizedPatch) {
        if let Some(ar) = &patch.ar {
            self.ar = ar.clone();
        }
        if let Some(fr) = &patch.fr {
            self.fr = fr.clone();
        }
    }
}

/// Partial update of a [`LocalizedText`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fr: Option<String>,
}

impl LocalizedPatch {
    pub fn only(locale: Locale, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match locale {
            Locale::Ar => Self {
                ar: value,
                fr: None,
            },
            Locale::Fr => Self {
                ar: None,
                fr: value,
            },
        }
    }

    pub fn full(text: LocalizedText) -> Self {
        Self {
            ar: Some(text.ar),
            fr: Some(text.fr),
        }
    }
}
