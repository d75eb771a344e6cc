use serde::{Deserialize, Serialize};

/// Site locales. Arabic is written right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    Fr,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::Fr => "fr",
        }
    }

    /// Accepts bare codes and region-qualified tags ("fr-FR", "ar_DZ").
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "ar" => Some(Locale::Ar),
            "fr" => Some(Locale::Fr),
            _ => None,
        }
    }

    /// Value for the HTML `dir` attribute.
    pub fn direction(&self) -> &'static str {
        match self {
            Locale::Ar => "rtl",
            Locale::Fr => "ltr",
        }
    }

    /// Name of the locale written in that locale.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::Ar => "العربية",
            Locale::Fr => "Français",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Locale::Ar => Locale::Fr,
            Locale::Fr => Locale::Ar,
        }
    }

    pub fn all() -> [Locale; 2] {
        [Locale::Ar, Locale::Fr]
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_region_tags() {
        assert_eq!(Locale::from_code("fr-FR"), Some(Locale::Fr));
        assert_eq!(Locale::from_code("AR_dz"), Some(Locale::Ar));
        assert_eq!(Locale::from_code("en"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::Fr).unwrap(), "\"fr\"");
    }
}
