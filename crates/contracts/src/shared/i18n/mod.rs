//! Locales and the static translation dictionary used by every screen.

pub mod dictionary;
pub mod locale;

pub use dictionary::{entry, translate, DictionaryEntry, DICTIONARY};
pub use locale::Locale;
