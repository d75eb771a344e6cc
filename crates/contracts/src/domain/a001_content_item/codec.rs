//! Serialized form of the registry: one JSON array of items.

use super::aggregate::ContentItem;
use super::error::RegistryError;

pub fn encode(items: &[ContentItem]) -> Result<String, RegistryError> {
    serde_json::to_string(items).map_err(RegistryError::storage)
}

pub fn decode(raw: &str) -> Result<Vec<ContentItem>, RegistryError> {
    serde_json::from_str(raw).map_err(|e| RegistryError::CorruptData(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_non_array() {
        let err = decode(r#"{"id":"x"}"#).unwrap_err();
        assert!(matches!(err, RegistryError::CorruptData(_)));
    }

    #[test]
    fn decode_rejects_truncated_json() {
        assert!(matches!(
            decode(r#"[{"id":"x","type":"text""#),
            Err(RegistryError::CorruptData(_))
        ));
    }

    #[test]
    fn decode_accepts_empty_array() {
        assert_eq!(decode("[]").unwrap(), Vec::new());
    }
}
