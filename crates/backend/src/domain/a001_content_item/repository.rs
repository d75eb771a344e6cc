use contracts::domain::a001_content_item::{codec, ContentItem, RegistryError};
use contracts::domain::common::AggregateRoot;
use sea_orm::DatabaseConnection;

use crate::shared::data::db::get_connection;
use crate::shared::data::key_value;

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Storage key of the registry blob, the same key the browser uses
fn storage_key() -> &'static str {
    ContentItem::collection_name()
}

/// `Ok(None)` when the registry has never been saved
pub async fn load() -> Result<Option<Vec<ContentItem>>, RegistryError> {
    let raw = key_value::get(conn(), storage_key())
        .await
        .map_err(RegistryError::storage)?;
    raw.as_deref().map(codec::decode).transpose()
}

pub async fn save(items: &[ContentItem]) -> Result<(), RegistryError> {
    save_blob(codec::encode(items)?).await
}

/// Store an already encoded registry blob
pub async fn save_blob(blob: String) -> Result<(), RegistryError> {
    key_value::put(conn(), storage_key(), &blob)
        .await
        .map_err(RegistryError::storage)
}
