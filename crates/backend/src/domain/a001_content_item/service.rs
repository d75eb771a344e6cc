use contracts::domain::a001_content_item::{
    codec, seed, ContentCollection, ContentItem, ContentItemId, RegistryError, ValuePatch,
};
use contracts::shared::i18n::Locale;
use once_cell::sync::OnceCell;
use std::future::Future;
use tokio::sync::{Mutex, MutexGuard};

use super::repository;

/// The in-memory registry. Every mutation holds the lock across
/// compute, save and commit, so writes are serialized.
static REGISTRY: OnceCell<Mutex<ContentCollection>> = OnceCell::new();

fn registry() -> Result<&'static Mutex<ContentCollection>, RegistryError> {
    REGISTRY
        .get()
        .ok_or_else(|| RegistryError::Storage("content registry is not initialized".into()))
}

/// Load the stored registry, seeding the default content when none exists.
/// Returns the number of items.
pub async fn initialize() -> anyhow::Result<usize> {
    let collection = match repository::load().await? {
        Some(items) => {
            tracing::info!("Loaded {} content items", items.len());
            ContentCollection::new(items)
        }
        None => {
            let items = seed::default_content();
            repository::save(&items).await?;
            tracing::info!("Seeded {} default content items", items.len());
            ContentCollection::new(items)
        }
    };
    let count = collection.len();
    REGISTRY
        .set(Mutex::new(collection))
        .map_err(|_| anyhow::anyhow!("Content registry already initialized"))?;
    Ok(count)
}

async fn commit(
    guard: &mut MutexGuard<'_, ContentCollection>,
    next: ContentCollection,
) -> Result<(), RegistryError> {
    commit_with(&mut **guard, next, repository::save_blob).await
}

/// Encode `next`, hand it to `store` and replace `current` only when the
/// store accepted it
async fn commit_with<F, Fut>(
    current: &mut ContentCollection,
    next: ContentCollection,
    store: F,
) -> Result<(), RegistryError>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<(), RegistryError>>,
{
    let blob = codec::encode(next.items())?;
    store(blob).await?;
    *current = next;
    Ok(())
}

pub async fn list_all() -> Result<Vec<ContentItem>, RegistryError> {
    Ok(registry()?.lock().await.items().to_vec())
}

pub async fn list_by_page(page: &str) -> Result<Vec<ContentItem>, RegistryError> {
    let guard = registry()?.lock().await;
    Ok(guard.by_page(page).into_iter().cloned().collect())
}

pub async fn get_by_id(id: &ContentItemId) -> Result<Option<ContentItem>, RegistryError> {
    Ok(registry()?.lock().await.find(id).cloned())
}

pub async fn read_value(
    page: &str,
    section: &str,
    field: &str,
    locale: Option<Locale>,
) -> Result<String, RegistryError> {
    Ok(registry()?
        .lock()
        .await
        .read_value(page, section, field, locale))
}

pub async fn add(item: ContentItem) -> Result<ContentItemId, RegistryError> {
    let mut guard = registry()?.lock().await;
    let id = item.id.clone();
    let next = guard.with_added(item);
    commit(&mut guard, next).await?;
    tracing::info!("Added content item {}", id);
    Ok(id)
}

pub async fn update(id: &ContentItemId, patch: &ValuePatch) -> Result<(), RegistryError> {
    let mut guard = registry()?.lock().await;
    let next = guard.with_updated(id, patch)?;
    commit(&mut guard, next).await?;
    tracing::info!("Updated content item {}", id);
    Ok(())
}

pub async fn delete(id: &ContentItemId) -> Result<(), RegistryError> {
    let mut guard = registry()?.lock().await;
    let next = guard.with_deleted(id)?;
    commit(&mut guard, next).await?;
    tracing::info!("Deleted content item {}", id);
    Ok(())
}

/// Replace the whole collection; returns the new item count
pub async fn replace_all(items: Vec<ContentItem>) -> Result<usize, RegistryError> {
    let mut guard = registry()?.lock().await;
    let next = ContentCollection::new(items);
    let count = next.len();
    commit(&mut guard, next).await?;
    tracing::info!("Replaced content registry with {} items", count);
    Ok(count)
}

pub async fn reset_to_defaults() -> Result<usize, RegistryError> {
    replace_all(seed::default_content()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ContentCollection {
        ContentCollection::new(seed::default_content())
    }

    #[tokio::test]
    async fn rejected_save_keeps_current_collection() {
        let mut current = defaults();
        let id = ContentItemId::new("home-hero-title");
        let next = current.with_deleted(&id).unwrap();

        let err = commit_with(&mut current, next, |_blob| async {
            Err(RegistryError::Storage("attempt to write a readonly database".into()))
        })
        .await
        .unwrap_err();

        assert!(matches!(err, RegistryError::Storage(_)));
        assert_eq!(current, defaults());
        assert!(current.find(&id).is_some());
    }

    #[tokio::test]
    async fn accepted_save_commits_what_was_stored() {
        let mut current = defaults();
        let id = ContentItemId::new("home-hero-title");
        let next = current.with_deleted(&id).unwrap();

        let mut stored = None;
        commit_with(&mut current, next, |blob| {
            stored = Some(blob);
            async { Ok(()) }
        })
        .await
        .unwrap();

        assert!(current.find(&id).is_none());
        let stored = codec::decode(&stored.unwrap()).unwrap();
        assert_eq!(stored, current.items());
    }
}
