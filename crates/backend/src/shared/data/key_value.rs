//! Key/value slots holding whole serialized documents, one row per key.

use anyhow::Result;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{EntityTrait, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sys_storage")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub value: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Read the document stored under `key`
pub async fn get(db: &DatabaseConnection, key: &str) -> Result<Option<String>> {
    let row = Entity::find_by_id(key.to_string()).one(db).await?;
    Ok(row.map(|m| m.value))
}

/// Insert or overwrite the document stored under `key`
pub async fn put(db: &DatabaseConnection, key: &str, value: &str) -> Result<()> {
    let active = ActiveModel {
        key: Set(key.to_string()),
        value: Set(value.to_string()),
        updated_at: Set(Utc::now().to_rfc3339()),
    };
    Entity::insert(active)
        .on_conflict(
            OnConflict::column(Column::Key)
                .update_columns([Column::Value, Column::UpdatedAt])
                .to_owned(),
        )
        .exec(db)
        .await?;
    tracing::debug!("Stored {} bytes under key {}", value.len(), key);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;

    fn temp_db_path(name: &str) -> std::path::PathBuf {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        std::env::temp_dir().join(format!("{}-{}-{}.db", name, std::process::id(), nanos))
    }

    #[tokio::test]
    async fn put_then_get_overwrites_slot() {
        let path = temp_db_path("key-value");
        let conn = db::connect(&path).await.unwrap();
        db::ensure_schema(&conn).await.unwrap();

        assert_eq!(get(&conn, "site_content").await.unwrap(), None);
        put(&conn, "site_content", "[]").await.unwrap();
        put(&conn, "site_content", "[1]").await.unwrap();
        assert_eq!(
            get(&conn, "site_content").await.unwrap().as_deref(),
            Some("[1]")
        );

        // bootstrap is idempotent
        db::ensure_schema(&conn).await.unwrap();
        drop(conn);
        let _ = std::fs::remove_file(&path);
    }
}
