use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_content_item::{ContentItem, ContentItemId, RegistryError, ValuePatch};
use contracts::domain::common::AggregateId;
use contracts::shared::i18n::Locale;
use serde::Deserialize;
use serde_json::json;

use crate::domain::a001_content_item::service;

/// HTTP status for a failed registry operation
pub fn status_for(e: &RegistryError) -> StatusCode {
    match e {
        RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
        RegistryError::ShapeMismatch { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        RegistryError::Storage(_) | RegistryError::CorruptData(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn reject(e: RegistryError) -> StatusCode {
    let status = status_for(&e);
    if status.is_server_error() {
        tracing::error!("Content registry failure: {}", e);
    } else {
        tracing::warn!("Content registry rejected request: {}", e);
    }
    status
}

fn parse_id(id: &str) -> Result<ContentItemId, StatusCode> {
    ContentItemId::from_string(id).map_err(|_| StatusCode::BAD_REQUEST)
}

/// GET /api/content
pub async fn list_all() -> Result<Json<Vec<ContentItem>>, StatusCode> {
    service::list_all().await.map(Json).map_err(reject)
}

/// GET /api/content/page/:page
pub async fn list_by_page(Path(page): Path<String>) -> Result<Json<Vec<ContentItem>>, StatusCode> {
    service::list_by_page(&page).await.map(Json).map_err(reject)
}

#[derive(Debug, Deserialize)]
pub struct ValueQuery {
    pub page: String,
    pub section: String,
    pub field: String,
    pub locale: Option<String>,
}

/// GET /api/content/value?page=&section=&field=&locale=
pub async fn read_value(
    Query(q): Query<ValueQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let locale = match q.locale.as_deref() {
        None | Some("") => None,
        Some(code) => Some(Locale::from_code(code).ok_or(StatusCode::BAD_REQUEST)?),
    };
    let value = service::read_value(&q.page, &q.section, &q.field, locale)
        .await
        .map_err(reject)?;
    Ok(Json(json!({ "value": value })))
}

/// GET /api/content/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<ContentItem>, StatusCode> {
    let id = parse_id(&id)?;
    match service::get_by_id(&id).await.map_err(reject)? {
        Some(item) => Ok(Json(item)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// POST /api/content
pub async fn create(
    Json(item): Json<ContentItem>,
) -> Result<(StatusCode, Json<serde_json::Value>), StatusCode> {
    let id = service::add(item).await.map_err(reject)?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /api/content/:id
pub async fn update(
    Path(id): Path<String>,
    Json(patch): Json<ValuePatch>,
) -> Result<StatusCode, StatusCode> {
    let id = parse_id(&id)?;
    service::update(&id, &patch).await.map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/content/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, StatusCode> {
    let id = parse_id(&id)?;
    service::delete(&id).await.map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/content
pub async fn replace_all(
    Json(items): Json<Vec<ContentItem>>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let count = service::replace_all(items).await.map_err(reject)?;
    Ok(Json(json!({ "count": count })))
}

/// POST /api/content/reset-defaults
pub async fn reset_defaults() -> Result<Json<serde_json::Value>, StatusCode> {
    let count = service::reset_to_defaults().await.map_err(reject)?;
    Ok(Json(json!({ "count": count })))
}
