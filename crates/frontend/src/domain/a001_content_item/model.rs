//! REST client for the backend content registry

use crate::shared::api_utils::api_url;
use contracts::domain::a001_content_item::ContentItem;
use gloo_net::http::Request;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: usize,
}

/// GET /api/content
pub async fn fetch_all() -> Result<Vec<ContentItem>, String> {
    let response = Request::get(&api_url("/api/content"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

/// PUT /api/content: replaces the server collection, returns its size
pub async fn replace_all(items: &[ContentItem]) -> Result<usize, String> {
    let response = Request::put(&api_url("/api/content"))
        .json(&items)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let body: CountResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(body.count)
}
