use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// API routes of the application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Content registry
        .route(
            "/api/content",
            get(handlers::a001_content_item::list_all)
                .post(handlers::a001_content_item::create)
                .put(handlers::a001_content_item::replace_all),
        )
        .route(
            "/api/content/page/:page",
            get(handlers::a001_content_item::list_by_page),
        )
        .route(
            "/api/content/value",
            get(handlers::a001_content_item::read_value),
        )
        .route(
            "/api/content/reset-defaults",
            post(handlers::a001_content_item::reset_defaults),
        )
        .route(
            "/api/content/:id",
            get(handlers::a001_content_item::get_by_id)
                .put(handlers::a001_content_item::update)
                .delete(handlers::a001_content_item::delete),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_content_item::service;
    use crate::shared::data::db;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use contracts::domain::a001_content_item::ContentItem;
    use tower::ServiceExt;

    async fn send(method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("content-type", "application/json");
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_default())
            .unwrap();
        let response = configure_routes().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    // One test owns the process-wide database and registry.
    #[tokio::test]
    async fn content_api_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "content-api-{}-{}.db",
            std::process::id(),
            chrono::Utc::now().timestamp_millis()
        ));
        db::initialize_database(&path).await.unwrap();
        let seeded = service::initialize().await.unwrap();
        assert!(seeded > 0);

        let (status, body) = send(Method::GET, "/api/content/page/home", None).await;
        assert_eq!(status, StatusCode::OK);
        let home: Vec<ContentItem> = serde_json::from_str(&body).unwrap();
        assert!(!home.is_empty());
        assert!(home.iter().all(|i| i.page == "home"));

        let (status, body) = send(Method::GET, "/api/content/page/nonexistent-page", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");

        let (status, _) = send(
            Method::PUT,
            "/api/content/home-hero-title",
            Some(r#"{"type":"text","value":{"fr":"Bienvenue"}}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(
            Method::GET,
            "/api/content/value?page=home&section=hero&field=title&locale=fr",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"value":"Bienvenue"}"#);

        let (status, _) = send(
            Method::GET,
            "/api/content/value?page=home&section=hero&field=title&locale=en",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            Method::PUT,
            "/api/content/home-hero-title",
            Some(r#"{"type":"image","value":"/x.png"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let new_item = r#"{"id":"about-team-photo-1","type":"image","page":"about",
            "section":"team","field":"photo","label":"Team","value":"/team.jpg"}"#;
        let (status, _) = send(Method::POST, "/api/content", Some(new_item)).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(Method::DELETE, "/api/content/about-team-photo-1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(Method::DELETE, "/api/content/about-team-photo-1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // persisted state matches memory
        let stored = crate::domain::a001_content_item::repository::load()
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, service::list_all().await.unwrap());

        let _ = std::fs::remove_file(&path);
    }
}
