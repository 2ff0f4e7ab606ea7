//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/suggest", post(handlers::suggest))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::repository::Node;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn router_for(server: &MockServer) -> Router {
        let mut settings = Settings::default();
        settings.search.endpoint = server.uri();
        settings.search.index = "content".to_string();
        settings
            .repository
            .nodes
            .push(Node::new("home", "/sites/example"));

        create_router(AppState::new(settings).unwrap())
    }

    async fn post_suggest(router: Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/suggest")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_suggest_endpoint_returns_both_lists() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/content/_search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "aggregations": {
                    "autocomplete": {"buckets": [{"key": "cat"}, {"key": "car"}]}
                },
                "suggest": {"suggestions": [{"options": [{"text": "catalog"}]}]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = post_suggest(
            router_for(&server),
            json!({"contextNodeIdentifier": "home", "term": "cat"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["completions"], json!(["cat", "car"]));
        assert_eq!(body["suggestions"], json!([{"text": "catalog"}]));
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_suggest_endpoint_rejects_non_string_term() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (status, body) = post_suggest(
            router_for(&server),
            json!({"contextNodeIdentifier": "home", "term": 7}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["errors"], json!(["term has to be a string"]));
        assert_eq!(body["completions"], json!([]));
        assert_eq!(body["suggestions"], json!([]));
    }

    #[tokio::test]
    async fn test_suggest_endpoint_degrades_on_backend_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (status, body) = post_suggest(
            router_for(&server),
            json!({"contextNodeIdentifier": "home", "term": "cat"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["errors"], json!(["Could not execute query"]));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = MockServer::start().await;
        let response = router_for(&server)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
