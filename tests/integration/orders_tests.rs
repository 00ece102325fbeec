use axum::http::{Method, StatusCode};
use cafe_gateway::domain::Locale;
use serde_json::json;
use std::time::Duration;

use crate::common::{
    gateway, gateway_with, get, short_timeout_settings, start_json_backend, start_mock_backend,
    start_slow_backend, test_settings, unreachable_backend_url,
};

#[tokio::test]
async fn test_get_order_relays_backend_body() {
    let backend = start_json_backend(r#"{"id":42,"total":100}"#).await;
    let app = gateway(&backend.base_url());

    let (status, body) = get(&app, "/api/orders/42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 42, "total": 100 }));

    let request = backend.single_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/orders/42");
    assert_eq!(request.query, None);
}

#[tokio::test]
async fn test_get_order_keeps_nested_body_untouched() {
    let backend = start_json_backend(
        r#"{"id":"A-7","items":[{"name":"latte","qty":2,"price":4.5}],"note":null,"takeout":true}"#,
    )
    .await;
    let app = gateway(&backend.base_url());

    let (status, body) = get(&app, "/api/orders/A-7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": "A-7",
            "items": [{ "name": "latte", "qty": 2, "price": 4.5 }],
            "note": null,
            "takeout": true
        })
    );
}

#[tokio::test]
async fn test_get_order_encodes_id_as_one_segment() {
    let backend = start_json_backend("{}").await;
    let app = gateway(&backend.base_url());

    let (status, _) = get(&app, "/api/orders/a%20b").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(backend.single_request().path, "/api/orders/a%20b");
}

#[tokio::test]
async fn test_get_order_dot_segment_id_is_not_resolved() {
    let backend = start_json_backend(r#"{"id":1}"#).await;
    let app = gateway(&backend.base_url());

    for uri in ["/api/orders/%2e%2e", "/api/orders/%2E", "/api/orders/.."] {
        let (status, body) = get(&app, uri).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body, json!({ "error": "注文データの取得に失敗しました" }));
    }
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_get_order_backend_error_status() {
    let backend = start_mock_backend(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"detail":"boom"}"#.to_string(),
        )
    })
    .await;
    let app = gateway(&backend.base_url());

    let (status, body) = get(&app, "/api/orders/42").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "注文データの取得に失敗しました" }));
}

#[tokio::test]
async fn test_get_order_not_found_still_collapses_to_500() {
    let backend =
        start_mock_backend(|_| (StatusCode::NOT_FOUND, r#"{"detail":"missing"}"#.to_string()))
            .await;
    let app = gateway(&backend.base_url());

    let (status, body) = get(&app, "/api/orders/999").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "注文データの取得に失敗しました" }));
}

#[tokio::test]
async fn test_get_order_backend_unreachable() {
    let app = gateway(&unreachable_backend_url().await);

    let (status, body) = get(&app, "/api/orders/42").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "注文データの取得に失敗しました" }));
}

#[tokio::test]
async fn test_get_order_undecodable_body() {
    let backend = start_mock_backend(|_| (StatusCode::OK, "<html>oops</html>".to_string())).await;
    let app = gateway(&backend.base_url());

    let (status, body) = get(&app, "/api/orders/42").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "注文データの取得に失敗しました" }));
}

#[tokio::test]
async fn test_get_order_english_locale() {
    let backend = start_mock_backend(|_| (StatusCode::BAD_GATEWAY, String::new())).await;
    let mut settings = test_settings(&backend.base_url());
    settings.app.locale = Locale::En;
    let app = gateway_with(settings);

    let (status, body) = get(&app, "/api/orders/42").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch order data" }));
}

#[tokio::test]
async fn test_get_order_propagates_status_when_enabled() {
    let backend = start_mock_backend(|_| (StatusCode::NOT_FOUND, String::new())).await;
    let mut settings = test_settings(&backend.base_url());
    settings.app.propagate_upstream_status = true;
    let app = gateway_with(settings);

    let (status, body) = get(&app, "/api/orders/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "注文データの取得に失敗しました" }));
}

#[tokio::test]
async fn test_unreachable_backend_is_bad_gateway_when_propagating() {
    let mut settings = test_settings(&unreachable_backend_url().await);
    settings.app.propagate_upstream_status = true;
    let app = gateway_with(settings);

    let (status, _) = get(&app, "/api/orders/42").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_get_order_undecodable_path_is_bad_request() {
    let backend = start_json_backend(r#"{"id":1}"#).await;
    let app = gateway(&backend.base_url());

    let (status, body) = get(&app, "/api/orders/%FF").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "リクエストパスが正しくありません" }));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_get_order_timeout_collapses_to_500_by_default() {
    let base_url = start_slow_backend(Duration::from_secs(3)).await;
    let app = gateway_with(short_timeout_settings(&base_url));

    let (status, body) = get(&app, "/api/orders/42").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "注文データの取得に失敗しました" }));
}

#[tokio::test]
async fn test_get_order_timeout_is_gateway_timeout_when_propagating() {
    let base_url = start_slow_backend(Duration::from_secs(3)).await;
    let mut settings = short_timeout_settings(&base_url);
    settings.app.propagate_upstream_status = true;
    let app = gateway_with(settings);

    let (status, body) = get(&app, "/api/orders/42").await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body, json!({ "error": "注文データの取得に失敗しました" }));
}
