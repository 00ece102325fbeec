use axum::http::StatusCode;
use serde_json::json;

use crate::common::{gateway, get, start_json_backend, start_mock_backend};

#[tokio::test]
async fn test_daily_dashboard_forwards_target_date() {
    let backend = start_json_backend(r#"{"date":"2024-03-01","customer_count":57}"#).await;
    let app = gateway(&backend.base_url());

    let (status, body) = get(&app, "/api/dashboard/daily?date=2024-03-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "date": "2024-03-01", "customer_count": 57 }));

    let request = backend.single_request();
    assert_eq!(request.path, "/api/dashboard/daily");
    assert_eq!(request.query.as_deref(), Some("date=2024-03-01"));
}

#[tokio::test]
async fn test_weekly_and_monthly_dashboards() {
    let backend = start_json_backend(r#"{"orders":[]}"#).await;
    let app = gateway(&backend.base_url());

    let (weekly, _) = get(&app, "/api/dashboard/weekly").await;
    let (monthly, _) = get(&app, "/api/dashboard/monthly?date=2024-02-10").await;

    assert_eq!(weekly, StatusCode::OK);
    assert_eq!(monthly, StatusCode::OK);

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].path, "/api/dashboard/weekly");
    assert_eq!(requests[0].query, None);
    assert_eq!(requests[1].path, "/api/dashboard/monthly");
    assert_eq!(requests[1].query.as_deref(), Some("date=2024-02-10"));
}

#[tokio::test]
async fn test_dashboard_repeated_date_takes_first_value() {
    let backend = start_json_backend(r#"{"orders":[]}"#).await;
    let app = gateway(&backend.base_url());

    let (status, _) = get(&app, "/api/dashboard/daily?date=2024-03-01&date=2024-03-02").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        backend.single_request().query.as_deref(),
        Some("date=2024-03-01")
    );
}

#[tokio::test]
async fn test_unknown_dashboard_period() {
    let backend = start_json_backend("{}").await;
    let app = gateway(&backend.base_url());

    let (status, body) = get(&app, "/api/dashboard/yearly").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "error": "不明なダッシュボード期間です: yearly" })
    );
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_dashboard_invalid_date() {
    let backend = start_json_backend("{}").await;
    let app = gateway(&backend.base_url());

    let (status, body) = get(&app, "/api/dashboard/daily?date=2024-02-31").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "date の日付形式が正しくありません" }));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_dashboard_backend_failure() {
    let backend = start_mock_backend(|_| (StatusCode::BAD_REQUEST, String::new())).await;
    let app = gateway(&backend.base_url());

    let (status, body) = get(&app, "/api/dashboard/daily?date=2024-03-01").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "ダッシュボードデータの取得に失敗しました" })
    );
}
