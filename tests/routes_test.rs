mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chronicle::{db::DatabaseSlot, routes::AppState, startup::build_router};
use chrono::Utc;
use common::{body_bytes, get, get_json};
use serde_json::{json, Value};
use tower::util::ServiceExt;

#[tokio::test]
async fn root_returns_fixed_message() {
    for _ in 0..2 {
        let response = get(DatabaseSlot::Absent, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_bytes(response).await,
            br#"{"message":"Hello from FastAPI Backend!"}"#.to_vec()
        );
    }
}

#[tokio::test]
async fn hello_returns_fixed_message() {
    let response = get(DatabaseSlot::Absent, "/api/hello").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_bytes(response).await,
        br#"{"message":"Hello from the backend API!"}"#.to_vec()
    );
}

#[tokio::test]
async fn news_dateline_uses_todays_date() {
    let before = Utc::now().format("%A, %B %d, %Y").to_string();
    let edition = get_json(DatabaseSlot::Absent, "/api/news").await;
    let after = Utc::now().format("%A, %B %d, %Y").to_string();

    let date = edition["dateline"]["date"].as_str().unwrap();
    assert!(date == before || date == after, "unexpected date {}", date);
    assert_eq!(edition["masthead"]["title"], "The Daily Chronicle");
    assert_eq!(edition["dateline"]["price"], "5¢");
}

#[tokio::test]
async fn news_sections_expose_ads_only_for_classifieds() {
    let edition = get_json(DatabaseSlot::Absent, "/api/news").await;
    let sections = edition["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 3);

    for section in sections {
        let classifieds = section["layout"] == "classifieds";
        assert_eq!(section.get("ads").is_some(), classifieds);
        assert_eq!(section.get("articles").is_some(), !classifieds);
    }
}

#[tokio::test]
async fn news_society_distinguishes_missing_subhead_from_empty_byline() {
    let edition = get_json(DatabaseSlot::Absent, "/api/news").await;
    let society = &edition["sections"][1];
    assert_eq!(society["name"], "Society");
    assert_eq!(society["layout"], "two-column");

    let lecture = &society["articles"][1];
    assert_eq!(lecture.get("subhead"), Some(&Value::Null));
    assert_eq!(lecture["byline"], json!(""));
}

#[tokio::test]
async fn news_is_identical_across_calls() {
    let first = get_json(DatabaseSlot::Absent, "/api/news").await;
    let second = get_json(DatabaseSlot::Absent, "/api/news").await;
    assert_eq!(first["masthead"], second["masthead"]);
    assert_eq!(first["sections"], second["sections"]);
}

#[tokio::test]
async fn test_endpoint_without_database_module() {
    let report = get_json(DatabaseSlot::Absent, "/test").await;
    assert_eq!(report["backend_status"], "✅ Running");
    assert_eq!(
        report["database_status"],
        "❌ Database module not found (run enable-database first)"
    );
    assert_eq!(report["connection_status"], "Not Connected");
    assert_eq!(report["collections"], json!([]));
    assert!(report["database_url_configured"].is_boolean());
    assert!(report["database_name_configured"].is_boolean());
}

#[tokio::test]
async fn test_endpoint_with_uninitialized_handle() {
    let report = get_json(DatabaseSlot::Uninitialized, "/test").await;
    assert_eq!(report["database_status"], "⚠️  Available but not initialized");
    assert_eq!(report["connection_status"], "Not Connected");
}

#[tokio::test]
async fn test_endpoint_lists_first_ten_collections() {
    let names: Vec<String> = (0..15).map(|i| format!("collection_{}", i)).collect();
    let report = get_json(common::ready_slot(Ok(names.clone())), "/test").await;

    assert_eq!(report["database_status"], "✅ Connected & Working");
    assert_eq!(report["connection_status"], "Connected");
    assert_eq!(report["collections"], json!(names[..10].to_vec()));
}

#[tokio::test]
async fn test_endpoint_truncates_listing_error() {
    let reason = "a".repeat(50) + " and the rest of a long driver message";
    let report = get_json(common::ready_slot(Err(reason)), "/test").await;

    let expected = format!("⚠️  Connected but Error: {}", "a".repeat(50));
    assert_eq!(report["database_status"], expected);
    assert_eq!(report["connection_status"], "Connected");
    assert_eq!(report["collections"], json!([]));
}

#[tokio::test]
async fn test_endpoint_reports_broken_handle_as_error() {
    let report = get_json(DatabaseSlot::Broken("bad url".to_string()), "/test").await;
    assert_eq!(report["database_status"], "❌ Error: bad url");
    assert_eq!(report["connection_status"], "Not Connected");
}

#[tokio::test]
async fn unknown_path_is_json_not_found() {
    let response = get(DatabaseSlot::Absent, "/api/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let response = build_router(AppState::new(DatabaseSlot::Absent))
        .oneshot(
            Request::builder()
                .uri("/api/hello")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
