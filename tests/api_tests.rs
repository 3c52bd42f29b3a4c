//! HTTP API tests driving the router in-process

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use event_stats::api::{create_router, AppState};
use event_stats::event_store::{EventStore, EventStoreConfig};
use event_stats::utils::time::{Clock, ManualClock};

struct TestApp {
    router: Router,
    store: Arc<EventStore>,
    clock: Arc<ManualClock>,
}

fn setup_app() -> TestApp {
    let start = DateTime::parse_from_rfc3339("2025-06-26T14:30:00Z")
        .unwrap()
        .with_timezone(&Utc);
    let clock = Arc::new(ManualClock::new(start));
    let store = Arc::new(EventStore::with_clock(
        EventStoreConfig::default(),
        clock.clone(),
    ));
    let router = create_router(Arc::new(AppState::new(store.clone())));
    TestApp {
        router,
        store,
        clock,
    }
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339()
}

#[tokio::test]
async fn test_post_event_and_get_statistics() {
    let app = setup_app();
    let now = rfc3339(app.clock.now());

    for value in [10.5, 20.5, 30.5, 40.5] {
        let (status, body) = send(
            &app.router,
            Method::POST,
            "/event",
            Some(json!({"timestamp": now, "value": value})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "success");
    }

    let (status, body) = send(&app.router, Method::GET, "/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"count": 4, "min": 10.5, "max": 40.5, "mean": 25.5})
    );
}

#[tokio::test]
async fn test_statistics_without_events() {
    let app = setup_app();
    let (status, body) = send(&app.router, Method::GET, "/statistics", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"count": 0, "min": null, "max": null, "mean": null})
    );
}

#[tokio::test]
async fn test_old_event_is_accepted_but_not_counted() {
    let app = setup_app();
    let two_hours_ago = rfc3339(app.clock.now() - Duration::hours(2));

    let (status, _) = send(
        &app.router,
        Method::POST,
        "/event",
        Some(json!({"timestamp": two_hours_ago, "value": 1000.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app.router, Method::GET, "/statistics", None).await;
    assert_eq!(body["count"], 0);
    assert!(body["mean"].is_null());
}

#[tokio::test]
async fn test_post_event_validation_errors() {
    let app = setup_app();
    let cases = [
        json!({"value": 1.0}),
        json!({"timestamp": "2025-06-26T14:30:00Z"}),
        json!({"timestamp": "not-a-date", "value": 1.0}),
        json!({"timestamp": "2025-06-26T14:30:00Z", "value": "abc"}),
        json!([1, 2, 3]),
    ];

    for payload in cases {
        let (status, body) = send(&app.router, Method::POST, "/event", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(body["error"].is_string());
    }

    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_missing_field_message() {
    let app = setup_app();
    let (_, body) = send(&app.router, Method::POST, "/event", Some(json!({"value": 2}))).await;
    assert_eq!(body["error"], "Missing 'timestamp' field");
}

#[tokio::test]
async fn test_debug_events_does_not_evict() {
    let app = setup_app();
    let now = app.clock.now();
    app.store.record(now, 1.0);
    app.store.record(now - Duration::hours(2), 2.0);

    let (status, body) = send(&app.router, Method::GET, "/debug/events", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_events"], 2);
    assert_eq!(body["window_secs"], 3600);
    assert_eq!(body["events"][0]["is_recent"], true);
    assert_eq!(body["events"][1]["is_recent"], false);
    assert_eq!(body["events"][1]["age_minutes"], 120.0);
    assert_eq!(app.store.len(), 2);
}

#[tokio::test]
async fn test_root_and_health() {
    let app = setup_app();

    let (status, body) = send(&app.router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));

    let (status, body) = send(&app.router, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Event Statistics API is running");
    assert_eq!(body["server_time"], "2025-06-26T14:30:00.000000Z");
    assert!(body["endpoints"].as_array().unwrap().len() >= 4);
}

#[tokio::test]
async fn test_not_found_and_method_not_allowed() {
    let app = setup_app();

    let (status, body) = send(&app.router, Method::GET, "/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Endpoint not found");

    let (status, body) = send(&app.router, Method::DELETE, "/statistics", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn test_mean_present_when_values_overflow_sum() {
    let app = setup_app();
    let now = rfc3339(app.clock.now());

    for _ in 0..2 {
        let (status, _) = send(
            &app.router,
            Method::POST,
            "/event",
            Some(json!({"timestamp": now, "value": 1e308})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app.router, Method::GET, "/statistics", None).await;
    assert_eq!(body["count"], 2);
    assert!(!body["mean"].is_null());
    let mean = body["mean"].as_f64().unwrap();
    assert!((mean - 1e308).abs() <= 1e308 * 1e-15);
}
