use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use campus_database::Database;
use campus_kernel::prelude::*;
use campus_render_cache::RenderCache;
use serde_json::Value;
use tower::ServiceExt;

async fn test_state(config: SiteConfig) -> ApiState {
    let db = Database::builder()
        .url("mem://")
        .session("campus_test", "diagnostics")
        .init()
        .await
        .expect("mem database");

    ApiState::builder()
        .config(config)
        .db(db)
        .cache(RenderCache::default())
        .register_slice(campus_diagnostics::init())
        .build()
        .expect("state")
}

async fn fetch_report(state: ApiState) -> Value {
    let app: Router = campus_diagnostics::router().with_state(state);
    let response = app
        .oneshot(Request::builder().uri("/api/diagnostics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json report")
}

#[tokio::test]
async fn probes_report_connected_against_a_live_backend() {
    let report = fetch_report(test_state(SiteConfig::default()).await).await;

    assert_eq!(report["backend"]["status"], "connected");
    assert_eq!(report["session"]["status"], "connected");
}

#[tokio::test]
async fn env_probe_reports_presence_without_values() {
    let mut config = SiteConfig::default();
    config.security.revalidate_secret = "hunter2".to_owned();

    let report = fetch_report(test_state(config).await).await;

    assert_eq!(report["env"]["site_name"], true);
    assert_eq!(report["env"]["database_url"], true);
    assert_eq!(report["env"]["revalidate_secret"], true);
    // The secret itself must never appear anywhere in the report.
    assert!(!report.to_string().contains("hunter2"));
}

#[tokio::test]
async fn env_probe_flags_missing_secret() {
    let report = fetch_report(test_state(SiteConfig::default()).await).await;

    assert_eq!(report["env"]["revalidate_secret"], false);
}

#[tokio::test]
async fn report_lists_registered_slices() {
    let report = fetch_report(test_state(SiteConfig::default()).await).await;

    let slices = report["slices"].as_array().expect("slices array");
    assert!(slices.iter().any(|name| name == "diagnostics"));
    assert_eq!(report["cached_pages"], 0);
}
