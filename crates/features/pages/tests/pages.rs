use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use campus_database::Database;
use campus_kernel::prelude::*;
use campus_render_cache::RenderCache;
use tower::ServiceExt;

async fn test_state(cache: RenderCache) -> ApiState {
    let db = Database::builder()
        .url("mem://")
        .session("campus_test", "pages")
        .init()
        .await
        .expect("mem database");

    ApiState::builder()
        .config(SiteConfig::default())
        .db(db)
        .cache(cache)
        .register_slice(campus_pages::init())
        .build()
        .expect("state")
}

fn app(state: ApiState) -> Router {
    campus_pages::router().with_state(state)
}

async fn get_page(app: Router, path: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn home_page_serves_html() {
    let state = test_state(RenderCache::default()).await;

    let response = app(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).expect("content type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let html = String::from_utf8(bytes.to_vec()).expect("utf-8 body");
    assert!(html.contains("Harborlight Academy"));
    assert!(html.contains("Our school in numbers"));
}

#[tokio::test]
async fn programs_page_shows_program_details() {
    let state = test_state(RenderCache::default()).await;

    let (status, html) = get_page(app(state), "/programs").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("English Immersion Program"));
    assert!(html.contains("What you will learn"));
    assert!(html.contains("Course materials"));
}

#[tokio::test]
async fn contact_page_renders_the_form() {
    let state = test_state(RenderCache::default()).await;

    let (status, html) = get_page(app(state), "/contact").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("name=\"first-name\""));
    assert!(html.contains("name=\"last-name\""));
    assert!(html.contains("name=\"email\""));
    assert!(html.contains("name=\"message\""));
    // Anonymous visitors never see editor tooling.
    assert!(!html.contains("editor-tools"));
}

#[tokio::test]
async fn pages_are_cached_under_their_path() {
    let cache = RenderCache::new(8);
    let state = test_state(cache.clone()).await;

    assert!(cache.get("/").is_none());
    let (status, html) = get_page(app(state), "/").await;
    assert_eq!(status, StatusCode::OK);

    let cached = cache.get("/").expect("home cached after first render");
    assert_eq!(&*cached, html.as_str());
}

#[tokio::test]
async fn cached_html_is_served_verbatim() {
    let cache = RenderCache::new(8);
    cache.put("/programs", "<html>pinned</html>");
    let state = test_state(cache).await;

    let (status, html) = get_page(app(state), "/programs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html, "<html>pinned</html>");
}

#[tokio::test]
async fn missing_slice_is_a_server_error() {
    let db = Database::builder()
        .url("mem://")
        .session("campus_test", "pages_missing")
        .init()
        .await
        .expect("mem database");
    let state = ApiState::builder()
        .config(SiteConfig::default())
        .db(db)
        .build()
        .expect("state");

    let (status, _) = get_page(app(state), "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
