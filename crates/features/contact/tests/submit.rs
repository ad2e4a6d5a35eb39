use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use campus_database::Database;
use campus_domain::contact::SubmissionStatus;
use campus_kernel::prelude::*;
use campus_render_cache::RenderCache;
use tower::ServiceExt;

async fn test_state(cache: RenderCache) -> ApiState {
    let db = Database::builder()
        .url("mem://")
        .session("campus_test", "contact")
        .init()
        .await
        .expect("mem database");

    ApiState::builder()
        .config(SiteConfig::default())
        .db(db)
        .cache(cache)
        .register_slice(campus_contact::init())
        .build()
        .expect("state")
}

fn app(state: &ApiState) -> Router {
    campus_contact::router().with_state(state.clone())
}

fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn submission_is_stored_byte_for_byte() {
    let state = test_state(RenderCache::default()).await;

    let body = "first-name=%20%20Ada%20&last-name=Lovelace&email=ada%40example.com\
                &message=Hello%20%3Cb%3Eworld%3C%2Fb%3E%0Asecond%20line";
    let response = app(&state).oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/contact");

    let stored = state.database.list_contact_submissions().await.expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].first_name, "  Ada ");
    assert_eq!(stored[0].last_name, "Lovelace");
    assert_eq!(stored[0].email, "ada@example.com");
    assert_eq!(stored[0].message, "Hello <b>world</b>\nsecond line");
    assert_eq!(stored[0].status, SubmissionStatus::Pending);
}

#[tokio::test]
async fn missing_fields_are_stored_as_empty_strings() {
    let state = test_state(RenderCache::default()).await;

    let response = app(&state).oneshot(form_request("email=someone%40example.com")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let stored = state.database.list_contact_submissions().await.expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].first_name, "");
    assert_eq!(stored[0].last_name, "");
    assert_eq!(stored[0].email, "someone@example.com");
    assert_eq!(stored[0].message, "");
}

#[tokio::test]
async fn successful_submission_invalidates_the_contact_page() {
    let cache = RenderCache::new(8);
    cache.put("/contact", "<html>stale</html>");
    cache.put("/", "<html>home</html>");
    let state = test_state(cache.clone()).await;

    let response = app(&state).oneshot(form_request("first-name=Ada")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    assert!(cache.get("/contact").is_none(), "contact page should be invalidated");
    assert!(cache.get("/").is_some(), "other pages stay cached");
}

#[tokio::test]
async fn empty_form_still_creates_a_pending_row() {
    let state = test_state(RenderCache::default()).await;

    let response = app(&state).oneshot(form_request("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let stored = state.database.list_contact_submissions().await.expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, SubmissionStatus::Pending);
}
