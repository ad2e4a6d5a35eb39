//! Public page slice.
//!
//! Serves the marketing pages (`/`, `/programs`, `/contact`) from typed
//! content through maud templates, with rendered HTML memoized in the shared
//! render cache until an operator revalidates the path.

pub mod boundary;
pub mod components;
pub mod content;
pub mod gate;
pub mod pages;

use crate::content::SiteContent;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use campus_domain::registry::{FeatureSlice, InitializedSlice};
use campus_domain::roles::Role;
use campus_kernel::server::state::{ApiState, ApiStateError};
use maud::Markup;
use std::any::Any;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    State(#[from] ApiStateError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("page render failed: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// Feature state for the page slice: the published content set.
#[derive(Debug)]
pub struct PagesSlice {
    pub content: SiteContent,
}

impl FeatureSlice for PagesSlice {
    fn name(&self) -> &'static str {
        "pages"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initializes the slice with the published content set.
#[must_use]
pub fn init() -> InitializedSlice {
    InitializedSlice::new(PagesSlice { content: SiteContent::standard() })
}

/// Routes served by this slice.
pub fn router() -> Router<ApiState> {
    use axum::routing::get;

    Router::new()
        .route("/", get(home_handler))
        .route("/programs", get(programs_handler))
        .route("/contact", get(contact_handler))
}

/// Serves a page from the render cache, rendering on miss.
fn render_cached(
    state: &ApiState,
    path: &str,
    render: impl FnOnce(&SiteContent) -> Markup,
) -> Result<Html<String>, PageError> {
    if let Some(html) = state.cache.get(path) {
        tracing::debug!(path, "render cache hit");
        return Ok(Html(html.to_string()));
    }

    let slice = state.try_get_slice::<PagesSlice>()?;
    let html = render(&slice.content).into_string();
    state.cache.put(path, html.as_str());
    tracing::debug!(path, "page rendered and cached");

    Ok(Html(html))
}

async fn home_handler(State(state): State<ApiState>) -> Result<Html<String>, PageError> {
    render_cached(&state, "/", |content| pages::home(&state.config.site, content))
}

async fn programs_handler(State(state): State<ApiState>) -> Result<Html<String>, PageError> {
    render_cached(&state, "/programs", |content| pages::programs(&state.config.site, content))
}

async fn contact_handler(State(state): State<ApiState>) -> Result<Html<String>, PageError> {
    // Anonymous site traffic carries the least-privileged role.
    render_cached(&state, "/contact", |content| {
        pages::contact(&state.config.site, content, Role::Viewer)
    })
}
