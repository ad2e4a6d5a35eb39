use super::state::ApiState;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::warn;

/// Icons are produced at build time and addressed by content-stable names,
/// so clients may cache them for a year without revalidation.
const ICON_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Serves `favicon.ico` from the configured static directory.
///
/// Missing file is a plain-text `404`; other read failures are logged and
/// reported the same way, since the caller can't act on the difference.
pub async fn favicon_handler(State(state): State<ApiState>) -> Response {
    let path = state.config.storage.static_dir.join("favicon.ico");

    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "image/x-icon"),
                (header::CACHE_CONTROL, ICON_CACHE_CONTROL),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %path.display(), error = %e, "favicon read failed");
            }
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}
