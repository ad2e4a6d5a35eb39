use super::SYSTEM_TAG;
use super::state::ApiState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub(super) struct RevalidateParams {
    /// Shared secret authorizing the call.
    secret: Option<String>,
    /// Path whose cached render should be invalidated. Defaults to `/`.
    path: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
struct RevalidateResponse {
    revalidated: bool,
    message: String,
}

#[derive(Debug, Serialize, ToSchema)]
struct RevalidateRejection {
    message: String,
}

/// Forces a path's cached render to be recomputed on the next request.
///
/// Authorization is a plain shared-secret comparison; a mismatch is a `401`
/// with no further detail. An empty configured secret matches nothing, so the
/// endpoint is inert until one is set.
#[utoipa::path(
    get,
    path = "/api/revalidate",
    params(RevalidateParams),
    responses(
        (status = OK, description = "Path revalidated", body = RevalidateResponse),
        (status = UNAUTHORIZED, description = "Secret mismatch", body = RevalidateRejection),
        (status = INTERNAL_SERVER_ERROR, description = "Cache invalidation failed", body = RevalidateRejection),
    ),
    tag = SYSTEM_TAG,
)]
#[allow(clippy::unused_async)]
pub(super) async fn revalidate_handler(
    State(state): State<ApiState>,
    Query(params): Query<RevalidateParams>,
) -> Response {
    let configured = &state.config.security.revalidate_secret;
    let supplied = params.secret.unwrap_or_default();

    if configured.is_empty() || supplied != *configured {
        return (
            StatusCode::UNAUTHORIZED,
            Json(RevalidateRejection { message: "Invalid token".to_owned() }),
        )
            .into_response();
    }

    let path = params.path.unwrap_or_else(|| "/".to_owned());

    match state.cache.revalidate(&path) {
        Ok(()) => {
            info!(%path, "render cache revalidated");
            (
                StatusCode::OK,
                Json(RevalidateResponse {
                    revalidated: true,
                    message: format!("Path \"{path}\" revalidated"),
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!(%path, error = %e, "render cache revalidation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RevalidateRejection { message: "Error revalidating".to_owned() }),
            )
                .into_response()
        }
    }
}
