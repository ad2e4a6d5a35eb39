use super::{health, revalidate};
use super::state::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// System-level API routes: health check and render-cache revalidation.
pub fn system_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(health::health_handler))
        .routes(routes!(revalidate::revalidate_handler))
}
