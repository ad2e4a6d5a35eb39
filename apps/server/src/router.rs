use axum::Router;
use axum::routing::get;
use campus::features;
use campus::kernel::prelude::ApiState;
use campus::kernel::server::assets::favicon_handler;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(campus::server::router::system_router())
        .with_state(state.clone())
        .split_for_parts();

    // Feature slice routers plus the static favicon route
    let site_routes = Router::new()
        .merge(features::pages::router())
        .merge(features::contact::router())
        .merge(features::diagnostics::router())
        .route("/favicon.ico", get(favicon_handler))
        .with_state(state);

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api", api_doc);

    // Merge all routes and then apply the tracing layer to the final router
    Router::new()
        .merge(openapi_routes)
        .merge(site_routes)
        .merge(scalar_routes)
        .layer(TraceLayer::new_for_http())
}
