use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    app_state::AppState,
    extractor::ProductRecord,
    health::{self, HealthResponse},
    listings::{
        dtos::{ErrorResponse, GenerateRequest, GenerateResponse},
        handlers,
    },
    transformer::ListingRecord,
};

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, handlers::generate_listing),
    components(schemas(
        HealthResponse,
        GenerateRequest,
        GenerateResponse,
        ErrorResponse,
        ProductRecord,
        ListingRecord
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "listings", description = "Listing generation from source product pages")
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::health_check))
        .route("/api/generate", post(handlers::generate_listing))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
