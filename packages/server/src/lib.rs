pub mod config;
pub mod cors;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mailer;
pub mod routes;
pub mod state;

use axum::http::header::InvalidHeaderValue;
use axum::{Json, Router, routing::get};
use common::{ContactSubmission, ErrorBody, SendEmailResponse};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio Contact API",
        version = "1.0.0",
        description = "Contact form backend for the Folio portfolio site"
    ),
    paths(handlers::contact::send_email),
    components(schemas(ContactSubmission, SendEmailResponse, ErrorBody)),
    tags(
        (name = "Contact", description = "Contact form submissions"),
    ),
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router.
///
/// Fails if the configured CORS origin cannot be sent as a header.
pub fn build_router(state: AppState) -> Result<Router, InvalidHeaderValue> {
    let server = state.config.server.clone();

    let mut router = Router::new()
        .nest("/api", routes::api_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()));

    if let Some(site_dir) = server.site_dir {
        router = router.fallback_service(ServeDir::new(site_dir));
    }

    Ok(cors::apply(router, &server.cors)?.layer(TraceLayer::new_for_http()))
}
