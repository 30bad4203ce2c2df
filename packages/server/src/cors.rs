use axum::Router;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CorsConfig;

pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";

/// Stamp the fixed CORS header set onto every response the router produces,
/// including rejections, 404s and static files.
///
/// Preflights are answered by the contact handler itself, so unlike
/// `tower_http::cors::CorsLayer` no `Origin` or `Access-Control-Request-*`
/// request header is required for the headers to appear.
///
/// Fails if `allow_origin` is not a valid header value.
pub fn apply(router: Router, config: &CorsConfig) -> Result<Router, InvalidHeaderValue> {
    let origin = config.origin_header()?;

    Ok(router
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            origin,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        )))
}
