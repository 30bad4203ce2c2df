use axum::{Router, routing::post};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/send-email",
        post(handlers::contact::send_email)
            .options(handlers::contact::preflight)
            .fallback(handlers::contact::method_not_allowed),
    )
}
