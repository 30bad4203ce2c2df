use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that reports every failure as `AppError::InvalidInput`.
///
/// Unlike `axum::Json` the `Content-Type` header is not required: the contact
/// form is also posted by clients that send JSON as `text/plain` to avoid a
/// preflight.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidInput(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(AppJson)
            .map_err(|e| AppError::InvalidInput(e.to_string()))
    }
}
