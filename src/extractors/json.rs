//! JSON body extractor with required-field validation.

use crate::error::AppError;
use crate::service::{RequestValidator, RequiredFields};
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but checks `T::REQUIRED` first and rejects with the envelope.
/// The Content-Type header is not inspected.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + RequiredFields,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("error reading request body: {}", e.body_text())))?;
        RequestValidator::bind(&bytes).map(ValidJson)
    }
}
