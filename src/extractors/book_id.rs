//! Extract the numeric `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Book id from the `:id` path segment. Non-numeric ids are rejected with 400, never coerced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookId(pub i64);

impl BookId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        raw.trim()
            .parse::<i64>()
            .map(BookId)
            .map_err(|_| AppError::BadRequest(format!("invalid book id: {}", raw)))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(BookId::parse("42").unwrap(), BookId(42));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        match BookId::parse("abc") {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "invalid book id: abc"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
