//! Typed errors and HTTP mapping.

use crate::response;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing or invalid fields: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// Store failure. Only `message` reaches the client.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    /// For `map_err`: wraps a store error under a client-facing message.
    pub fn store(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Store { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (*message).to_string()
            }
            other => {
                tracing::debug!(status = status.as_u16(), "{}", other);
                other.to_string()
            }
        };
        response::error(status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_joins_fields() {
        let err = AppError::Validation(vec!["title".into(), "author".into()]);
        assert_eq!(err.to_string(), "missing or invalid fields: title, author");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_error_hides_source() {
        let err = AppError::store("could not delete book from db")(sqlx::Error::PoolClosed);
        assert_eq!(err.to_string(), "could not delete book from db");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("No such book with id 7".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
