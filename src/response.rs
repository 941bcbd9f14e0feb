//! Standard response envelope helpers: `{status, message, data?}` on every response.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub type EnvelopeResponse<T> = (StatusCode, Json<Envelope<T>>);

pub fn success<T: Serialize>(
    code: StatusCode,
    message: impl Into<String>,
    data: T,
) -> EnvelopeResponse<T> {
    (
        code,
        Json(Envelope {
            status: Status::Success,
            message: message.into(),
            data: Some(data),
        }),
    )
}

/// Success envelope with no `data` key.
pub fn success_empty(code: StatusCode, message: impl Into<String>) -> EnvelopeResponse<()> {
    (
        code,
        Json(Envelope {
            status: Status::Success,
            message: message.into(),
            data: None,
        }),
    )
}

pub fn error(code: StatusCode, message: impl Into<String>) -> EnvelopeResponse<()> {
    (
        code,
        Json(Envelope {
            status: Status::Error,
            message: message.into(),
            data: None,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_is_omitted_when_absent() {
        let (code, Json(body)) = success_empty(StatusCode::CREATED, "book created successfully");
        assert_eq!(code, StatusCode::CREATED);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"status": "success", "message": "book created successfully"})
        );
    }

    #[test]
    fn empty_list_is_kept() {
        let (_, Json(body)) = success(StatusCode::OK, "ok", Vec::<u8>::new());
        assert_eq!(serde_json::to_value(body).unwrap()["data"], json!([]));
    }

    #[test]
    fn error_envelope() {
        let (code, Json(body)) = error(StatusCode::BAD_REQUEST, "No such book with id");
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"status": "error", "message": "No such book with id"})
        );
    }
}
