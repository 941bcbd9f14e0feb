//! Request body binding and required-field validation.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Request bodies name the fields that must be present as non-empty strings.
pub trait RequiredFields {
    const REQUIRED: &'static [&'static str];
}

pub struct RequestValidator;

impl RequestValidator {
    /// Parse `bytes` as JSON, check `T::REQUIRED`, then deserialize into `T`.
    pub fn bind<T>(bytes: &[u8]) -> Result<T, AppError>
    where
        T: DeserializeOwned + RequiredFields,
    {
        let body: Value = serde_json::from_slice(bytes).map_err(read_error)?;
        if !body.is_object() {
            return Err(AppError::BadRequest(
                "error reading request body: expected a JSON object".into(),
            ));
        }
        let missing = Self::missing_fields(&body, T::REQUIRED);
        if !missing.is_empty() {
            tracing::debug!(fields = ?missing, "request body failed validation");
            return Err(AppError::Validation(missing));
        }
        serde_json::from_value(body).map_err(read_error)
    }

    /// Required fields that are absent, null, not a string, or empty, in declaration order.
    pub fn missing_fields(body: &Value, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|field| {
                !matches!(body.get(**field), Some(Value::String(s)) if !s.is_empty())
            })
            .map(|field| field.to_string())
            .collect()
    }
}

fn read_error(e: serde_json::Error) -> AppError {
    tracing::debug!(error = %e, "unreadable request body");
    AppError::BadRequest(format!("error reading request body: {}", e))
}
