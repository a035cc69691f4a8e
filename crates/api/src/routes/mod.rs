//! HTTP route handlers.

pub mod carts;
pub mod health;
pub mod metrics;
pub mod orders;
pub mod products;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Decodes a request body that must be a JSON object.
///
/// The content type is not checked. Arrays, scalars and unparsable bytes are
/// all rejected with [`ApiError::MalformedPayload`].
pub(crate) fn json_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "request body is not JSON");
        ApiError::MalformedPayload
    })?;
    if !value.is_object() {
        tracing::debug!("request body is not a JSON object");
        return Err(ApiError::MalformedPayload);
    }
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(error = %e, "request body has the wrong shape");
        ApiError::MalformedPayload
    })
}

/// Validates a numeric body field that must be a positive id or quantity.
pub(crate) fn positive(value: i64, name: &'static str) -> Result<u32, ApiError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or(ApiError::InvalidParameter(name))
}

/// Parses a required numeric query parameter.
pub(crate) fn query_param(value: Option<&str>, name: &'static str) -> Result<u32, ApiError> {
    value
        .and_then(|v| v.trim().parse().ok())
        .ok_or(ApiError::InvalidParameter(name))
}
