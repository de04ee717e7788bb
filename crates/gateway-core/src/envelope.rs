//! Uniform response envelope returned by every non-streaming operation.

use crate::GatewayError;
use serde::{Deserialize, Serialize};

/// HTTP status carried by a successful create.
pub const STATUS_CREATED: u16 = 201;
/// HTTP status carried by any other successful operation.
pub const STATUS_OK: u16 = 200;

/// Successful response wrapper: `{statusCode, message, data}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    /// HTTP status code of the outcome.
    pub status_code: u16,
    /// Human-readable outcome message.
    pub message: String,
    /// Payload returned by the remote service.
    pub data: T,
}

impl<T> ResponseEnvelope<T> {
    /// Wraps a freshly created resource.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: STATUS_CREATED,
            message: message.into(),
            data,
        }
    }

    /// Wraps a successfully fetched or modified resource.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: STATUS_OK,
            message: message.into(),
            data,
        }
    }
}

/// Failure body. Same shape as [`ResponseEnvelope`] with `data: null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// HTTP status code of the failure.
    pub status_code: u16,
    /// Caller-safe failure message.
    pub message: String,
    /// Always null.
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub data: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Builds the caller-facing body for an error.
    #[must_use]
    pub fn from_error(error: &GatewayError) -> Self {
        Self {
            status_code: error.status_code(),
            message: error.public_message(),
            data: None,
        }
    }
}

impl From<&GatewayError> for ErrorEnvelope {
    fn from(error: &GatewayError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_envelope_serializes_camel_case() {
        let envelope = ResponseEnvelope::created("User successfully created", json!({"id": "1"}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"statusCode": 201, "message": "User successfully created", "data": {"id": "1"}})
        );
    }

    #[test]
    fn test_ok_envelope_status() {
        let envelope = ResponseEnvelope::ok("Users fetched successfully", Vec::<u8>::new());
        assert_eq!(envelope.status_code, STATUS_OK);
    }

    #[test]
    fn test_error_envelope_has_null_data() {
        let body = ErrorEnvelope::from_error(&GatewayError::user_not_found("42"));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({"statusCode": 404, "message": "User with id 42 not found", "data": null})
        );
    }

    #[test]
    fn test_error_envelope_masks_upstream_failure() {
        let body = ErrorEnvelope::from(&GatewayError::upstream("Unavailable", "connection refused"));
        assert_eq!(body.status_code, 500);
        assert_eq!(body.message, crate::GENERIC_INTERNAL_MESSAGE);
    }
}
