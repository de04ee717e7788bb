//! Unified error type for the gateway.

use std::fmt::Debug;
use thiserror::Error;

/// Message shown to callers in place of any failure detail that must stay internal.
pub const GENERIC_INTERNAL_MESSAGE: &str = "Internal server error";

/// Unified error type for all gateway layers.
///
/// Only [`GatewayError::NotFound`] and [`GatewayError::Internal`] are ever
/// shown to HTTP callers with their message intact. Every other variant is
/// collapsed to a generic internal error at the boundary.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The addressed resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Coarse internal failure with a caller-safe message.
    #[error("{0}")]
    Internal(String),

    /// Raw failure reported by the remote users service or its transport.
    #[error("Upstream error: {code} - {message}")]
    Upstream { code: String, message: String },

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A locally constructed value violated its invariants.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GatewayError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Internal(_) | Self::Upstream { .. } | Self::Configuration(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Returns the message that may be shown to an HTTP caller.
    ///
    /// Upstream, configuration and wrapped errors never leak their detail.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::NotFound(message) | Self::Internal(message) => message.clone(),
            Self::Validation(_) => self.to_string(),
            Self::Upstream { .. } | Self::Configuration(_) | Self::Other(_) => {
                GENERIC_INTERNAL_MESSAGE.to_string()
            }
        }
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found<T: Into<String>>(message: T) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates the standard not found error for a user id.
    #[must_use]
    pub fn user_not_found(id: &str) -> Self {
        Self::NotFound(format!("User with id {id} not found"))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Creates an upstream error.
    #[must_use]
    pub fn upstream<C: ToString, M: Into<String>>(code: C, message: M) -> Self {
        Self::Upstream {
            code: code.to_string(),
            message: message.into(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Checks if this error already carries the not-found classification.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(GatewayError::user_not_found("1").status_code(), 404);
        assert_eq!(GatewayError::internal("boom").status_code(), 500);
        assert_eq!(GatewayError::upstream("Unavailable", "down").status_code(), 500);
        assert_eq!(GatewayError::Configuration("bad".to_string()).status_code(), 500);
        assert_eq!(GatewayError::validation("skip").status_code(), 400);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(GatewayError::user_not_found("1").error_code(), "NOT_FOUND");
        assert_eq!(GatewayError::internal("x").error_code(), "INTERNAL_SERVER_ERROR");
        assert_eq!(GatewayError::upstream("Internal", "x").error_code(), "UPSTREAM_ERROR");
    }

    #[test]
    fn test_user_not_found_message() {
        let err = GatewayError::user_not_found("42");
        assert_eq!(err.to_string(), "User with id 42 not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_public_message_hides_upstream_detail() {
        let err = GatewayError::upstream("Unavailable", "tcp connect error: 10.0.0.3:50051");
        assert_eq!(err.public_message(), GENERIC_INTERNAL_MESSAGE);
        assert!(err.to_string().contains("10.0.0.3"));

        let wrapped = GatewayError::from(anyhow::anyhow!("secret stack"));
        assert_eq!(wrapped.public_message(), GENERIC_INTERNAL_MESSAGE);
    }

    #[test]
    fn test_public_message_keeps_classified_messages() {
        assert_eq!(
            GatewayError::internal("Failed to create user").public_message(),
            "Failed to create user"
        );
        assert_eq!(
            GatewayError::user_not_found("7").public_message(),
            "User with id 7 not found"
        );
    }

    #[test]
    fn test_only_not_found_is_classified() {
        assert!(!GatewayError::internal("x").is_not_found());
        assert!(!GatewayError::upstream("NotFound", "x").is_not_found());
    }
}
