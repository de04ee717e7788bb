//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gateway_core::{ErrorEnvelope, GatewayError, ResponseEnvelope};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub GatewayError);

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ErrorEnvelope::from_error(&self.0))).into_response()
    }
}

/// Envelope paired with the HTTP status it carries.
pub type EnvelopeResponse<T> = (StatusCode, Json<ResponseEnvelope<T>>);

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<EnvelopeResponse<T>, AppError>;

/// Sends an envelope with the status code it declares.
pub fn respond<T>(envelope: ResponseEnvelope<T>) -> EnvelopeResponse<T> {
    let status = StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::OK);
    (status, Json(envelope))
}
