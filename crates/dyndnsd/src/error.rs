//! HTTP mapping for request errors
//!
//! Every `dyndns_core::Error` becomes a plain-text response whose status
//! reflects the error kind. Provider and network internals are logged here
//! and replaced by a generic body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dyndns_core::Error;
use tracing::{error, warn};

/// Response-side wrapper around [`dyndns_core::Error`]
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    /// HTTP status for the wrapped error kind
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Forbidden => StatusCode::FORBIDDEN,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Provider { .. } => StatusCode::BAD_GATEWAY,
            Error::Network {
                timed_out: true, ..
            } => StatusCode::GATEWAY_TIMEOUT,
            Error::Network { .. } => StatusCode::BAD_GATEWAY,
            Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body shown to the caller
    pub fn body(&self) -> String {
        match &self.0 {
            Error::Network { .. } => "Unable to reach the DNS provider".to_string(),
            Error::Config(_) => "An error occurred!".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self.0 {
            Error::Provider {
                message,
                detail: Some(detail),
            } => error!(kind = self.0.kind(), %status, "{} (provider said: {})", message, detail),
            Error::Provider { .. } | Error::Network { .. } | Error::Config(_) => {
                error!(kind = self.0.kind(), %status, "{}", self.0)
            }
            _ => warn!(kind = self.0.kind(), %status, "{}", self.0),
        }

        (status, self.body()).into_response()
    }
}
