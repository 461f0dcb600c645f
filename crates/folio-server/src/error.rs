//! Contact endpoint failures and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::ErrorBody;
use std::fmt;
use tracing::error;

pub const MSG_MISSING_FIELDS: &str = "All fields are required.";
pub const MSG_INVALID_BODY: &str = "Invalid request body.";
pub const MSG_INVALID_EMAIL: &str = "Please provide a valid email address.";
pub const MSG_SPAM: &str = "Message appears to be spam.";
pub const MSG_NAME_TOO_LONG: &str = "Name is too long.";
pub const MSG_MESSAGE_TOO_LONG: &str = "Message is too long.";
pub const MSG_RATE_LIMITED: &str = "Too many requests. Please try again later.";
pub const MSG_INTERNAL: &str = "Internal server error. Please try again later.";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";

#[derive(Debug)]
pub enum ContactError {
    Validation(&'static str),
    Spam,
    RateLimited,
    /// Details stay in the server log.
    Internal(anyhow::Error),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) | ContactError::Spam => StatusCode::BAD_REQUEST,
            ContactError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ContactError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            ContactError::Validation(message) => message,
            ContactError::Spam => MSG_SPAM,
            ContactError::RateLimited => MSG_RATE_LIMITED,
            ContactError::Internal(_) => MSG_INTERNAL,
        }
    }
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::Internal(err) => write!(f, "internal error: {err:#}"),
            other => f.write_str(other.public_message()),
        }
    }
}

impl std::error::Error for ContactError {}

impl From<anyhow::Error> for ContactError {
    fn from(err: anyhow::Error) -> Self {
        ContactError::Internal(err)
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        if let ContactError::Internal(err) = &self {
            error!("Contact submission failed: {err:#}");
        }
        error_response(self.status(), self.public_message())
    }
}

pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            ContactError::Validation(MSG_INVALID_EMAIL).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ContactError::Spam.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ContactError::RateLimited.status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ContactError::Internal(anyhow::anyhow!("disk on fire")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_details_are_not_public() {
        let err = ContactError::Internal(anyhow::anyhow!("smtp password rejected"));
        assert_eq!(err.public_message(), MSG_INTERNAL);
        assert!(err.to_string().contains("smtp password rejected"));
    }
}
