//! Client error types
//!
//! Transport failures, HTTP status failures and body decode failures are
//! three distinct kinds; callers can tell "no connectivity" apart from
//! "server said no" and "server said something unreadable".

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// No connectivity, or the request timed out
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Missing or rejected bearer token
    #[error("authentication required")]
    Unauthorized,

    /// Non-2xx status from the backend
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// Malformed response body
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client-side precondition failure, raised before any request is made
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Profile update with no changed fields
    #[error("nothing to update")]
    NothingToUpdate,
}

/// Client-side precondition failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No address selected, or the selected address no longer exists
    #[error("delivery address is missing or no longer exists")]
    AddressInvalid,

    /// No delivery slot selected
    #[error("delivery time is not selected")]
    DeliveryTimeMissing,

    #[error("phone number must be +7 followed by 10 digits")]
    InvalidPhoneNumber,

    #[error("password must be at least 5 characters")]
    PasswordTooShort,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("current password is required to set a new one")]
    CurrentPasswordRequired,

    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
