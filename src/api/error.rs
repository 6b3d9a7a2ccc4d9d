//! API Error Types
//!
//! Failure kinds surfaced by the HTTP repository layer.

use thiserror::Error;

/// Error returned by every repository function.
///
/// Callers flatten these into a single per-action message for display;
/// [`ApiError::detail`] exposes the server's own message where the UI
/// forwards it verbatim (e.g. registration).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// A success response carried a body we could not decode.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-provided detail message, when one was returned.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_forwards_server_message() {
        let err = ApiError::Status {
            status: 409,
            message: "Username already taken".to_string(),
        };
        assert_eq!(err.detail(), Some("Username already taken"));
    }

    #[test]
    fn test_detail_absent_for_transport_failures() {
        assert_eq!(ApiError::Network("connection refused".to_string()).detail(), None);
        let blank = ApiError::Status { status: 500, message: String::new() };
        assert_eq!(blank.detail(), None);
    }
}
