//! Failure type shared by all adapters

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Uniform failure returned in place of an adapter's success record
///
/// `Status` is the remote service answering with anything but the expected
/// code. `Transport` and `Decode` cover calls that never produced a usable
/// response; they carry no status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("Status code: {status_code}")]
    Status { status_code: u16, message: String },

    #[error("Request failed: {message}")]
    Transport { message: String },

    #[error("Unexpected response body: {message}")]
    Decode { message: String },
}

impl RemoteError {
    pub fn status(status_code: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status_code,
            message: message.into(),
        }
    }

    pub(crate) fn transport(error: reqwest::Error) -> Self {
        Self::Transport {
            message: error.to_string(),
        }
    }

    pub(crate) fn decode(error: reqwest::Error) -> Self {
        Self::Decode {
            message: error.to_string(),
        }
    }

    /// HTTP status received, if the call got that far
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status_code, .. } => Some(*status_code),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }

    /// Raw body text for status failures, a description otherwise
    pub fn message(&self) -> &str {
        match self {
            Self::Status { message, .. }
            | Self::Transport { message }
            | Self::Decode { message } => message,
        }
    }
}

#[derive(Serialize)]
struct ErrorPayload<'a> {
    error: String,
    status_code: Option<u16>,
    message: &'a str,
}

// Rendered as `{"error": ..., "status_code": ..., "message": ...}` for the agent.
impl Serialize for RemoteError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ErrorPayload {
            error: self.to_string(),
            status_code: self.status_code(),
            message: self.message(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_error_payload() {
        let error = RemoteError::status(404, "Not Found");
        assert_eq!(error.status_code(), Some(404));
        assert_eq!(error.message(), "Not Found");
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "error": "Status code: 404",
                "status_code": 404,
                "message": "Not Found"
            })
        );
    }

    #[test]
    fn test_transport_error_has_no_status_code() {
        let error = RemoteError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(error.status_code(), None);

        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["status_code"], serde_json::Value::Null);
        assert_eq!(value["error"], "Request failed: connection refused");
    }
}
