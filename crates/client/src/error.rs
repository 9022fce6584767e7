use serde::Deserialize;
use thiserror::Error;

/// Error details returned by the API inside its `error` envelope.
///
/// Every field is optional on the wire; whatever the server sent is
/// surfaced as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    /// Broad classification, e.g. `card_error` or `invalid_request_error`.
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Human-readable description of the failure.
    #[serde(default)]
    pub message: Option<String>,
    /// Short machine-readable code, e.g. `resource_missing`.
    #[serde(default)]
    pub code: Option<String>,
    /// Parameter the error relates to, when applicable.
    #[serde(default)]
    pub param: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ApiError,
}

#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure: connection, timeout or body decoding.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status decoded from the API error envelope.
    #[error("api error (status {status}): {}", .error.message.as_deref().unwrap_or("no message"))]
    Api { status: u16, error: ApiError },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_error_envelope() {
        let raw = r#"{
            "error": {
                "type": "invalid_request_error",
                "message": "No such subscription: sub_missing",
                "code": "resource_missing",
                "param": "id"
            }
        }"#;
        let envelope: ErrorEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.error.error_type.as_deref(), Some("invalid_request_error"));
        assert_eq!(envelope.error.code.as_deref(), Some("resource_missing"));
        assert_eq!(envelope.error.param.as_deref(), Some("id"));
    }

    #[test]
    fn test_api_error_display_includes_status_and_message() {
        let error = Error::Api {
            status: 402,
            error: ApiError {
                message: Some("Your card was declined.".to_string()),
                ..Default::default()
            },
        };
        assert_eq!(
            error.to_string(),
            "api error (status 402): Your card was declined."
        );
    }

    #[test]
    fn test_api_error_display_without_message() {
        let error = Error::Api {
            status: 500,
            error: ApiError::default(),
        };
        assert_eq!(error.to_string(), "api error (status 500): no message");
    }
}
