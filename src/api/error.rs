use thiserror::Error;

/// Failure of a remote API call
///
/// Every provider call resolves to `Result<T, ApiError>`; callers branch on it
/// instead of relying on the absence of a success marker.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid API configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Build a status error, falling back to `Error {status}` when the body had no message
    pub fn status(status: u16, message: Option<String>) -> Self {
        ApiError::Status {
            status,
            message: message.unwrap_or_else(|| format!("Error {}", status)),
        }
    }

    /// HTTP status of a `Status` error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::status(status.as_u16(), None)
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_fallback() {
        assert_eq!(ApiError::status(500, None).to_string(), "Error 500");
        assert_eq!(
            ApiError::status(422, Some("Player is not on the roster".to_string())).to_string(),
            "Player is not on the roster"
        );
    }

    #[test]
    fn test_status_code() {
        assert_eq!(ApiError::status(404, None).status_code(), Some(404));
        assert_eq!(ApiError::Network("timed out".to_string()).status_code(), None);
    }
}
