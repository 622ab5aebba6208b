//! Error types for Moltbook API operations.

use thiserror::Error;

/// Errors reported by the social-network client.
#[derive(Debug, Error)]
pub enum SocialError {
    #[error("API key not set. Please register or set an API key.")]
    MissingCredential,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("authentication failed (HTTP {status})")]
    AuthenticationFailed { status: u16 },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("rate limited")]
    RateLimited,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// The server answered 2xx but reported `"success": false`.
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl SocialError {
    /// Map a non-success HTTP status and its body text to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => SocialError::AuthenticationFailed { status },
            404 => SocialError::NotFound(body),
            429 => SocialError::RateLimited,
            _ => SocialError::Status { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            SocialError::from_status(401, String::new()),
            SocialError::AuthenticationFailed { status: 401 }
        ));
        assert!(matches!(
            SocialError::from_status(403, String::new()),
            SocialError::AuthenticationFailed { status: 403 }
        ));
        assert!(matches!(
            SocialError::from_status(404, "no such post".into()),
            SocialError::NotFound(ref body) if body == "no such post"
        ));
        assert!(matches!(SocialError::from_status(429, String::new()), SocialError::RateLimited));
        assert!(matches!(
            SocialError::from_status(500, "boom".into()),
            SocialError::Status { status: 500, .. }
        ));
    }

    #[test]
    fn test_rejected_message_has_no_http_status() {
        let message = SocialError::Rejected("already voted".into()).to_string();
        assert_eq!(message, "request rejected: already voted");
        assert!(!message.contains("HTTP"));
    }

    #[test]
    fn test_missing_credential_message() {
        assert!(SocialError::MissingCredential.to_string().contains("API key not set"));
    }
}
