use thiserror::Error;

/// Failures of a leaderboard fetch
///
/// Every variant is terminal for the attempt; the caller shows
/// [`FetchError::user_message`] and offers a manual retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("authentication failed (HTTP 401)")]
    Unauthorized,

    #[error("access denied (HTTP 403)")]
    Forbidden,

    #[error("server error (HTTP {0})")]
    Server(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("response has no rows")]
    MissingRows,

    #[error("{0}")]
    Unclassified(String),
}

impl FetchError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            s if s >= 500 => Self::Server(s),
            s => Self::Unclassified(format!("unexpected HTTP status {}", s)),
        }
    }

    /// Message shown in the error banner
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Authentication failed. Please check your bearer token.",
            Self::Forbidden => "Access denied. Please check your permissions.",
            Self::Server(_) => "Server error. Please try again later.",
            Self::Network(_) => "Network error. Please check your connection.",
            Self::MissingRows | Self::Unclassified(_) => {
                "Failed to load leaderboard data. Please try again later."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(FetchError::from_status(401), FetchError::Unauthorized);
        assert_eq!(FetchError::from_status(403), FetchError::Forbidden);
        assert_eq!(FetchError::from_status(500), FetchError::Server(500));
        assert_eq!(FetchError::from_status(503), FetchError::Server(503));
        assert!(matches!(FetchError::from_status(404), FetchError::Unclassified(_)));
    }

    #[test]
    fn test_user_messages_distinguish_auth_failures() {
        assert_ne!(
            FetchError::Unauthorized.user_message(),
            FetchError::Forbidden.user_message()
        );
        assert_eq!(
            FetchError::MissingRows.user_message(),
            FetchError::Unclassified("x".into()).user_message()
        );
        assert!(FetchError::Network("reset".into()).user_message().starts_with("Network error"));
    }
}
