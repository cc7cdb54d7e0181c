//! Error types for the feed client.

use thiserror::Error;

/// A specialized Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur while fetching or parsing a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error {status} fetching {url}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// The feed URL.
        url: String,
    },

    /// The body is not a valid RSS channel.
    #[error("failed to parse feed: {message}")]
    Parse {
        /// Parser error message.
        message: String,
    },
}

impl FeedError {
    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            FeedError::Request(_) => 3,
            FeedError::Http { .. } => 2,
            FeedError::Parse { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_http() {
        let error = FeedError::Http {
            status: 503,
            url: "https://example.com/rss".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "HTTP error 503 fetching https://example.com/rss"
        );
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_display_parse() {
        let error = FeedError::Parse {
            message: "unexpected end of input".to_string(),
        };
        assert!(error.to_string().contains("unexpected end of input"));
        assert_eq!(error.exit_code(), 1);
    }
}
