use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookshelfError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookshelfError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status code {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BookshelfError {
    /// Network or HTTP level failure, including non-2xx responses.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            BookshelfError::Transport(_) | BookshelfError::Status { .. }
        )
    }
}

impl From<reqwest::Error> for BookshelfError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BookshelfError::Decode(err.to_string())
        } else {
            BookshelfError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BookshelfError {
    fn from(err: serde_json::Error) -> Self {
        BookshelfError::Decode(err.to_string())
    }
}

impl From<::config::ConfigError> for BookshelfError {
    fn from(err: ::config::ConfigError) -> Self {
        BookshelfError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts_as_transport() {
        let err = BookshelfError::Status {
            status: 503,
            url: "https://example.test/volumes/".to_string(),
        };
        assert!(err.is_transport());
        assert!(BookshelfError::Transport("connection reset".to_string()).is_transport());
    }

    #[test]
    fn test_payload_errors_are_not_transport() {
        assert!(!BookshelfError::MissingField("volumeInfo.title".to_string()).is_transport());
        assert!(!BookshelfError::Decode("expected value".to_string()).is_transport());
    }

    #[test]
    fn test_serde_json_error_maps_to_decode() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(BookshelfError::from(err), BookshelfError::Decode(_)));
    }

    #[test]
    fn test_display_includes_status_and_url() {
        let err = BookshelfError::Status {
            status: 404,
            url: "https://example.test/volumes/abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status code 404 from https://example.test/volumes/abc"
        );
    }
}
