use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmoteError>;

#[derive(Debug, Error)]
pub enum EmoteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} fetching {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("unexpected response shape from {url}: {message}")]
    UnexpectedShape { url: String, message: String },
}

impl EmoteError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Http(_) | Self::UnexpectedStatus { .. } => 2,
            Self::Json(_) | Self::UnexpectedShape { .. } => 3,
            Self::Io(_) => 1,
        }
    }

    #[must_use]
    pub fn shape(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            url: url.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EmoteError;

    #[test]
    fn fetch_failures_share_one_exit_code() {
        let error = EmoteError::UnexpectedStatus {
            url: "http://example.invalid/index".to_string(),
            status: 503,
        };
        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.to_string(),
            "unexpected status 503 fetching http://example.invalid/index"
        );
    }

    #[test]
    fn shape_constructor_carries_url_and_message() {
        let error = EmoteError::shape("http://example.invalid/manifest", "expected an array");
        assert_eq!(error.exit_code(), 3);
        let message = error.to_string();
        assert!(message.contains("http://example.invalid/manifest"));
        assert!(message.contains("expected an array"));
    }

    #[test]
    fn io_errors_use_generic_exit_code() {
        let error = EmoteError::Io(std::io::Error::other("disk full"));
        assert_eq!(error.exit_code(), 1);
    }
}
