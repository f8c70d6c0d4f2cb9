use std::error::Error;
use std::fmt;

/// Error type for notification send operations
#[derive(Debug)]
pub enum NotifyError {
    /// Error from the reqwest HTTP client (network failure or timeout)
    HttpError(reqwest::Error),
    /// The Telegram API rejected the request
    ApiError(String),
    /// Client construction error
    ClientError(String),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::HttpError(e) => write!(f, "HTTP error: {}", e),
            NotifyError::ApiError(msg) => write!(f, "API error: {}", msg),
            NotifyError::ClientError(msg) => write!(f, "Client error: {}", msg),
        }
    }
}

impl Error for NotifyError {}

impl From<reqwest::Error> for NotifyError {
    fn from(error: reqwest::Error) -> Self {
        NotifyError::HttpError(error)
    }
}
