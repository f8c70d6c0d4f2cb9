use std::error::Error;
use std::fmt;

/// Error type for status page fetch operations
#[derive(Debug)]
pub enum FetchError {
    /// Error from the reqwest HTTP client (network failure or timeout)
    HttpError(reqwest::Error),
    /// Client construction error
    ClientError(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::HttpError(e) => write!(f, "HTTP error: {}", e),
            FetchError::ClientError(msg) => write!(f, "Client error: {}", msg),
        }
    }
}

impl Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::HttpError(error)
    }
}
