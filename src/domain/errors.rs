use std::error::Error;
use std::fmt;

use crate::infrastructure::page::FetchError;
use crate::infrastructure::persistence::error::DbError;
use crate::infrastructure::telegram::NotifyError;

/// Error type for status extraction from the remote page markup
#[derive(Debug)]
pub enum ExtractionError {
    /// An expected element is absent from the page
    ElementNotFound(String),
    /// The innermost element has no style attribute
    AttributeMissing(String),
    /// A structural selector failed to parse
    SelectorError(String),
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::ElementNotFound(what) => write!(f, "Element not found: {}", what),
            ExtractionError::AttributeMissing(what) => write!(f, "Attribute missing: {}", what),
            ExtractionError::SelectorError(msg) => write!(f, "Selector error: {}", msg),
        }
    }
}

impl Error for ExtractionError {}

/// Error type for a watcher invocation
///
/// None of these are handled locally; every failure aborts the invocation
/// and surfaces to the invoking scheduler.
#[derive(Debug)]
pub enum WatcherError {
    /// Store unreachable or record missing on the initial read
    StateRead(DbError),
    /// Network failure or timeout fetching the status page
    Fetch(FetchError),
    /// Expected markup absent from the fetched page
    Extraction(ExtractionError),
    /// Store unreachable on the status update
    StateWrite(DbError),
    /// Network failure or rejected request sending the notification
    Notify(NotifyError),
    /// Failure encoding the invocation result
    Serialization(serde_json::Error),
}

impl fmt::Display for WatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatcherError::StateRead(e) => write!(f, "State read error: {}", e),
            WatcherError::Fetch(e) => write!(f, "Page fetch error: {}", e),
            WatcherError::Extraction(e) => write!(f, "Extraction error: {}", e),
            WatcherError::StateWrite(e) => write!(f, "State write error: {}", e),
            WatcherError::Notify(e) => write!(f, "Notification error: {}", e),
            WatcherError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl Error for WatcherError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WatcherError::StateRead(e) => Some(e),
            WatcherError::Fetch(e) => Some(e),
            WatcherError::Extraction(e) => Some(e),
            WatcherError::StateWrite(e) => Some(e),
            WatcherError::Notify(e) => Some(e),
            WatcherError::Serialization(e) => Some(e),
        }
    }
}

impl From<FetchError> for WatcherError {
    fn from(error: FetchError) -> Self {
        WatcherError::Fetch(error)
    }
}

impl From<ExtractionError> for WatcherError {
    fn from(error: ExtractionError) -> Self {
        WatcherError::Extraction(error)
    }
}

impl From<NotifyError> for WatcherError {
    fn from(error: NotifyError) -> Self {
        WatcherError::Notify(error)
    }
}

impl From<serde_json::Error> for WatcherError {
    fn from(error: serde_json::Error) -> Self {
        WatcherError::Serialization(error)
    }
}
