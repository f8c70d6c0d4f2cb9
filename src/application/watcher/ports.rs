use async_trait::async_trait;

use crate::domain::models::{ServiceStatus, StatusRecord};
use crate::infrastructure::page::FetchError;
use crate::infrastructure::persistence::error::DbError;
use crate::infrastructure::telegram::NotifyError;

/// Defines the key-value store capability of the watcher
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Read the status record by its fixed identifier
    async fn get_status(&self, record_id: &str) -> Result<StatusRecord, DbError>;

    /// Rewrite the status record, setting status and timestamp together
    async fn update_status(
        &self,
        record_id: &str,
        status: ServiceStatus,
        timestamp: &str,
    ) -> Result<(), DbError>;
}

/// Defines the page fetch capability of the watcher
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the raw HTML of the status page
    async fn fetch_status_page(&self) -> Result<String, FetchError>;
}

/// Defines the outbound notification capability of the watcher
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a single notification message
    async fn send_message(&self, text: &str) -> Result<(), NotifyError>;
}
