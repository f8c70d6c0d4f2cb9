use chrono::Utc;

use crate::application::watcher::ports::{Notifier, PageSource, StatusStore};
use crate::domain::errors::WatcherError;
use crate::domain::models::{InvocationBody, InvocationResult, ServiceStatus};
use crate::domain::services::StatusExtractor;
use crate::utils::logging;

/// Timestamp format for current_time and last_update (ISO-8601 UTC)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Orchestrates one check-and-notify cycle
pub struct StatusWatcher<S, P, N> {
    store: S,
    page: P,
    notifier: N,
    record_id: String,
}

impl<S, P, N> StatusWatcher<S, P, N>
where
    S: StatusStore,
    P: PageSource,
    N: Notifier,
{
    /// Create a new StatusWatcher
    pub fn new(store: S, page: P, notifier: N, record_id: String) -> Self {
        Self {
            store,
            page,
            notifier,
            record_id,
        }
    }

    /// Run one invocation
    ///
    /// The state read precedes the page fetch, and on change the store
    /// write precedes the notification. A notification failure after a
    /// successful write leaves the state updated with no notification
    /// sent; there is no rollback.
    pub async fn run(&self) -> Result<InvocationResult, WatcherError> {
        let current_time = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        let record = self
            .store
            .get_status(&self.record_id)
            .await
            .map_err(WatcherError::StateRead)?;
        let last_status = record.last_status;

        let page = self.page.fetch_status_page().await?;
        logging::log_info("Request made");

        let style = StatusExtractor::extract_status_style(&page)?;
        let current_status = ServiceStatus::classify(&style);

        if current_status != last_status {
            logging::log_info(&format!(
                "Changes found! Current status: {}",
                current_status
            ));
            self.store
                .update_status(&self.record_id, current_status, &current_time)
                .await
                .map_err(WatcherError::StateWrite)?;
            self.notifier
                .send_message(current_status.change_message())
                .await?;
        } else {
            logging::log_info(&format!(
                "Nothing changed. Current status: {}",
                current_status
            ));
        }

        let body = InvocationBody {
            current_status,
            current_time,
            last_status,
        };

        Ok(InvocationResult::ok(&body)?)
    }
}
