use crate::domain::models::status::ServiceStatus;

/// Domain model for the single persisted watcher state row
#[derive(Debug, Clone)]
pub struct StatusRecord {
    /// Fixed record identifier
    pub id: String,

    /// Last observed service status
    pub last_status: ServiceStatus,

    /// Timestamp of the last status change (ISO-8601 UTC)
    pub last_update: String,
}

impl StatusRecord {
    /// Create a new StatusRecord
    pub fn new(id: String, last_status: ServiceStatus, last_update: String) -> Self {
        Self {
            id,
            last_status,
            last_update,
        }
    }
}
