use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::application::watcher::ports::StatusStore;
use crate::domain::models::{ServiceStatus, StatusRecord};
use crate::infrastructure::persistence::entities::status_record;
use crate::infrastructure::persistence::error::DbError;
use crate::utils::logging;

/// Repository for the watcher status record
#[derive(Clone)]
pub struct StatusRepository {
    conn: DatabaseConnection,
}

impl StatusRepository {
    /// Create a new StatusRepository
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get the status record by its fixed identifier
    ///
    /// A missing record is an error; no default status is assumed.
    pub async fn get_status(&self, record_id: &str) -> Result<StatusRecord, DbError> {
        let result = status_record::Entity::find_by_id(record_id.to_string())
            .one(&self.conn)
            .await?;

        let model = result.ok_or_else(|| DbError::RecordNotFound(record_id.to_string()))?;

        let last_status = ServiceStatus::parse(&model.last_status)
            .ok_or_else(|| DbError::InvalidStatus(model.last_status.clone()))?;

        Ok(StatusRecord::new(model.id, last_status, model.last_update))
    }

    /// Update the status record with one call setting both fields
    pub async fn update_status(
        &self,
        record_id: &str,
        status: ServiceStatus,
        timestamp: &str,
    ) -> Result<(), DbError> {
        logging::log_info("Update status");

        let record = status_record::ActiveModel {
            id: Set(record_id.to_string()),
            last_status: Set(status.as_str().to_string()),
            last_update: Set(timestamp.to_string()),
        };

        record.update(&self.conn).await?;

        Ok(())
    }
}

#[async_trait]
impl StatusStore for StatusRepository {
    async fn get_status(&self, record_id: &str) -> Result<StatusRecord, DbError> {
        StatusRepository::get_status(self, record_id).await
    }

    async fn update_status(
        &self,
        record_id: &str,
        status: ServiceStatus,
        timestamp: &str,
    ) -> Result<(), DbError> {
        StatusRepository::update_status(self, record_id, status, timestamp).await
    }
}
