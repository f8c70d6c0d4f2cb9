use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

use crate::application::watcher::ports::Notifier;
use crate::config::AppConfig;
use crate::infrastructure::telegram::error::NotifyError;
use crate::utils::logging;

/// Base URL of the Telegram bot API
const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Client for sending notifications via the Telegram bot API
pub struct TelegramClient {
    client: Client,
    api_token: String,
    chat_id: String,
}

impl TelegramClient {
    /// Create a new Telegram client
    pub fn new(config: &AppConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5)) // 5 second timeout
            .build()
            .map_err(|e| {
                NotifyError::ClientError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(TelegramClient {
            client,
            api_token: config.telegram.api_token.clone(),
            chat_id: config.telegram.chat_id.clone(),
        })
    }
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn send_message(&self, text: &str) -> Result<(), NotifyError> {
        logging::log_info("Send Message");

        let api_url = format!("{}/bot{}/sendMessage", TELEGRAM_API_BASE, self.api_token);

        let response = self
            .client
            .post(&api_url)
            .json(&json!({
                "chat_id": self.chat_id,
                "text": text,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::ApiError(format!(
                "Telegram returned error status: {}",
                status
            )));
        }

        Ok(())
    }
}
