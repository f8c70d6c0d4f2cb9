use status_watcher::application::watcher::StatusWatcher;
use status_watcher::config::AppConfig;
use status_watcher::infrastructure::page::PageClient;
use status_watcher::infrastructure::persistence::{DbPool, StatusRepository};
use status_watcher::infrastructure::telegram::TelegramClient;
use status_watcher::utils::logging;

#[tokio::main]
async fn main() {
    logging::init_logger();

    let config = AppConfig::from_env();

    let db_pool = match DbPool::new(&config).await {
        Ok(db_pool) => db_pool,
        Err(e) => {
            logging::log_error(&format!("Failed to connect to database: {}", e));
            std::process::exit(1);
        }
    };
    let repository = StatusRepository::new(db_pool.get_connection().clone());

    let page_client = match PageClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            logging::log_error(&format!("Failed to create page client: {}", e));
            std::process::exit(1);
        }
    };

    let telegram_client = match TelegramClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            logging::log_error(&format!("Failed to create Telegram client: {}", e));
            std::process::exit(1);
        }
    };

    let watcher = StatusWatcher::new(
        repository,
        page_client,
        telegram_client,
        config.watcher.record_id.clone(),
    );

    match watcher.run().await {
        Ok(result) => match serde_json::to_string(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                logging::log_error(&format!("Failed to encode result: {}", e));
                std::process::exit(1);
            }
        },
        Err(e) => {
            logging::log_error(&format!("Watcher invocation failed: {}", e));
            std::process::exit(1);
        }
    }
}
