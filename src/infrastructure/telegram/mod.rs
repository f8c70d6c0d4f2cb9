pub mod client;
pub mod error;

pub use client::TelegramClient;
pub use error::NotifyError;
