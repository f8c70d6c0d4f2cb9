//! Status Watcher
//!
//! One check-and-notify cycle: read the stored status, fetch the company
//! page, classify the extracted signal, and on change persist the new
//! status and send a notification.

pub mod ports;
pub mod processor;

pub use ports::{Notifier, PageSource, StatusStore};
pub use processor::StatusWatcher;
