pub mod client;
pub mod error;

pub use client::PageClient;
pub use error::FetchError;
