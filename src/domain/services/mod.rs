pub mod status_extractor;

pub use status_extractor::StatusExtractor;
