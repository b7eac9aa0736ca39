// Visual Nuts - number labels and country language statistics
// Re-export public modules and types

pub mod cli;
pub mod config;
pub mod error;
pub mod languages;
pub mod logging;
pub mod models;
pub mod numbers;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use languages::LanguageReport;
pub use models::{CountryRecord, NumberLabel};
pub use numbers::{NumberRange, classify};
