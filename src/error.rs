use std::num::ParseIntError;
use thiserror::Error;

/// Configuration problems that are reported instead of silently ignored
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a whole number, got '{value}'")]
    InvalidBound {
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Country data path is empty")]
    EmptyDataPath,

    #[error("Listed countries contain an empty country code")]
    EmptyCountryCode,
}
