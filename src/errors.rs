use thiserror::Error;

/// Error type that captures bill parsing, validation, and configuration failures.
#[derive(Debug, Error)]
pub enum BillError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Unknown recurrence: {0}")]
    UnknownRecurrence(String),
    #[error("Unknown bill type: {0}")]
    UnknownBillType(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown status: {0}")]
    UnknownStatus(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BillError>;
