//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// The business schedule is malformed (e.g. opening at or after closing).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A caller-supplied value is out of range (e.g. non-positive duration).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
