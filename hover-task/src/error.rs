//! Errors raised by the hover task.
use thiserror::Error;

/// Errors raised by the hover task.
#[derive(Error, Debug, PartialEq)]
pub enum TaskError {
    /// The task configuration cannot produce valid rewards or observations.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The rotor command is malformed or out of bounds.
    #[error("Invalid action: {0}")]
    InvalidAction(String),
}
