use std::io;
use thiserror::Error;

/// Custom error type for the systune application
#[derive(Error, Debug)]
pub enum SystuneError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Capability not available: {0}")]
    CapabilityUnavailable(String),

    #[error("Task error: {0}")]
    Task(String),

    #[error("Telemetry error: {0}")]
    Telemetry(String),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the systune application
pub type Result<T> = std::result::Result<T, SystuneError>;

impl SystuneError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SystuneError::Config(msg.into())
    }

    /// Create a capability-unavailable error
    pub fn capability_unavailable<S: Into<String>>(msg: S) -> Self {
        SystuneError::CapabilityUnavailable(msg.into())
    }

    /// Create a task error
    pub fn task<S: Into<String>>(msg: S) -> Self {
        SystuneError::Task(msg.into())
    }

    /// Create a telemetry error
    pub fn telemetry<S: Into<String>>(msg: S) -> Self {
        SystuneError::Telemetry(msg.into())
    }

    /// Create a TUI error
    pub fn tui<S: Into<String>>(msg: S) -> Self {
        SystuneError::Tui(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SystuneError::Other(msg.into())
    }
}
