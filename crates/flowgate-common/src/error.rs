//! Error types for FlowGate

use thiserror::Error;

/// FlowGate error type
#[derive(Error, Debug)]
pub enum FlowgateError {
    /// Configuration error
    #[error("config error: {0}")]
    ConfigError(String),
}

/// Result type for FlowGate
pub type FlowgateResult<T> = Result<T, FlowgateError>;
