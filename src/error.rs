//! Engine error types

use thiserror::Error;

/// Errors raised by the engine core.
///
/// Everything here is caller-recoverable: the core never mutates state
/// before validation, so there is nothing to roll back.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Degenerate or out-of-range numeric input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
