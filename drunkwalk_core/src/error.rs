//! Error types for the walk simulation core.

use crate::walker::WalkerId;
use thiserror::Error;

/// Errors raised by Field registration, trial setup and policy lookup.
///
/// None of these are recoverable inside the core; they always propagate
/// to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// The walker is already registered in this field
    #[error("Duplicate walker: {0}")]
    DuplicateWalker(WalkerId),

    /// The walker was never registered in this field
    #[error("Walker not in field: {0}")]
    UnknownWalker(WalkerId),

    /// A trial or statistics argument is out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No step policy goes by this name
    #[error("Unknown step policy: {0}")]
    UnknownPolicy(String),
}

impl WalkError {
    /// Creates an invalid argument error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
