//! Error types for the experiment harness.

use drunkwalk_core::WalkError;
use thiserror::Error;

/// Errors that can occur while configuring or running experiments.
#[derive(Debug, Error)]
pub enum SimError {
    /// A walk or statistics call failed
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No experiment goes by this name
    #[error("Unknown experiment: {0}")]
    UnknownExperiment(String),

    /// Runner settings are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SimError {
    /// Creates an invalid configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
