//! Error types for the recommendation engine.

use qdance_models::{DanceStyle, EmotionLabel};
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during analysis or engine construction.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The video produced no motion samples at all (empty or corrupt input).
    #[error("No motion samples to analyze")]
    NoMotionSamples,

    /// The affinity matrix is missing a weight for a recognized label.
    /// Caught at recommender construction, never per-request.
    #[error("Affinity matrix missing weight for {style} x {label}")]
    IncompleteAffinity {
        style: DanceStyle,
        label: EmotionLabel,
    },

    /// The coupling matrix is missing a coefficient for a recognized label.
    #[error("Coupling matrix missing coefficient for {style} x {label}")]
    IncompleteCoupling {
        style: DanceStyle,
        label: EmotionLabel,
    },

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// The blocking analysis task panicked or was cancelled.
    #[error("Analysis task failed: {0}")]
    TaskFailed(String),
}

impl EngineError {
    /// Create an invalid-configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
