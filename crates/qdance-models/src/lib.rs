//! Shared data models for the QuantumDance backend.
//!
//! This crate provides Serde-serializable types for:
//! - Emotion labels (facial, movement, and the combined basis)
//! - Emotion distributions and the fused emotion profile
//! - The dance-style catalog
//! - Motion samples and extracted movement features
//! - Recommendation lists, quantum properties, and the analysis result
//!   returned to the serving layer

pub mod dance_style;
pub mod emotion;
pub mod motion;
pub mod recommendation;

// Re-export common types
pub use dance_style::{DanceStyle, DanceStyleParseError};
pub use emotion::{
    CombinedEmotionProfile, EmotionLabel, EmotionParseError, FacialDistribution, FacialEmotion,
    MovementDistribution, MovementEmotion,
};
pub use motion::{LandmarkPoint, MotionFeatures, MotionSample};
pub use recommendation::{
    AnalysisResult, ClassicalReport, ComparisonSummary, EmotionReport, QuantumProperties,
    QuantumReport, Recommendation, RecommendationMethod,
};
