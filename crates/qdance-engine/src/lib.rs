//! Emotion inference and dual-paradigm dance recommendation engine.
//!
//! This crate turns per-frame motion observations and an externally supplied
//! facial emotion distribution into ranked dance-style suggestions under two
//! scoring paradigms:
//! - A classical weighted model (affinity dot products)
//! - A quantum-inspired probabilistic model (complex amplitudes, coupling,
//!   measurement probabilities)
//!
//! Pipeline: motion samples -> feature extraction -> movement-emotion
//! inference -> fusion with the facial distribution -> both recommenders ->
//! cached analysis result.

pub mod analyzer;
pub mod cache;
pub mod classical;
pub mod config;
pub mod error;
pub mod inference;
pub mod matrices;
pub mod motion;
pub mod quantum;

mod stats;

// Re-export common types
pub use analyzer::{AnalysisPipeline, DanceAnalyzer};
pub use cache::ResultCache;
pub use classical::ClassicalRecommender;
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use inference::{EmotionFuser, MovementEmotionInferrer};
pub use matrices::{AffinityMatrix, CouplingMatrix};
pub use motion::MotionFeatureExtractor;
pub use quantum::QuantumInspiredRecommender;
