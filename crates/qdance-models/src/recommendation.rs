//! Recommendation and analysis result models.
//!
//! These are the JSON shapes consumed by the presentation layer; field names
//! are a de facto wire contract and must stay stable.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dance_style::DanceStyle;
use crate::emotion::{CombinedEmotionProfile, FacialDistribution, MovementDistribution};

/// Which scoring paradigm produced a recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationMethod {
    Classical,
    Quantum,
}

/// One ranked dance-style suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    pub dance_style: DanceStyle,
    /// Score in [0,1]; for the quantum model this is the raw measurement
    /// probability for the style.
    pub score: f64,
    pub confidence: f64,
    pub reasoning: String,
    /// Measurement probability, echoed separately for the quantum list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum_amplitude: Option<f64>,
}

impl Recommendation {
    pub fn new(dance_style: DanceStyle, score: f64, reasoning: impl Into<String>) -> Self {
        Self {
            dance_style,
            score,
            confidence: score.min(1.0),
            reasoning: reasoning.into(),
            quantum_amplitude: None,
        }
    }

    /// Tag this recommendation with its measurement probability.
    pub fn with_quantum_amplitude(mut self, amplitude: f64) -> Self {
        self.quantum_amplitude = Some(amplitude);
        self
    }
}

/// Derived metrics of the encoded quantum state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuantumProperties {
    /// Shannon entropy of the amplitude-squared distribution, in bits.
    pub superposition_entropy: f64,
    /// Cross-term mass of the coupling-weighted amplitudes over the top
    /// styles; relative magnitude, no fixed upper bound.
    pub entanglement_strength: f64,
    /// Normalized off-diagonal mass of the state's outer product, in [0,1].
    pub coherence: f64,
}

/// Output of the classical weighted model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClassicalReport {
    pub recommendations: Vec<Recommendation>,
    pub method: RecommendationMethod,
    /// Standard deviation of the returned scores.
    pub diversity_score: f64,
}

/// Output of the quantum-inspired model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuantumReport {
    pub recommendations: Vec<Recommendation>,
    pub method: RecommendationMethod,
    pub quantum_properties: QuantumProperties,
}

/// Emotion breakdown returned alongside the recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EmotionReport {
    pub facial: FacialDistribution,
    pub movement: MovementDistribution,
    pub combined: CombinedEmotionProfile,
}

/// Side-by-side comparison highlights for the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComparisonSummary {
    pub classical_diversity: f64,
    pub quantum_coherence: f64,
}

/// The full analysis result for one video: emotion profile plus both
/// recommendation lists. This is the object cached per video id and served
/// to the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    pub video_id: String,
    pub emotions: EmotionReport,
    pub classical_recommendations: ClassicalReport,
    pub quantum_recommendations: QuantumReport,
    pub comparison: ComparisonSummary,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Assemble a result; the comparison summary is derived from the two
    /// reports.
    pub fn new(
        video_id: impl Into<String>,
        emotions: EmotionReport,
        classical: ClassicalReport,
        quantum: QuantumReport,
    ) -> Self {
        let comparison = ComparisonSummary {
            classical_diversity: classical.diversity_score,
            quantum_coherence: quantum.quantum_properties.coherence,
        };
        Self {
            video_id: video_id.into(),
            emotions,
            classical_recommendations: classical,
            quantum_recommendations: quantum,
            comparison,
            analyzed_at: Utc::now(),
        }
    }
}
