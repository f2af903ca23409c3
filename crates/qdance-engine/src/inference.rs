//! Movement-emotion inference and emotion fusion.

use qdance_models::{
    CombinedEmotionProfile, EmotionLabel, FacialDistribution, MotionFeatures, MovementDistribution,
    MovementEmotion,
};
use tracing::debug;

/// Acceleration variance above which motion starts reading as aggressive.
const AGGRESSIVE_THRESHOLD: f64 = 0.25;
/// Slope of the aggressive score above the threshold.
const AGGRESSIVE_SLOPE: f64 = 2.5;
/// Sub-threshold aggressive response.
const AGGRESSIVE_BASE_SLOPE: f64 = 1.6;
/// Baseline graceful score before the diversity term.
const GRACEFUL_BASELINE: f64 = 0.2;

/// Maps motion features to heuristic movement-emotion scores.
///
/// Each score is an independent magnitude clipped to [0,1]; the distribution
/// is deliberately not normalized, since movement scores and the facial
/// probability simplex are fused with different semantics downstream.
#[derive(Debug, Clone, Default)]
pub struct MovementEmotionInferrer;

impl MovementEmotionInferrer {
    pub fn new() -> Self {
        Self
    }

    /// Score all six movement emotions for the given features.
    pub fn infer(&self, features: &MotionFeatures) -> MovementDistribution {
        let v = features.average_velocity;
        let av = features.acceleration_variance;
        let pd = features.pose_diversity;

        let mut dist = MovementDistribution::new();

        // Energetic rises with velocity and acceleration variance.
        dist.set(MovementEmotion::Energetic, clip((2.0 * v + av) / 2.0));

        // Calm wants low velocity and steady (low-variance) motion.
        dist.set(MovementEmotion::Calm, clip(1.0 - (2.0 * v + av) / 2.0));

        // Aggressive responds sharply once acceleration variance passes the
        // threshold.
        let aggressive = if av > AGGRESSIVE_THRESHOLD {
            AGGRESSIVE_BASE_SLOPE * AGGRESSIVE_THRESHOLD
                + AGGRESSIVE_SLOPE * (av - AGGRESSIVE_THRESHOLD)
        } else {
            AGGRESSIVE_BASE_SLOPE * av
        };
        dist.set(MovementEmotion::Aggressive, clip(aggressive));

        // Graceful favors varied poses reached without jerky acceleration.
        dist.set(
            MovementEmotion::Graceful,
            clip(GRACEFUL_BASELINE + pd * (1.0 - clip(av))),
        );

        // Playful favors moderate velocity with high pose diversity.
        dist.set(MovementEmotion::Playful, clip((3.0 * pd + v) / 2.0));

        // Melancholic wants both low velocity and low diversity.
        dist.set(MovementEmotion::Melancholic, clip(1.0 - (v + pd)));

        debug!(?features, ?dist, "inferred movement emotions");
        dist
    }
}

fn clip(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Fuses movement and facial emotion signals into one combined profile.
///
/// Pure: `combined[label] = movement_weight * movement.get(label, 0)
/// + facial_weight * facial.get(label, 0)` over the 13-label union.
#[derive(Debug, Clone)]
pub struct EmotionFuser {
    movement_weight: f64,
    facial_weight: f64,
}

impl EmotionFuser {
    pub fn new(movement_weight: f64, facial_weight: f64) -> Self {
        Self {
            movement_weight,
            facial_weight,
        }
    }

    /// Fuse the two sources into a combined profile.
    ///
    /// A missing or all-zero facial distribution degrades to the uniform
    /// facial fallback instead of failing the analysis.
    pub fn fuse(
        &self,
        movement: &MovementDistribution,
        facial: &FacialDistribution,
    ) -> CombinedEmotionProfile {
        let fallback;
        let facial = if facial.total_weight() <= f64::EPSILON {
            fallback = FacialDistribution::uniform();
            &fallback
        } else {
            facial
        };

        EmotionLabel::ALL
            .iter()
            .map(|label| {
                let movement_part = label
                    .as_movement()
                    .map(|m| movement.get(m))
                    .unwrap_or(0.0);
                let facial_part = label.as_facial().map(|f| facial.get(f)).unwrap_or(0.0);
                (
                    *label,
                    self.movement_weight * movement_part + self.facial_weight * facial_part,
                )
            })
            .collect()
    }
}

impl Default for EmotionFuser {
    fn default() -> Self {
        Self::new(0.4, 0.6)
    }
}
