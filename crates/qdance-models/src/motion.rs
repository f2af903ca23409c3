//! Motion samples and extracted movement features.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A 2D landmark position in normalized frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
}

impl LandmarkPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &LandmarkPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One frame's worth of motion observations.
///
/// Landmarks may come from pose estimation or from tracked optical-flow
/// points; the extractor only assumes positional consistency between
/// consecutive samples.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct MotionSample {
    pub landmarks: Vec<LandmarkPoint>,
}

impl MotionSample {
    pub fn new(landmarks: Vec<LandmarkPoint>) -> Self {
        Self { landmarks }
    }

    pub fn from_points(points: &[(f64, f64)]) -> Self {
        Self {
            landmarks: points
                .iter()
                .map(|(x, y)| LandmarkPoint::new(*x, *y))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Mean landmark displacement magnitude relative to a previous sample.
    ///
    /// Only the landmarks present in both samples contribute; returns 0.0
    /// when either sample is empty.
    pub fn displacement_from(&self, prev: &MotionSample) -> f64 {
        let n = self.landmarks.len().min(prev.landmarks.len());
        if n == 0 {
            return 0.0;
        }
        let total: f64 = self.landmarks[..n]
            .iter()
            .zip(&prev.landmarks[..n])
            .map(|(a, b)| a.distance_to(b))
            .sum();
        total / n as f64
    }

    /// Landmark coordinates flattened into a single pose vector.
    pub fn pose_vector(&self) -> Vec<f64> {
        self.landmarks
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect()
    }
}

/// Scalar movement features aggregated over one analyzed video.
///
/// Immutable once computed; all fields are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MotionFeatures {
    /// Mean frame-to-frame displacement magnitude, scaled into [0,1].
    pub average_velocity: f64,
    /// Variance of the second difference of the displacement series.
    pub acceleration_variance: f64,
    /// Mean pairwise distance between normalized pose vectors.
    pub pose_diversity: f64,
}

impl MotionFeatures {
    /// Features for a sequence too short to measure motion.
    pub const ZERO: MotionFeatures = MotionFeatures {
        average_velocity: 0.0,
        acceleration_variance: 0.0,
        pose_diversity: 0.0,
    };

    pub fn new(average_velocity: f64, acceleration_variance: f64, pose_diversity: f64) -> Self {
        Self {
            average_velocity,
            acceleration_variance,
            pose_diversity,
        }
    }
}

impl Default for MotionFeatures {
    fn default() -> Self {
        Self::ZERO
    }
}
