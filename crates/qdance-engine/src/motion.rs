//! Movement feature extraction from per-frame motion samples.

use qdance_models::{MotionFeatures, MotionSample};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::stats::{mean, variance};

/// Upper bound on poses entering the pairwise diversity pass, so cost stays
/// bounded on long videos.
const MAX_DIVERSITY_POSES: usize = 64;

/// Extracts scalar movement features from an ordered motion sample sequence.
///
/// Samples every Nth frame (the configured stride) and aggregates:
/// - `average_velocity`: mean frame-to-frame landmark displacement, scaled
///   into [0,1] by the peak displacement when the peak exceeds 1
/// - `acceleration_variance`: variance of the displacement series' first
///   difference (the second difference of position)
/// - `pose_diversity`: mean pairwise distance between unit-normalized pose
///   vectors
#[derive(Debug, Clone)]
pub struct MotionFeatureExtractor {
    stride: usize,
}

impl MotionFeatureExtractor {
    pub fn new(stride: usize) -> Self {
        Self {
            stride: stride.max(1),
        }
    }

    /// Extract features from the full sample sequence.
    ///
    /// Zero samples is an input failure; fewer than two sampled frames
    /// yields all-zero features without failing.
    pub fn extract(&self, samples: &[MotionSample]) -> EngineResult<MotionFeatures> {
        if samples.is_empty() {
            return Err(EngineError::NoMotionSamples);
        }

        let sampled: Vec<&MotionSample> = samples.iter().step_by(self.stride).collect();
        if sampled.len() < 2 {
            return Ok(MotionFeatures::ZERO);
        }

        let displacements: Vec<f64> = sampled
            .windows(2)
            .map(|w| w[1].displacement_from(w[0]))
            .collect();

        let peak = displacements.iter().cloned().fold(0.0_f64, f64::max);
        let average_velocity = mean(&displacements) / peak.max(1.0);

        let accelerations: Vec<f64> = displacements
            .windows(2)
            .map(|w| w[1] - w[0])
            .collect();
        let acceleration_variance = variance(&accelerations);

        let pose_diversity = pose_diversity(&sampled);

        let features =
            MotionFeatures::new(average_velocity, acceleration_variance, pose_diversity);
        debug!(
            frames = samples.len(),
            sampled = sampled.len(),
            avg_velocity = features.average_velocity,
            accel_variance = features.acceleration_variance,
            pose_diversity = features.pose_diversity,
            "extracted motion features"
        );

        Ok(features)
    }
}

/// Mean pairwise Euclidean distance between unit-normalized pose vectors.
fn pose_diversity(sampled: &[&MotionSample]) -> f64 {
    let poses: Vec<Vec<f64>> = sampled
        .iter()
        .take(MAX_DIVERSITY_POSES)
        .map(|s| normalize(s.pose_vector()))
        .filter(|v| !v.is_empty())
        .collect();

    if poses.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut pairs = 0usize;
    for i in 0..poses.len() {
        for j in (i + 1)..poses.len() {
            total += euclidean(&poses[i], &poses[j]);
            pairs += 1;
        }
    }
    total / pairs as f64
}

fn normalize(mut v: Vec<f64>) -> Vec<f64> {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in &mut v {
            *x /= norm;
        }
    }
    v
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    a[..n]
        .iter()
        .zip(&b[..n])
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
