//! Analysis pipeline orchestration.
//!
//! One logical request = one video's motion samples (plus the external
//! facial distribution) in, one cached [`AnalysisResult`] out. All pipeline
//! components are stateless and shared read-only across concurrent requests;
//! the result cache is the only shared mutable state.

use std::sync::Arc;

use qdance_models::{AnalysisResult, EmotionReport, FacialDistribution, MotionSample};
use tracing::{debug, info};

use crate::cache::ResultCache;
use crate::classical::ClassicalRecommender;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::inference::{EmotionFuser, MovementEmotionInferrer};
use crate::matrices::{AffinityMatrix, CouplingMatrix};
use crate::motion::MotionFeatureExtractor;
use crate::quantum::QuantumInspiredRecommender;

/// The synchronous feature-to-recommendation pipeline.
///
/// Pure given its construction-time configuration; cloned into blocking
/// tasks by [`DanceAnalyzer`].
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    extractor: MotionFeatureExtractor,
    inferrer: MovementEmotionInferrer,
    fuser: EmotionFuser,
    classical: ClassicalRecommender,
    quantum: QuantumInspiredRecommender,
}

impl AnalysisPipeline {
    pub fn new(
        config: &EngineConfig,
        affinity: AffinityMatrix,
        coupling: CouplingMatrix,
    ) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            extractor: MotionFeatureExtractor::new(config.frame_stride),
            inferrer: MovementEmotionInferrer::new(),
            fuser: EmotionFuser::new(config.movement_weight, config.facial_weight),
            classical: ClassicalRecommender::new(affinity, config.top_k)?,
            quantum: QuantumInspiredRecommender::new(
                coupling,
                config.top_k,
                config.phase_spread,
            )?,
        })
    }

    /// Run the full analysis for one video.
    ///
    /// A missing facial distribution degrades to the uniform fallback; an
    /// empty motion sequence surfaces as [`EngineError::NoMotionSamples`].
    pub fn run(
        &self,
        video_id: &str,
        samples: &[MotionSample],
        facial: Option<FacialDistribution>,
    ) -> EngineResult<AnalysisResult> {
        let features = self.extractor.extract(samples)?;
        let movement = self.inferrer.infer(&features);
        let facial = match facial {
            Some(dist) => dist,
            None => {
                debug!(video_id, "no facial distribution supplied, using uniform fallback");
                FacialDistribution::uniform()
            }
        };
        let combined = self.fuser.fuse(&movement, &facial);

        let classical = self.classical.recommend(&combined);
        let quantum = self.quantum.recommend(&combined);

        Ok(AnalysisResult::new(
            video_id,
            EmotionReport {
                facial,
                movement,
                combined,
            },
            classical,
            quantum,
        ))
    }
}

/// Shared analysis service: the pipeline plus the per-video result cache.
pub struct DanceAnalyzer {
    pipeline: AnalysisPipeline,
    cache: Arc<ResultCache>,
}

impl DanceAnalyzer {
    /// Build an analyzer with the built-in matrices.
    pub fn new(config: &EngineConfig) -> EngineResult<Self> {
        Self::with_matrices(config, AffinityMatrix::builtin(), CouplingMatrix::builtin())
    }

    /// Build an analyzer with externally supplied matrices (research
    /// overrides). Matrix completeness is validated here, at startup.
    pub fn with_matrices(
        config: &EngineConfig,
        affinity: AffinityMatrix,
        coupling: CouplingMatrix,
    ) -> EngineResult<Self> {
        Ok(Self {
            pipeline: AnalysisPipeline::new(config, affinity, coupling)?,
            cache: Arc::new(ResultCache::new(config.cache_capacity, config.cache_ttl())),
        })
    }

    /// The shared result cache.
    pub fn cache(&self) -> &Arc<ResultCache> {
        &self.cache
    }

    /// Analyze one video, serving repeated queries from the cache.
    ///
    /// The CPU-bound pipeline runs on the blocking pool so request-handling
    /// tasks are never starved. Failed analyses leave the cache untouched.
    pub async fn analyze(
        &self,
        video_id: &str,
        samples: Vec<MotionSample>,
        facial: Option<FacialDistribution>,
    ) -> EngineResult<AnalysisResult> {
        if let Some(hit) = self.cache.get(video_id).await {
            debug!(video_id, "serving cached analysis");
            return Ok(hit);
        }

        let pipeline = self.pipeline.clone();
        let id = video_id.to_string();
        let result = tokio::task::spawn_blocking(move || pipeline.run(&id, &samples, facial))
            .await
            .map_err(|e| EngineError::TaskFailed(e.to_string()))??;

        self.cache.put(video_id, result.clone()).await;
        info!(
            video_id,
            classical_top = %result.classical_recommendations.recommendations[0].dance_style,
            quantum_top = %result.quantum_recommendations.recommendations[0].dance_style,
            "analysis complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dance_like_samples(count: usize) -> Vec<MotionSample> {
        (0..count)
            .map(|i| {
                let t = i as f64 * 0.2;
                MotionSample::from_points(&[
                    (0.5 + 0.3 * t.sin(), 0.4 + 0.1 * (2.0 * t).cos()),
                    (0.4 + 0.2 * (1.5 * t).cos(), 0.6 + 0.2 * t.sin()),
                    (0.6 + 0.25 * (0.7 * t).sin(), 0.5),
                ])
            })
            .collect()
    }

    #[tokio::test]
    async fn test_analyze_and_cache() {
        let analyzer = DanceAnalyzer::new(&EngineConfig::default()).unwrap();
        let samples = dance_like_samples(60);

        let first = analyzer
            .analyze("vid-1", samples.clone(), None)
            .await
            .unwrap();
        assert_eq!(first.video_id, "vid-1");
        assert_eq!(first.classical_recommendations.recommendations.len(), 5);
        assert_eq!(first.quantum_recommendations.recommendations.len(), 5);

        // Second call is served from cache, timestamp included.
        let second = analyzer.analyze("vid-1", samples, None).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(analyzer.cache().len().await, 1);
    }

    #[tokio::test]
    async fn test_empty_video_fails_without_touching_cache() {
        let analyzer = DanceAnalyzer::new(&EngineConfig::default()).unwrap();
        let err = analyzer.analyze("vid-bad", Vec::new(), None).await;
        assert!(matches!(err, Err(EngineError::NoMotionSamples)));
        assert!(analyzer.cache().is_empty().await);
    }

    #[tokio::test]
    async fn test_missing_facial_uses_uniform_fallback() {
        let analyzer = DanceAnalyzer::new(&EngineConfig::default()).unwrap();
        let result = analyzer
            .analyze("vid-2", dance_like_samples(40), None)
            .await
            .unwrap();
        let facial = &result.emotions.facial;
        assert!((facial.total_weight() - 1.0).abs() < 1e-9);
        let weights: Vec<f64> = facial.iter().map(|(_, w)| w).collect();
        assert!(weights.windows(2).all(|w| (w[0] - w[1]).abs() < 1e-12));
    }
}
