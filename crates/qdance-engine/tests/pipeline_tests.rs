//! End-to-end pipeline integration tests.

use qdance_engine::{DanceAnalyzer, EngineConfig, EngineError};
use qdance_models::{FacialDistribution, FacialEmotion, MotionSample};
use std::sync::Arc;

/// Fast, varied synthetic motion resembling an energetic dancer.
fn energetic_samples(count: usize) -> Vec<MotionSample> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 0.5;
            MotionSample::from_points(&[
                (0.5 + 0.4 * t.sin(), 0.3 + 0.3 * (2.0 * t).cos()),
                (0.3 + 0.35 * (1.3 * t).cos(), 0.7 + 0.3 * (0.8 * t).sin()),
                (0.7 + 0.3 * (2.7 * t).sin(), 0.5 + 0.25 * t.cos()),
            ])
        })
        .collect()
}

/// Nearly still motion.
fn still_samples(count: usize) -> Vec<MotionSample> {
    (0..count)
        .map(|i| {
            let jitter = i as f64 * 1e-6;
            MotionSample::from_points(&[(0.5 + jitter, 0.5), (0.45, 0.55), (0.55, 0.55)])
        })
        .collect()
}

fn happy_facial() -> FacialDistribution {
    [
        (FacialEmotion::Happy, 0.9),
        (FacialEmotion::Surprise, 0.1),
    ]
    .into_iter()
    .collect()
}

#[tokio::test]
async fn test_full_pipeline_shape() {
    let analyzer = DanceAnalyzer::new(&EngineConfig::default()).unwrap();
    let result = analyzer
        .analyze("vid-shape", energetic_samples(100), Some(happy_facial()))
        .await
        .unwrap();

    assert_eq!(result.video_id, "vid-shape");
    assert_eq!(result.classical_recommendations.recommendations.len(), 5);
    assert_eq!(result.quantum_recommendations.recommendations.len(), 5);

    for rec in result
        .classical_recommendations
        .recommendations
        .iter()
        .chain(&result.quantum_recommendations.recommendations)
    {
        assert!((0.0..=1.0).contains(&rec.score));
        assert!(!rec.reasoning.is_empty());
    }

    // Comparison summary mirrors the two reports.
    assert_eq!(
        result.comparison.classical_diversity,
        result.classical_recommendations.diversity_score
    );
    assert_eq!(
        result.comparison.quantum_coherence,
        result.quantum_recommendations.quantum_properties.coherence
    );
}

#[tokio::test]
async fn test_wire_contract_field_names() {
    let analyzer = DanceAnalyzer::new(&EngineConfig::default()).unwrap();
    let result = analyzer
        .analyze("vid-wire", energetic_samples(80), Some(happy_facial()))
        .await
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["emotions"]["facial"].is_object());
    assert!(json["emotions"]["movement"].is_object());
    assert!(json["emotions"]["combined"].is_object());
    assert_eq!(json["classical_recommendations"]["method"], "classical");
    assert_eq!(json["quantum_recommendations"]["method"], "quantum");
    assert!(json["quantum_recommendations"]["quantum_properties"]["superposition_entropy"]
        .is_number());
    assert!(json["comparison"]["quantum_coherence"].is_number());

    let first = &json["classical_recommendations"]["recommendations"][0];
    assert!(first["dance_style"].is_string());
    assert!(first["score"].is_number());
    assert!(first["reasoning"].is_string());
}

#[tokio::test]
async fn test_energetic_video_with_happy_face() {
    let analyzer = DanceAnalyzer::new(&EngineConfig::default()).unwrap();
    let result = analyzer
        .analyze("vid-energy", energetic_samples(120), Some(happy_facial()))
        .await
        .unwrap();

    // Faster motion must read more energetic and less melancholic than a
    // near-still take.
    let still = analyzer
        .analyze("vid-still-ref", still_samples(120), Some(happy_facial()))
        .await
        .unwrap();
    let energetic = |r: &qdance_models::AnalysisResult| {
        r.emotions
            .movement
            .get(qdance_models::MovementEmotion::Energetic)
    };
    let melancholic = |r: &qdance_models::AnalysisResult| {
        r.emotions
            .movement
            .get(qdance_models::MovementEmotion::Melancholic)
    };
    assert!(energetic(&result) > energetic(&still));
    assert!(melancholic(&result) < melancholic(&still));

    // With a strongly happy face the classical model surfaces an upbeat
    // style on top (happy has high affinity to Salsa/Hip-Hop/Jazz/Tap).
    let upbeat = [
        qdance_models::DanceStyle::HipHop,
        qdance_models::DanceStyle::Salsa,
        qdance_models::DanceStyle::Breakdance,
        qdance_models::DanceStyle::Jazz,
        qdance_models::DanceStyle::Tap,
    ];
    assert!(upbeat.contains(&result.classical_recommendations.recommendations[0].dance_style));

    // The quantum state is spread across many labels here, so its entropy
    // must be well above the concentrated-profile regime.
    assert!(
        result
            .quantum_recommendations
            .quantum_properties
            .superposition_entropy
            > 1.5
    );
}

#[tokio::test]
async fn test_still_video_reads_calm() {
    let analyzer = DanceAnalyzer::new(&EngineConfig::default()).unwrap();
    let result = analyzer
        .analyze("vid-still", still_samples(60), None)
        .await
        .unwrap();

    let movement = &result.emotions.movement;
    assert!(movement.get(qdance_models::MovementEmotion::Calm) > 0.9);
    assert!(movement.get(qdance_models::MovementEmotion::Energetic) < 0.1);
}

#[tokio::test]
async fn test_cache_round_trip_and_isolation() {
    let analyzer = Arc::new(DanceAnalyzer::new(&EngineConfig::default()).unwrap());

    // A failed analysis must not pollute the cache for later requests.
    assert!(matches!(
        analyzer.analyze("vid-a", Vec::new(), None).await,
        Err(EngineError::NoMotionSamples)
    ));
    assert!(analyzer.cache().get("vid-a").await.is_none());

    let first = analyzer
        .analyze("vid-a", energetic_samples(60), None)
        .await
        .unwrap();
    let cached = analyzer.cache().get("vid-a").await.unwrap();
    assert_eq!(first, cached);
}

#[tokio::test]
async fn test_concurrent_requests_for_different_videos() {
    let analyzer = Arc::new(DanceAnalyzer::new(&EngineConfig::default()).unwrap());

    let mut handles = Vec::new();
    for i in 0..8 {
        let analyzer = analyzer.clone();
        handles.push(tokio::spawn(async move {
            let id = format!("vid-{i}");
            analyzer.analyze(&id, energetic_samples(60), None).await
        }));
    }

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.classical_recommendations.recommendations.len(), 5);
    }
    assert_eq!(analyzer.cache().len().await, 8);
}

#[tokio::test]
async fn test_short_video_degrades_to_zero_features() {
    // Four frames at the default stride of 5 sample down to one frame.
    let analyzer = DanceAnalyzer::new(&EngineConfig::default()).unwrap();
    let result = analyzer
        .analyze("vid-short", energetic_samples(4), Some(happy_facial()))
        .await
        .unwrap();

    // Zero features read as calm/melancholic, never as a failure.
    let movement = &result.emotions.movement;
    assert_eq!(movement.get(qdance_models::MovementEmotion::Calm), 1.0);
    assert_eq!(result.classical_recommendations.recommendations.len(), 5);
}

#[tokio::test]
async fn test_top_k_override() {
    let config = EngineConfig {
        top_k: 3,
        ..Default::default()
    };
    let analyzer = DanceAnalyzer::new(&config).unwrap();
    let result = analyzer
        .analyze("vid-k", energetic_samples(60), None)
        .await
        .unwrap();
    assert_eq!(result.classical_recommendations.recommendations.len(), 3);
    assert_eq!(result.quantum_recommendations.recommendations.len(), 3);
}
