//! End-to-end demo: synthetic dance motion through the full pipeline.
//!
//! Run with: cargo run -p qdance-engine --example analyze_demo

use qdance_engine::{DanceAnalyzer, EngineConfig};
use qdance_models::{FacialDistribution, FacialEmotion, MotionSample};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let config = EngineConfig::from_env();
    let analyzer = DanceAnalyzer::new(&config)?;

    // Synthetic "dancer": three tracked points swinging at different rates.
    let samples: Vec<MotionSample> = (0..150)
        .map(|i| {
            let t = i as f64 * 0.1;
            MotionSample::from_points(&[
                (0.5 + 0.3 * t.sin(), 0.4 + 0.15 * (2.3 * t).cos()),
                (0.35 + 0.2 * (1.7 * t).cos(), 0.6 + 0.2 * t.sin()),
                (0.65 + 0.25 * (0.9 * t).sin(), 0.55 + 0.1 * (3.1 * t).sin()),
            ])
        })
        .collect();

    // Facial distribution as the external classifier would report it.
    let facial: FacialDistribution = [
        (FacialEmotion::Happy, 0.3),
        (FacialEmotion::Neutral, 0.3),
        (FacialEmotion::Surprise, 0.2),
        (FacialEmotion::Sad, 0.1),
        (FacialEmotion::Angry, 0.05),
        (FacialEmotion::Fear, 0.03),
        (FacialEmotion::Disgust, 0.02),
    ]
    .into_iter()
    .collect();

    let video_id = uuid::Uuid::new_v4().to_string();
    let result = analyzer.analyze(&video_id, samples, Some(facial)).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
