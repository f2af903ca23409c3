//! Engine configuration.
//!
//! All tunables the research workflow needs to override without code
//! changes: sampling stride, recommendation count, fusion weights, the
//! quantum phase spread, and cache bounds. The static affinity/coupling
//! matrices are separate injectable objects (see `matrices`).

use std::f64::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Recommendation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Analyze every Nth motion sample (default: 5)
    pub frame_stride: usize,
    /// Number of recommendations per model (default: 5)
    pub top_k: usize,
    /// Fusion weight for movement emotions (default: 0.4)
    pub movement_weight: f64,
    /// Fusion weight for facial emotions (default: 0.6)
    pub facial_weight: f64,
    /// Phase increment per basis index for quantum state encoding,
    /// in radians (default: pi/8)
    pub phase_spread: f64,
    /// Maximum number of cached analysis results (default: 256)
    pub cache_capacity: usize,
    /// Cache entry time-to-live in seconds (default: 3600)
    pub cache_ttl_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_stride: 5,
            top_k: 5,
            movement_weight: 0.4,
            facial_weight: 0.6,
            phase_spread: PI / 8.0,
            cache_capacity: 256,
            cache_ttl_secs: 3600,
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            frame_stride: env_parse("QDANCE_FRAME_STRIDE", defaults.frame_stride),
            top_k: env_parse("QDANCE_TOP_K", defaults.top_k),
            movement_weight: env_parse("QDANCE_MOVEMENT_WEIGHT", defaults.movement_weight),
            facial_weight: env_parse("QDANCE_FACIAL_WEIGHT", defaults.facial_weight),
            phase_spread: env_parse("QDANCE_PHASE_SPREAD", defaults.phase_spread),
            cache_capacity: env_parse("QDANCE_CACHE_CAPACITY", defaults.cache_capacity),
            cache_ttl_secs: env_parse("QDANCE_CACHE_TTL_SECS", defaults.cache_ttl_secs),
        }
    }

    /// Cache TTL as a duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Validate invariants; called once at engine construction.
    pub fn validate(&self) -> EngineResult<()> {
        if self.frame_stride == 0 {
            return Err(EngineError::invalid_config("frame_stride must be >= 1"));
        }
        if self.top_k == 0 {
            return Err(EngineError::invalid_config("top_k must be >= 1"));
        }
        if self.movement_weight < 0.0 || self.facial_weight < 0.0 {
            return Err(EngineError::invalid_config(
                "fusion weights must be non-negative",
            ));
        }
        if self.movement_weight + self.facial_weight <= 0.0 {
            return Err(EngineError::invalid_config(
                "fusion weights must not both be zero",
            ));
        }
        if !self.phase_spread.is_finite() {
            return Err(EngineError::invalid_config("phase_spread must be finite"));
        }
        if self.cache_capacity == 0 {
            return Err(EngineError::invalid_config("cache_capacity must be >= 1"));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_stride, 5);
        assert_eq!(config.top_k, 5);
        assert!((config.movement_weight - 0.4).abs() < 1e-12);
        assert!((config.facial_weight - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_zero_stride() {
        let config = EngineConfig {
            frame_stride: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_weights() {
        let config = EngineConfig {
            movement_weight: 0.0,
            facial_weight: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
