//! Static emotion-to-style matrices.
//!
//! Both recommenders score against hand-tuned tables keyed by
//! (dance style, emotion label). The tables are immutable configuration
//! objects: built once, validated for completeness at recommender
//! construction, and injected explicitly rather than living as module-level
//! mutable state. Both are serde maps, so research deployments can override
//! them from JSON without code changes.

use std::collections::BTreeMap;

use qdance_models::{DanceStyle, EmotionLabel};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

type WeightTable = BTreeMap<DanceStyle, BTreeMap<EmotionLabel, f64>>;

/// Hand-tuned affinities for the classical model.
///
/// Weights lie in [-1,1]; negative entries actively suppress styles that
/// clash with an emotion (aggressive input should not surface Ballet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AffinityMatrix(WeightTable);

/// Default classical affinities, rows keyed by emotion.
const CLASSICAL_AFFINITIES: &[(EmotionLabel, &[(DanceStyle, f64)])] = &[
    (
        EmotionLabel::Happy,
        &[
            (DanceStyle::HipHop, 0.8),
            (DanceStyle::Jazz, 0.7),
            (DanceStyle::Salsa, 0.9),
            (DanceStyle::Tap, 0.6),
        ],
    ),
    (
        EmotionLabel::Sad,
        &[
            (DanceStyle::Contemporary, 0.9),
            (DanceStyle::Lyrical, 0.8),
            (DanceStyle::Ballet, 0.6),
        ],
    ),
    (
        EmotionLabel::Angry,
        &[
            (DanceStyle::Breakdance, 0.8),
            (DanceStyle::HipHop, 0.7),
            (DanceStyle::Freestyle, 0.6),
        ],
    ),
    (
        EmotionLabel::Surprise,
        &[(DanceStyle::Freestyle, 0.7), (DanceStyle::Jazz, 0.6)],
    ),
    (
        EmotionLabel::Neutral,
        &[(DanceStyle::Freestyle, 0.5), (DanceStyle::Contemporary, 0.5)],
    ),
    (
        EmotionLabel::Fear,
        &[(DanceStyle::Contemporary, 0.6), (DanceStyle::Freestyle, 0.5)],
    ),
    (EmotionLabel::Disgust, &[(DanceStyle::Freestyle, 0.5)]),
    (
        EmotionLabel::Energetic,
        &[
            (DanceStyle::HipHop, 0.9),
            (DanceStyle::Breakdance, 0.8),
            (DanceStyle::Salsa, 0.7),
            (DanceStyle::Tap, 0.6),
        ],
    ),
    (
        EmotionLabel::Calm,
        &[
            (DanceStyle::Ballet, 0.9),
            (DanceStyle::Contemporary, 0.7),
            (DanceStyle::Lyrical, 0.8),
            (DanceStyle::Breakdance, -0.3),
        ],
    ),
    (
        EmotionLabel::Aggressive,
        &[
            (DanceStyle::Breakdance, 0.9),
            (DanceStyle::HipHop, 0.7),
            (DanceStyle::Ballet, -0.4),
            (DanceStyle::Ballroom, -0.3),
        ],
    ),
    (
        EmotionLabel::Graceful,
        &[
            (DanceStyle::Ballet, 1.0),
            (DanceStyle::Ballroom, 0.8),
            (DanceStyle::Contemporary, 0.7),
            (DanceStyle::Breakdance, -0.2),
        ],
    ),
    (
        EmotionLabel::Playful,
        &[
            (DanceStyle::Jazz, 0.8),
            (DanceStyle::Tap, 0.7),
            (DanceStyle::Freestyle, 0.6),
        ],
    ),
    (
        EmotionLabel::Melancholic,
        &[
            (DanceStyle::Contemporary, 0.9),
            (DanceStyle::Lyrical, 0.8),
            (DanceStyle::Ballet, 0.6),
        ],
    ),
];

/// Default quantum couplings, rows keyed by emotion.
///
/// Facial-only labels without a tuned row (surprise, neutral, fear, disgust)
/// keep zero coefficients; a profile concentrated entirely on them collapses
/// through the uniform measurement fallback.
const QUANTUM_COUPLINGS: &[(EmotionLabel, &[(DanceStyle, f64)])] = &[
    (
        EmotionLabel::Happy,
        &[
            (DanceStyle::HipHop, 0.9),
            (DanceStyle::Jazz, 0.8),
            (DanceStyle::Salsa, 0.95),
            (DanceStyle::Tap, 0.7),
        ],
    ),
    (
        EmotionLabel::Sad,
        &[
            (DanceStyle::Contemporary, 0.95),
            (DanceStyle::Lyrical, 0.9),
            (DanceStyle::Ballet, 0.7),
        ],
    ),
    (
        EmotionLabel::Angry,
        &[
            (DanceStyle::Breakdance, 0.9),
            (DanceStyle::HipHop, 0.8),
            (DanceStyle::Freestyle, 0.7),
        ],
    ),
    (
        EmotionLabel::Energetic,
        &[
            (DanceStyle::HipHop, 0.95),
            (DanceStyle::Breakdance, 0.9),
            (DanceStyle::Salsa, 0.85),
        ],
    ),
    (
        EmotionLabel::Calm,
        &[
            (DanceStyle::Ballet, 0.95),
            (DanceStyle::Contemporary, 0.8),
            (DanceStyle::Lyrical, 0.9),
        ],
    ),
    (
        EmotionLabel::Graceful,
        &[
            (DanceStyle::Ballet, 1.0),
            (DanceStyle::Ballroom, 0.9),
            (DanceStyle::Contemporary, 0.8),
        ],
    ),
    (
        EmotionLabel::Playful,
        &[
            (DanceStyle::Jazz, 0.9),
            (DanceStyle::Tap, 0.85),
            (DanceStyle::Freestyle, 0.7),
        ],
    ),
    (
        EmotionLabel::Aggressive,
        &[(DanceStyle::Breakdance, 0.95), (DanceStyle::HipHop, 0.8)],
    ),
    (
        EmotionLabel::Melancholic,
        &[
            (DanceStyle::Contemporary, 0.95),
            (DanceStyle::Lyrical, 0.9),
            (DanceStyle::Ballet, 0.7),
        ],
    ),
];

/// Build a complete zero-filled table, then apply tuned entries.
fn table_from_emotion_rows(rows: &[(EmotionLabel, &[(DanceStyle, f64)])]) -> WeightTable {
    let mut table: WeightTable = DanceStyle::ALL
        .iter()
        .map(|style| {
            (
                *style,
                EmotionLabel::ALL.iter().map(|label| (*label, 0.0)).collect(),
            )
        })
        .collect();

    for (label, entries) in rows {
        for (style, weight) in *entries {
            if let Some(row) = table.get_mut(style) {
                row.insert(*label, *weight);
            }
        }
    }

    table
}

fn find_missing(table: &WeightTable) -> Option<(DanceStyle, EmotionLabel)> {
    for style in DanceStyle::ALL {
        match table.get(style) {
            None => return Some((*style, EmotionLabel::ALL[0])),
            Some(row) => {
                for label in EmotionLabel::ALL {
                    if !row.contains_key(label) {
                        return Some((*style, *label));
                    }
                }
            }
        }
    }
    None
}

impl AffinityMatrix {
    /// The built-in hand-tuned table.
    pub fn builtin() -> Self {
        Self(table_from_emotion_rows(CLASSICAL_AFFINITIES))
    }

    /// Wrap an externally supplied table. Completeness is checked by
    /// [`AffinityMatrix::validate`] at recommender construction.
    pub fn from_table(table: WeightTable) -> Self {
        Self(table)
    }

    /// Ensure every (style, label) pair has a weight.
    pub fn validate(&self) -> EngineResult<()> {
        match find_missing(&self.0) {
            Some((style, label)) => Err(EngineError::IncompleteAffinity { style, label }),
            None => Ok(()),
        }
    }

    /// Affinity weight for a (style, label) pair. Zero for absent entries;
    /// validation guarantees none are absent in a constructed recommender.
    pub fn weight(&self, style: DanceStyle, label: EmotionLabel) -> f64 {
        self.0
            .get(&style)
            .and_then(|row| row.get(&label))
            .copied()
            .unwrap_or(0.0)
    }
}

impl Default for AffinityMatrix {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Entanglement-style coupling coefficients for the quantum model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CouplingMatrix(WeightTable);

impl CouplingMatrix {
    /// The built-in hand-tuned table.
    pub fn builtin() -> Self {
        Self(table_from_emotion_rows(QUANTUM_COUPLINGS))
    }

    /// Wrap an externally supplied table.
    pub fn from_table(table: WeightTable) -> Self {
        Self(table)
    }

    /// Ensure every (style, label) pair has a coefficient.
    pub fn validate(&self) -> EngineResult<()> {
        match find_missing(&self.0) {
            Some((style, label)) => Err(EngineError::IncompleteCoupling { style, label }),
            None => Ok(()),
        }
    }

    /// Coupling coefficient for a (style, label) pair.
    pub fn coefficient(&self, style: DanceStyle, label: EmotionLabel) -> f64 {
        self.0
            .get(&style)
            .and_then(|row| row.get(&label))
            .copied()
            .unwrap_or(0.0)
    }
}

impl Default for CouplingMatrix {
    fn default() -> Self {
        Self::builtin()
    }
}
