//! Emotion label sets and distribution types.
//!
//! Two disjoint label sets feed the pipeline: seven facial emotions produced
//! by the external classifier and six movement emotions inferred from motion
//! features. Their union forms the 13-label basis used by both recommenders.
//! Declaration order is the canonical basis order everywhere (facial block
//! first), so iteration over the `BTreeMap`-backed distributions is stable.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Facial emotion categories emitted by the external classifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FacialEmotion {
    Happy,
    Sad,
    Angry,
    Surprise,
    Neutral,
    Fear,
    Disgust,
}

impl FacialEmotion {
    /// All facial emotions in canonical order.
    pub const ALL: &'static [FacialEmotion] = &[
        FacialEmotion::Happy,
        FacialEmotion::Sad,
        FacialEmotion::Angry,
        FacialEmotion::Surprise,
        FacialEmotion::Neutral,
        FacialEmotion::Fear,
        FacialEmotion::Disgust,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(&self) -> &'static str {
        match self {
            FacialEmotion::Happy => "happy",
            FacialEmotion::Sad => "sad",
            FacialEmotion::Angry => "angry",
            FacialEmotion::Surprise => "surprise",
            FacialEmotion::Neutral => "neutral",
            FacialEmotion::Fear => "fear",
            FacialEmotion::Disgust => "disgust",
        }
    }
}

impl fmt::Display for FacialEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FacialEmotion {
    type Err = EmotionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(FacialEmotion::Happy),
            "sad" => Ok(FacialEmotion::Sad),
            "angry" => Ok(FacialEmotion::Angry),
            "surprise" => Ok(FacialEmotion::Surprise),
            "neutral" => Ok(FacialEmotion::Neutral),
            "fear" => Ok(FacialEmotion::Fear),
            "disgust" => Ok(FacialEmotion::Disgust),
            _ => Err(EmotionParseError(s.to_string())),
        }
    }
}

/// Movement emotion categories inferred from motion features.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MovementEmotion {
    Energetic,
    Calm,
    Aggressive,
    Graceful,
    Playful,
    Melancholic,
}

impl MovementEmotion {
    /// All movement emotions in canonical order.
    pub const ALL: &'static [MovementEmotion] = &[
        MovementEmotion::Energetic,
        MovementEmotion::Calm,
        MovementEmotion::Aggressive,
        MovementEmotion::Graceful,
        MovementEmotion::Playful,
        MovementEmotion::Melancholic,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementEmotion::Energetic => "energetic",
            MovementEmotion::Calm => "calm",
            MovementEmotion::Aggressive => "aggressive",
            MovementEmotion::Graceful => "graceful",
            MovementEmotion::Playful => "playful",
            MovementEmotion::Melancholic => "melancholic",
        }
    }
}

impl fmt::Display for MovementEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MovementEmotion {
    type Err = EmotionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "energetic" => Ok(MovementEmotion::Energetic),
            "calm" => Ok(MovementEmotion::Calm),
            "aggressive" => Ok(MovementEmotion::Aggressive),
            "graceful" => Ok(MovementEmotion::Graceful),
            "playful" => Ok(MovementEmotion::Playful),
            "melancholic" => Ok(MovementEmotion::Melancholic),
            _ => Err(EmotionParseError(s.to_string())),
        }
    }
}

/// The full 13-label emotion basis: facial labels first, then movement.
///
/// Variant order defines the basis index used for quantum state encoding and
/// for catalog-order tie-breaking, so it must not be reordered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Surprise,
    Neutral,
    Fear,
    Disgust,
    Energetic,
    Calm,
    Aggressive,
    Graceful,
    Playful,
    Melancholic,
}

impl EmotionLabel {
    /// All labels in canonical basis order.
    pub const ALL: &'static [EmotionLabel] = &[
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Surprise,
        EmotionLabel::Neutral,
        EmotionLabel::Fear,
        EmotionLabel::Disgust,
        EmotionLabel::Energetic,
        EmotionLabel::Calm,
        EmotionLabel::Aggressive,
        EmotionLabel::Graceful,
        EmotionLabel::Playful,
        EmotionLabel::Melancholic,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position of this label in the canonical basis.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The facial-side label, if this label belongs to the facial set.
    pub fn as_facial(&self) -> Option<FacialEmotion> {
        match self {
            EmotionLabel::Happy => Some(FacialEmotion::Happy),
            EmotionLabel::Sad => Some(FacialEmotion::Sad),
            EmotionLabel::Angry => Some(FacialEmotion::Angry),
            EmotionLabel::Surprise => Some(FacialEmotion::Surprise),
            EmotionLabel::Neutral => Some(FacialEmotion::Neutral),
            EmotionLabel::Fear => Some(FacialEmotion::Fear),
            EmotionLabel::Disgust => Some(FacialEmotion::Disgust),
            _ => None,
        }
    }

    /// The movement-side label, if this label belongs to the movement set.
    pub fn as_movement(&self) -> Option<MovementEmotion> {
        match self {
            EmotionLabel::Energetic => Some(MovementEmotion::Energetic),
            EmotionLabel::Calm => Some(MovementEmotion::Calm),
            EmotionLabel::Aggressive => Some(MovementEmotion::Aggressive),
            EmotionLabel::Graceful => Some(MovementEmotion::Graceful),
            EmotionLabel::Playful => Some(MovementEmotion::Playful),
            EmotionLabel::Melancholic => Some(MovementEmotion::Melancholic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Surprise => "surprise",
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Energetic => "energetic",
            EmotionLabel::Calm => "calm",
            EmotionLabel::Aggressive => "aggressive",
            EmotionLabel::Graceful => "graceful",
            EmotionLabel::Playful => "playful",
            EmotionLabel::Melancholic => "melancholic",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmotionLabel {
    type Err = EmotionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(facial) = s.parse::<FacialEmotion>() {
            return Ok(facial.into());
        }
        s.parse::<MovementEmotion>()
            .map(Into::into)
            .map_err(|_| EmotionParseError(s.to_string()))
    }
}

impl From<FacialEmotion> for EmotionLabel {
    fn from(e: FacialEmotion) -> Self {
        match e {
            FacialEmotion::Happy => EmotionLabel::Happy,
            FacialEmotion::Sad => EmotionLabel::Sad,
            FacialEmotion::Angry => EmotionLabel::Angry,
            FacialEmotion::Surprise => EmotionLabel::Surprise,
            FacialEmotion::Neutral => EmotionLabel::Neutral,
            FacialEmotion::Fear => EmotionLabel::Fear,
            FacialEmotion::Disgust => EmotionLabel::Disgust,
        }
    }
}

impl From<MovementEmotion> for EmotionLabel {
    fn from(e: MovementEmotion) -> Self {
        match e {
            MovementEmotion::Energetic => EmotionLabel::Energetic,
            MovementEmotion::Calm => EmotionLabel::Calm,
            MovementEmotion::Aggressive => EmotionLabel::Aggressive,
            MovementEmotion::Graceful => EmotionLabel::Graceful,
            MovementEmotion::Playful => EmotionLabel::Playful,
            MovementEmotion::Melancholic => EmotionLabel::Melancholic,
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown emotion label: {0}")]
pub struct EmotionParseError(String);

/// Probability distribution over facial emotions from the external classifier.
///
/// Assumed approximately normalized (weights sum to ~1.0). An all-zero or
/// missing distribution is replaced by [`FacialDistribution::uniform`]
/// upstream rather than failing the analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FacialDistribution(pub BTreeMap<FacialEmotion, f64>);

impl FacialDistribution {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Uniform fallback used when no face was detected.
    pub fn uniform() -> Self {
        let w = 1.0 / FacialEmotion::COUNT as f64;
        Self(FacialEmotion::ALL.iter().map(|e| (*e, w)).collect())
    }

    pub fn set(&mut self, emotion: FacialEmotion, weight: f64) {
        self.0.insert(emotion, weight);
    }

    pub fn get(&self, emotion: FacialEmotion) -> f64 {
        self.0.get(&emotion).copied().unwrap_or(0.0)
    }

    pub fn total_weight(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FacialEmotion, f64)> + '_ {
        self.0.iter().map(|(e, w)| (*e, *w))
    }
}

impl FromIterator<(FacialEmotion, f64)> for FacialDistribution {
    fn from_iter<T: IntoIterator<Item = (FacialEmotion, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Heuristic movement-emotion scores.
///
/// These are clipped magnitudes in [0,1], not a probability simplex: the
/// inferrer deliberately skips normalization so a video can read as both
/// energetic and playful at full strength.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MovementDistribution(pub BTreeMap<MovementEmotion, f64>);

impl MovementDistribution {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn set(&mut self, emotion: MovementEmotion, weight: f64) {
        self.0.insert(emotion, weight);
    }

    pub fn get(&self, emotion: MovementEmotion) -> f64 {
        self.0.get(&emotion).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MovementEmotion, f64)> + '_ {
        self.0.iter().map(|(e, w)| (*e, *w))
    }
}

impl FromIterator<(MovementEmotion, f64)> for MovementDistribution {
    fn from_iter<T: IntoIterator<Item = (MovementEmotion, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fused emotion profile over the full 13-label basis.
///
/// Computed once per analysis by the fuser and immutable afterwards; the sole
/// input to both recommenders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CombinedEmotionProfile(pub BTreeMap<EmotionLabel, f64>);

impl CombinedEmotionProfile {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn set(&mut self, label: EmotionLabel, weight: f64) {
        self.0.insert(label, weight);
    }

    pub fn get(&self, label: EmotionLabel) -> f64 {
        self.0.get(&label).copied().unwrap_or(0.0)
    }

    pub fn total_weight(&self) -> f64 {
        self.0.values().sum()
    }

    /// True when every weight is (numerically) zero.
    pub fn is_degenerate(&self) -> bool {
        self.total_weight() <= f64::EPSILON
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, f64)> + '_ {
        self.0.iter().map(|(l, w)| (*l, *w))
    }
}

impl FromIterator<(EmotionLabel, f64)> for CombinedEmotionProfile {
    fn from_iter<T: IntoIterator<Item = (EmotionLabel, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
