//! Dance style catalog.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed dance-style catalog.
///
/// Variant order is the catalog order used for tie-breaking in both
/// recommenders. Serde uses the human-readable display names ("Hip-Hop")
/// because those are what the front-end renders.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum DanceStyle {
    Ballet,
    #[serde(rename = "Hip-Hop")]
    HipHop,
    Contemporary,
    Jazz,
    Salsa,
    Breakdance,
    Ballroom,
    Tap,
    Lyrical,
    Freestyle,
}

impl DanceStyle {
    /// All styles in catalog order.
    pub const ALL: &'static [DanceStyle] = &[
        DanceStyle::Ballet,
        DanceStyle::HipHop,
        DanceStyle::Contemporary,
        DanceStyle::Jazz,
        DanceStyle::Salsa,
        DanceStyle::Breakdance,
        DanceStyle::Ballroom,
        DanceStyle::Tap,
        DanceStyle::Lyrical,
        DanceStyle::Freestyle,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position of this style in the catalog.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DanceStyle::Ballet => "Ballet",
            DanceStyle::HipHop => "Hip-Hop",
            DanceStyle::Contemporary => "Contemporary",
            DanceStyle::Jazz => "Jazz",
            DanceStyle::Salsa => "Salsa",
            DanceStyle::Breakdance => "Breakdance",
            DanceStyle::Ballroom => "Ballroom",
            DanceStyle::Tap => "Tap",
            DanceStyle::Lyrical => "Lyrical",
            DanceStyle::Freestyle => "Freestyle",
        }
    }
}

impl fmt::Display for DanceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DanceStyle {
    type Err = DanceStyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ballet" => Ok(DanceStyle::Ballet),
            "hip-hop" | "hip_hop" | "hiphop" => Ok(DanceStyle::HipHop),
            "contemporary" => Ok(DanceStyle::Contemporary),
            "jazz" => Ok(DanceStyle::Jazz),
            "salsa" => Ok(DanceStyle::Salsa),
            "breakdance" => Ok(DanceStyle::Breakdance),
            "ballroom" => Ok(DanceStyle::Ballroom),
            "tap" => Ok(DanceStyle::Tap),
            "lyrical" => Ok(DanceStyle::Lyrical),
            "freestyle" => Ok(DanceStyle::Freestyle),
            _ => Err(DanceStyleParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown dance style: {0}")]
pub struct DanceStyleParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parse() {
        assert_eq!("hip-hop".parse::<DanceStyle>().unwrap(), DanceStyle::HipHop);
        assert_eq!("Ballet".parse::<DanceStyle>().unwrap(), DanceStyle::Ballet);
        assert!("krump".parse::<DanceStyle>().is_err());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&DanceStyle::HipHop).unwrap(),
            "\"Hip-Hop\""
        );
        assert_eq!(
            serde_json::from_str::<DanceStyle>("\"Breakdance\"").unwrap(),
            DanceStyle::Breakdance
        );
    }

    #[test]
    fn test_catalog_order() {
        assert_eq!(DanceStyle::COUNT, 10);
        assert_eq!(DanceStyle::Ballet.index(), 0);
        assert_eq!(DanceStyle::Freestyle.index(), 9);
        for (i, style) in DanceStyle::ALL.iter().enumerate() {
            assert_eq!(style.index(), i);
        }
    }
}
