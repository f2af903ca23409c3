//! Classical weighted dance-style recommender.

use qdance_models::{
    ClassicalReport, CombinedEmotionProfile, DanceStyle, EmotionLabel, Recommendation,
    RecommendationMethod,
};
use tracing::debug;

use crate::error::EngineResult;
use crate::matrices::AffinityMatrix;
use crate::stats::std_dev;

/// A second contributing emotion is named in the reasoning when it carries
/// at least this fraction of the top contribution.
const SECONDARY_CONTRIBUTION_RATIO: f64 = 0.6;

/// Scores every catalog style as a weighted dot product of the combined
/// emotion profile against a static affinity matrix.
///
/// Raw dot products are mapped to [0,1] through the theoretical range
/// achievable for the given profile (all affinities at +/-1), so scores stay
/// comparable across profiles of different total weight.
#[derive(Debug, Clone)]
pub struct ClassicalRecommender {
    affinity: AffinityMatrix,
    top_k: usize,
}

impl ClassicalRecommender {
    /// Build a recommender; fails fast if the matrix is missing any
    /// (style, label) weight.
    pub fn new(affinity: AffinityMatrix, top_k: usize) -> EngineResult<Self> {
        affinity.validate()?;
        Ok(Self {
            affinity,
            top_k: top_k.max(1),
        })
    }

    /// Rank the catalog for the given profile.
    ///
    /// Always returns `min(top_k, catalog)` recommendations, sorted by
    /// descending score with catalog-order tie-breaking. An all-zero profile
    /// falls back to the uniform profile so the count invariant holds.
    pub fn recommend(&self, profile: &CombinedEmotionProfile) -> ClassicalReport {
        let uniform;
        let profile = if profile.is_degenerate() {
            uniform = uniform_profile();
            &uniform
        } else {
            profile
        };

        let total_weight = profile.total_weight();

        // Built in catalog order; the stable sort below preserves that
        // order for equal scores.
        let mut scored: Vec<(DanceStyle, f64)> = DanceStyle::ALL
            .iter()
            .map(|style| {
                let raw: f64 = profile
                    .iter()
                    .map(|(label, weight)| weight * self.affinity.weight(*style, label))
                    .sum();
                let normalized = ((raw + total_weight) / (2.0 * total_weight)).clamp(0.0, 1.0);
                (*style, normalized)
            })
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let count = self.top_k.min(DanceStyle::COUNT);
        let recommendations: Vec<Recommendation> = scored[..count]
            .iter()
            .map(|(style, score)| {
                Recommendation::new(*style, *score, self.reasoning(*style, profile))
            })
            .collect();

        let scores: Vec<f64> = recommendations.iter().map(|r| r.score).collect();
        let diversity_score = if scores.len() < 2 { 0.0 } else { std_dev(&scores) };

        debug!(
            top = %recommendations[0].dance_style,
            score = recommendations[0].score,
            diversity = diversity_score,
            "classical recommendation complete"
        );

        ClassicalReport {
            recommendations,
            method: RecommendationMethod::Classical,
            diversity_score,
        }
    }

    /// Name the one or two emotions contributing most to this style's score.
    fn reasoning(&self, style: DanceStyle, profile: &CombinedEmotionProfile) -> String {
        let mut contributions: Vec<(EmotionLabel, f64)> = profile
            .iter()
            .map(|(label, weight)| (label, weight * self.affinity.weight(style, label)))
            .filter(|(_, c)| *c > 0.0)
            .collect();
        contributions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        match contributions.as_slice() {
            [] => format!("General compatibility with {style}"),
            [(top, _)] => {
                format!("Strong {top} emotion detected, which aligns well with {style}")
            }
            [(top, top_c), (second, second_c), ..] => {
                if *second_c >= SECONDARY_CONTRIBUTION_RATIO * *top_c {
                    format!(
                        "Strong {top} and {second} emotions detected, which align well with {style}"
                    )
                } else {
                    format!("Strong {top} emotion detected, which aligns well with {style}")
                }
            }
        }
    }
}

fn uniform_profile() -> CombinedEmotionProfile {
    let w = 1.0 / EmotionLabel::COUNT as f64;
    EmotionLabel::ALL.iter().map(|l| (*l, w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommender(top_k: usize) -> ClassicalRecommender {
        ClassicalRecommender::new(AffinityMatrix::builtin(), top_k).unwrap()
    }

    fn energetic_profile() -> CombinedEmotionProfile {
        [
            (EmotionLabel::Energetic, 0.9),
            (EmotionLabel::Calm, 0.05),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_returns_exactly_top_k() {
        let report = recommender(5).recommend(&energetic_profile());
        assert_eq!(report.recommendations.len(), 5);
        assert_eq!(report.method, RecommendationMethod::Classical);
    }

    #[test]
    fn test_top_k_capped_by_catalog() {
        let report = recommender(50).recommend(&energetic_profile());
        assert_eq!(report.recommendations.len(), DanceStyle::COUNT);
    }

    #[test]
    fn test_scores_sorted_and_in_range() {
        let report = recommender(10).recommend(&energetic_profile());
        let scores: Vec<f64> = report.recommendations.iter().map(|r| r.score).collect();
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        for score in scores {
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_energetic_profile_prefers_high_energy_styles() {
        let report = recommender(5).recommend(&energetic_profile());
        let top = &report.recommendations[0];
        assert!(
            top.dance_style == DanceStyle::HipHop || top.dance_style == DanceStyle::Breakdance
        );
        assert!(top.score > 0.5);
        assert!(top.reasoning.contains("energetic"));
    }

    #[test]
    fn test_uniform_profile_has_small_spread() {
        let uniform: CombinedEmotionProfile = EmotionLabel::ALL
            .iter()
            .map(|l| (*l, 1.0 / EmotionLabel::COUNT as f64))
            .collect();
        let concentrated = energetic_profile();

        let uniform_report = recommender(10).recommend(&uniform);
        let concentrated_report = recommender(10).recommend(&concentrated);

        let spread = |report: &ClassicalReport| {
            let scores: Vec<f64> = report.recommendations.iter().map(|r| r.score).collect();
            scores.first().unwrap() - scores.last().unwrap()
        };
        assert!(spread(&uniform_report) < spread(&concentrated_report));
    }

    #[test]
    fn test_degenerate_profile_still_returns_full_list() {
        let report = recommender(5).recommend(&CombinedEmotionProfile::new());
        assert_eq!(report.recommendations.len(), 5);
        for rec in &report.recommendations {
            assert!((0.0..=1.0).contains(&rec.score));
        }
    }

    #[test]
    fn test_ties_break_in_catalog_order() {
        // A label with no positive affinities anywhere leaves most styles at
        // the same midpoint score.
        let profile: CombinedEmotionProfile =
            [(EmotionLabel::Disgust, 0.5)].into_iter().collect();
        let report = recommender(10).recommend(&profile);
        // Freestyle carries the only positive affinity for disgust.
        assert_eq!(report.recommendations[0].dance_style, DanceStyle::Freestyle);
        // Everything else scores 0.5 and keeps catalog order.
        let rest: Vec<DanceStyle> = report.recommendations[1..]
            .iter()
            .map(|r| r.dance_style)
            .collect();
        let expected: Vec<DanceStyle> = DanceStyle::ALL
            .iter()
            .copied()
            .filter(|s| *s != DanceStyle::Freestyle)
            .collect();
        assert_eq!(rest, expected);
    }

    #[test]
    fn test_negative_affinity_suppresses_style() {
        let aggressive: CombinedEmotionProfile =
            [(EmotionLabel::Aggressive, 1.0)].into_iter().collect();
        let report = recommender(10).recommend(&aggressive);
        let score_of = |style: DanceStyle| {
            report
                .recommendations
                .iter()
                .find(|r| r.dance_style == style)
                .unwrap()
                .score
        };
        assert!(score_of(DanceStyle::Breakdance) > score_of(DanceStyle::Ballet));
        assert!(score_of(DanceStyle::Ballet) < 0.5);
    }
}
