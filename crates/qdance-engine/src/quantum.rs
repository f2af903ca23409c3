//! Quantum-inspired dance-style recommender.
//!
//! A deterministic mathematical metaphor, not a simulation: the emotion
//! profile becomes a normalized complex amplitude vector over the 13-label
//! basis, a static coupling matrix mixes it into style amplitudes, and
//! squared magnitudes renormalized across the catalog play the role of
//! measurement probabilities. Everything is a pure function of the profile
//! and the matrix, so repeated runs are bit-identical.

use num_complex::Complex;
use qdance_models::{
    CombinedEmotionProfile, DanceStyle, EmotionLabel, QuantumProperties, QuantumReport,
    Recommendation, RecommendationMethod,
};
use tracing::debug;

use crate::error::EngineResult;
use crate::matrices::CouplingMatrix;

/// A second entangled label is named in the reasoning when it carries at
/// least this fraction of the top contribution.
const SECONDARY_CONTRIBUTION_RATIO: f64 = 0.6;

/// The quantum-inspired recommender.
#[derive(Debug, Clone)]
pub struct QuantumInspiredRecommender {
    coupling: CouplingMatrix,
    top_k: usize,
    phase_spread: f64,
}

impl QuantumInspiredRecommender {
    /// Build a recommender; fails fast if the coupling matrix is missing any
    /// (style, label) coefficient.
    pub fn new(coupling: CouplingMatrix, top_k: usize, phase_spread: f64) -> EngineResult<Self> {
        coupling.validate()?;
        Ok(Self {
            coupling,
            top_k: top_k.max(1),
            phase_spread,
        })
    }

    /// Run the full encode / couple / measure pipeline for one profile.
    pub fn recommend(&self, profile: &CombinedEmotionProfile) -> QuantumReport {
        let psi = self.encode(profile);
        let probabilities = self.measure(&psi);

        // Catalog order in, stable sort out: ties keep catalog order.
        let mut ranked: Vec<(DanceStyle, f64)> = DanceStyle::ALL
            .iter()
            .zip(probabilities.iter())
            .map(|(style, p)| (*style, *p))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let count = self.top_k.min(DanceStyle::COUNT);
        let top = &ranked[..count];

        let recommendations: Vec<Recommendation> = top
            .iter()
            .map(|(style, probability)| {
                Recommendation::new(*style, *probability, self.reasoning(*style, &psi, *probability))
                    .with_quantum_amplitude(*probability)
            })
            .collect();

        let quantum_properties = QuantumProperties {
            superposition_entropy: superposition_entropy(&psi),
            entanglement_strength: self.entanglement_strength(&psi, top),
            coherence: coherence(&psi),
        };

        debug!(
            top = %recommendations[0].dance_style,
            probability = recommendations[0].score,
            entropy_bits = quantum_properties.superposition_entropy,
            coherence = quantum_properties.coherence,
            "quantum recommendation complete"
        );

        QuantumReport {
            recommendations,
            method: RecommendationMethod::Quantum,
            quantum_properties,
        }
    }

    /// Encode the profile as a unit-norm amplitude vector.
    ///
    /// Magnitudes follow the Born convention (amplitude^2 = weight); phases
    /// are `index * phase_spread`, a deterministic stand-in for the random
    /// phases a physical system would carry. An all-zero profile encodes to
    /// the uniform superposition instead of failing.
    fn encode(&self, profile: &CombinedEmotionProfile) -> Vec<Complex<f64>> {
        let mut psi: Vec<Complex<f64>> = EmotionLabel::ALL
            .iter()
            .map(|label| {
                let weight = profile.get(*label).max(0.0);
                Complex::from_polar(weight.sqrt(), label.index() as f64 * self.phase_spread)
            })
            .collect();

        let norm_sq: f64 = psi.iter().map(|a| a.norm_sqr()).sum();
        if norm_sq <= f64::EPSILON {
            let amp = (1.0 / EmotionLabel::COUNT as f64).sqrt();
            return EmotionLabel::ALL
                .iter()
                .map(|label| Complex::from_polar(amp, label.index() as f64 * self.phase_spread))
                .collect();
        }

        let norm = norm_sq.sqrt();
        for a in &mut psi {
            *a /= norm;
        }
        psi
    }

    /// Mix the state through the coupling matrix and collapse to a
    /// probability per style, renormalized to sum to 1.
    fn measure(&self, psi: &[Complex<f64>]) -> Vec<f64> {
        let raw: Vec<f64> = DanceStyle::ALL
            .iter()
            .map(|style| {
                let phi: Complex<f64> = EmotionLabel::ALL
                    .iter()
                    .map(|label| self.coupling.coefficient(*style, *label) * psi[label.index()])
                    .sum();
                phi.norm_sqr()
            })
            .collect();

        let total: f64 = raw.iter().sum();
        if total <= f64::EPSILON {
            // The state lives entirely in the uncoupled subspace; collapse
            // uniformly across the catalog.
            return vec![1.0 / DanceStyle::COUNT as f64; DanceStyle::COUNT];
        }
        raw.iter().map(|p| p / total).collect()
    }

    /// Name the label(s) most entangled with this style for the profile.
    fn reasoning(&self, style: DanceStyle, psi: &[Complex<f64>], probability: f64) -> String {
        let mut contributions: Vec<(EmotionLabel, f64)> = EmotionLabel::ALL
            .iter()
            .map(|label| {
                (
                    *label,
                    self.coupling.coefficient(style, *label).abs() * psi[label.index()].norm(),
                )
            })
            .filter(|(_, c)| *c > 1e-12)
            .collect();
        contributions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        match contributions.as_slice() {
            [] => format!("Emerged from uniform superposition (probability: {probability:.2})"),
            [(top, _)] => format!(
                "Entangled with the {top} state (probability: {probability:.2})"
            ),
            [(top, top_c), (second, second_c), ..] => {
                if *second_c >= SECONDARY_CONTRIBUTION_RATIO * *top_c {
                    format!(
                        "Entangled with the {top} and {second} states (probability: {probability:.2})"
                    )
                } else {
                    format!("Entangled with the {top} state (probability: {probability:.2})")
                }
            }
        }
    }

    /// Mean cross-term mass of the coupling-weighted amplitudes over the
    /// returned styles. Zero when each top style couples to at most one
    /// populated label; grows as the matrix mixes labels.
    fn entanglement_strength(
        &self,
        psi: &[Complex<f64>],
        top: &[(DanceStyle, f64)],
    ) -> f64 {
        if top.is_empty() {
            return 0.0;
        }
        let total: f64 = top
            .iter()
            .map(|(style, _)| {
                let weighted: Vec<f64> = EmotionLabel::ALL
                    .iter()
                    .map(|label| {
                        (self.coupling.coefficient(*style, *label) * psi[label.index()]).norm()
                    })
                    .collect();
                let sum: f64 = weighted.iter().sum();
                let sum_sq: f64 = weighted.iter().map(|w| w * w).sum();
                // Sum over i<j of w_i * w_j.
                (sum * sum - sum_sq) / 2.0
            })
            .sum();
        total / top.len() as f64
    }
}

/// Shannon entropy of the amplitude-squared distribution, in bits.
fn superposition_entropy(psi: &[Complex<f64>]) -> f64 {
    -psi.iter()
        .map(|a| a.norm_sqr())
        .filter(|p| *p > 0.0)
        .map(|p| p * p.log2())
        .sum::<f64>()
}

/// Off-diagonal magnitude mass of the outer product psi psi*, normalized by
/// (n - 1) so a uniform state scores 1.0 and a basis state 0.0.
fn coherence(psi: &[Complex<f64>]) -> f64 {
    let n = psi.len();
    if n < 2 {
        return 0.0;
    }
    let s1: f64 = psi.iter().map(|a| a.norm()).sum();
    let s2: f64 = psi.iter().map(|a| a.norm_sqr()).sum();
    // Sum over i != j of |psi_i||psi_j| equals s1^2 - s2.
    ((s1 * s1 - s2) / (n as f64 - 1.0)).clamp(0.0, 1.0)
}
