//! Fixed-weight feedforward scorer.
//!
//! A 3→2→1 network with hand-set weights. Its hidden activations are what the
//! weight heatmap and per-codon activation views display. ORF membership is
//! decided by [`crate::algorithms::activation`], never by this output.

use serde::Serialize;

use crate::constants::{
    FIRST_LAYER_BIAS, FIRST_LAYER_WEIGHTS, NUM_CATEGORIES, NUM_HIDDEN_UNITS, SECOND_LAYER_BIAS,
    SECOND_LAYER_WEIGHTS,
};
use crate::types::{CategoryVector, CodonScore, HiddenActivations};

/// Weight heatmap: the first-layer weights padded with an all-zero `Other` row.
pub type WeightHeatmap = [[f64; NUM_HIDDEN_UNITS]; NUM_CATEGORIES + 1];

/// The network's weights and biases.
///
/// There is exactly one set of weights in use, [`FixedWeights::STANDARD`],
/// which is a compile-time constant shared by every scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FixedWeights {
    pub w1: [[f64; NUM_HIDDEN_UNITS]; NUM_CATEGORIES],
    pub b1: [f64; NUM_HIDDEN_UNITS],
    pub w2: [f64; NUM_HIDDEN_UNITS],
    pub b2: f64,
}

impl FixedWeights {
    pub const STANDARD: Self = Self {
        w1: FIRST_LAYER_WEIGHTS,
        b1: FIRST_LAYER_BIAS,
        w2: SECOND_LAYER_WEIGHTS,
        b2: SECOND_LAYER_BIAS,
    };

    /// Hidden layer: `max(0, v·W1 + b1)`
    #[must_use]
    pub fn hidden(&self, vector: &CategoryVector) -> HiddenActivations {
        let mut hidden = self.b1;
        for (unit, activation) in hidden.iter_mut().enumerate() {
            *activation += vector
                .iter()
                .zip(self.w1.iter())
                .map(|(&input, row)| f64::from(input) * row[unit])
                .sum::<f64>();
            *activation = activation.max(0.0);
        }
        hidden
    }

    /// Output unit: `hidden·W2 + b2`
    #[must_use]
    pub fn output(&self, hidden: &HiddenActivations) -> f64 {
        hidden
            .iter()
            .zip(self.w2.iter())
            .map(|(h, w)| h * w)
            .sum::<f64>()
            + self.b2
    }

    #[must_use]
    pub fn score_vector(&self, vector: &CategoryVector) -> CodonScore {
        let hidden = self.hidden(vector);
        CodonScore {
            hidden,
            output: self.output(&hidden),
        }
    }

    /// First-layer weights laid out for the heatmap view.
    ///
    /// Rows follow [`crate::constants::HEATMAP_ROW_LABELS`]; the trailing
    /// `Other` row is always zero.
    #[must_use]
    pub fn heatmap(&self) -> WeightHeatmap {
        let mut heatmap = [[0.0; NUM_HIDDEN_UNITS]; NUM_CATEGORIES + 1];
        heatmap[..NUM_CATEGORIES].copy_from_slice(&self.w1);
        heatmap
    }
}

impl Default for FixedWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Score each category vector independently with the standard weights.
///
/// Returns the raw outputs and the hidden activations, both aligned with the
/// input vectors.
#[must_use]
pub fn score(vectors: &[CategoryVector]) -> (Vec<f64>, Vec<HiddenActivations>) {
    vectors
        .iter()
        .map(|vector| {
            let scored = FixedWeights::STANDARD.score_vector(vector);
            (scored.output, scored.hidden)
        })
        .unzip()
}
