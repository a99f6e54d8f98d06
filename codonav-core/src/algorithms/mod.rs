//! Core ORF-detection algorithms.
//!
//! The detector is framed as a tiny feedforward network over codon categories,
//! but only part of that network makes decisions:
//!
//! ## Modules
//!
//! - [`classifier`]: Codon to one-hot category vector
//! - [`scorer`]: Fixed-weight 3→2→1 network, used for visualisation only
//! - [`activation`]: Start/stop state machine producing inside-ORF flags
//! - [`extraction`]: Run-length encoding of flags into ORF intervals
//!
//! ## Pipeline
//!
//! ```text
//! codons ──classify──▶ vectors ──activate──▶ flags ──extract──▶ intervals
//!                         │
//!                         └──score──▶ hidden activations (heatmap only)
//! ```
//!
//! The scorer and the state machine both read the category vectors, but the
//! scorer's output never feeds back into ORF membership.

pub mod activation;
pub mod classifier;
pub mod extraction;
pub mod scorer;

pub use activation::activate;
pub use classifier::{classify, classify_codons};
pub use extraction::extract_intervals;
pub use scorer::{FixedWeights, score};
