//! Sequence normalisation and per-ORF metrics.
//!
//! ## Modules
//!
//! - [`io`]: FASTA reading and parsing
//! - [`translation`]: Standard genetic code translation
//!
//! ## Examples
//!
//! ```rust
//! use codonav_core::sequence::{gc_content, normalize};
//!
//! let sequence = normalize(b"atgaaa\ntag\n");
//! assert_eq!(sequence, b"ATGAAATAG");
//! assert_eq!(gc_content(&sequence), 22.22);
//! ```

pub mod io;
pub mod translation;

use crate::algorithms::classify;
use crate::constants::CODON_LENGTH;
use crate::types::{BaseComposition, CodonCategory, CodonHighlight};

pub use io::*;
pub use translation::translate;

/// Upper-case a raw sequence and drop line breaks and other whitespace.
#[must_use]
pub fn normalize(sequence: &[u8]) -> Vec<u8> {
    sequence
        .iter()
        .filter(|byte| !byte.is_ascii_whitespace())
        .map(u8::to_ascii_uppercase)
        .collect()
}

/// Number of whole codons in frame 0
#[must_use]
pub const fn codon_count(sequence: &[u8]) -> usize {
    sequence.len() / CODON_LENGTH
}

/// Round a value to two decimal places
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// GC content as a percentage rounded to two decimals.
///
/// Case-insensitive. An empty sequence has a GC content of 0.
#[must_use]
pub fn gc_content(sequence: &[u8]) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }

    let gc_count = sequence
        .iter()
        .filter(|&&base| matches!(base.to_ascii_uppercase(), b'G' | b'C'))
        .count();

    round_to_hundredths(100.0 * gc_count as f64 / sequence.len() as f64)
}

/// Count A, T, G and C (case-insensitive); other characters are ignored.
#[must_use]
pub fn base_composition(sequence: &[u8]) -> BaseComposition {
    sequence
        .iter()
        .fold(BaseComposition::default(), |mut counts, base| {
            match base.to_ascii_uppercase() {
                b'A' => counts.a += 1,
                b'T' => counts.t += 1,
                b'G' => counts.g += 1,
                b'C' => counts.c += 1,
                _ => {}
            }
            counts
        })
}

/// Locate start and stop codons in frame 0 of `sequence`.
///
/// Offsets are relative to the start of `sequence`. Neutral codons are
/// omitted.
#[must_use]
pub fn codon_highlights(sequence: &[u8]) -> Vec<CodonHighlight> {
    sequence
        .chunks_exact(CODON_LENGTH)
        .enumerate()
        .filter_map(|(index, codon)| {
            let upper = codon.to_ascii_uppercase();
            match classify(&upper) {
                CodonCategory::Neutral => None,
                category => Some(CodonHighlight {
                    offset: index * CODON_LENGTH,
                    category,
                }),
            }
        })
        .collect()
}
