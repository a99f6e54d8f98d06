//! Standard genetic code (NCBI translation table 1).

use crate::constants::{CODON_LENGTH, UNKNOWN_AMINO_ACID};

/// Amino acids indexed by `16 * b1 + 4 * b2 + b3` with bases ordered `T, C, A, G`.
const STANDARD_CODE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Symbol the standard code uses for stop codons
pub const STOP_SYMBOL: char = '*';

/// Position of a base in the `T, C, A, G` ordering of the code table.
///
/// Case-insensitive; `U` is read as `T`. Returns `None` for anything else.
#[must_use]
pub const fn base_index(base: u8) -> Option<usize> {
    match base.to_ascii_uppercase() {
        b'T' | b'U' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

/// Translate one codon.
///
/// Stop codons yield `*`; codons with any non-ACGT character yield `X`.
#[must_use]
pub fn translate_codon(codon: &[u8]) -> char {
    let index = codon.iter().try_fold(0usize, |index, &base| {
        base_index(base).map(|value| index * 4 + value)
    });

    match index {
        Some(index) if codon.len() == CODON_LENGTH => char::from(STANDARD_CODE[index]),
        _ => UNKNOWN_AMINO_ACID,
    }
}

/// Translate from offset 0, halting at and excluding the first in-frame stop.
///
/// Trailing bases that do not complete a codon are ignored.
///
/// # Examples
///
/// ```rust
/// use codonav_core::sequence::translate;
///
/// assert_eq!(translate(b"ATGAAATAG"), "MK");
/// assert_eq!(translate(b"TAAATG"), "");
/// ```
#[must_use]
pub fn translate(sequence: &[u8]) -> String {
    sequence
        .chunks_exact(CODON_LENGTH)
        .map(translate_codon)
        .take_while(|&amino_acid| amino_acid != STOP_SYMBOL)
        .collect()
}
