use crate::constants::{CODON_LENGTH, START_CODON, STOP_CODONS};
use crate::types::{CategoryVector, CodonCategory};

/// Classify a codon by its literal value.
///
/// The comparison is case-sensitive; callers upper-case the sequence first.
/// Any three characters that are not a start or stop marker, including
/// ambiguous bases, are neutral.
///
/// # Examples
///
/// ```rust
/// use codonav_core::algorithms::classify;
/// use codonav_core::types::CodonCategory;
///
/// assert_eq!(classify(b"ATG"), CodonCategory::Start);
/// assert_eq!(classify(b"TGA"), CodonCategory::Stop);
/// assert_eq!(classify(b"NNN"), CodonCategory::Neutral);
/// ```
#[must_use]
pub fn classify(codon: &[u8]) -> CodonCategory {
    if codon == START_CODON {
        CodonCategory::Start
    } else if STOP_CODONS.iter().any(|stop| codon == *stop) {
        CodonCategory::Stop
    } else {
        CodonCategory::Neutral
    }
}

/// Classify every whole codon of a normalised sequence in frame 0.
///
/// Trailing bases that do not complete a codon are skipped.
pub fn classify_codons(sequence: &[u8]) -> Vec<CategoryVector> {
    sequence
        .chunks_exact(CODON_LENGTH)
        .map(|codon| classify(codon).to_vector())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_start_codon() {
        assert_eq!(classify(b"ATG"), CodonCategory::Start);
        assert_eq!(classify(b"ATG").to_vector(), [1, 0, 0]);
    }

    #[test]
    fn test_classify_stop_codons() {
        assert_eq!(classify(b"TAA"), CodonCategory::Stop);
        assert_eq!(classify(b"TAG"), CodonCategory::Stop);
        assert_eq!(classify(b"TGA"), CodonCategory::Stop);
        assert_eq!(classify(b"TAA").to_vector(), [0, 1, 0]);
    }

    #[test]
    fn test_classify_neutral_codons() {
        assert_eq!(classify(b"AAA"), CodonCategory::Neutral);
        assert_eq!(classify(b"GTG"), CodonCategory::Neutral);
        assert_eq!(classify(b"TTG"), CodonCategory::Neutral);
        assert_eq!(classify(b"AAA").to_vector(), [0, 0, 1]);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(classify(b"atg"), CodonCategory::Neutral);
        assert_eq!(classify(b"taa"), CodonCategory::Neutral);
    }

    #[test]
    fn test_classify_non_acgt_is_neutral() {
        assert_eq!(classify(b"ANG"), CodonCategory::Neutral);
        assert_eq!(classify(b"T-A"), CodonCategory::Neutral);
        assert_eq!(classify(b"???"), CodonCategory::Neutral);
    }

    #[test]
    fn test_classify_codons_drops_partial_tail() {
        let vectors = classify_codons(b"ATGAAATAGCC");
        assert_eq!(vectors, vec![[1, 0, 0], [0, 0, 1], [0, 1, 0]]);
    }

    #[test]
    fn test_classify_codons_short_sequence() {
        assert!(classify_codons(b"").is_empty());
        assert!(classify_codons(b"AT").is_empty());
    }

    #[test]
    fn test_every_vector_is_one_hot() {
        for codon in [b"ATG", b"TAA", b"CCC", b"NNN"] {
            let vector = classify(codon).to_vector();
            assert_eq!(vector.iter().map(|&bit| u32::from(bit)).sum::<u32>(), 1);
        }
    }
}
