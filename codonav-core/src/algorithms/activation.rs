use crate::types::{CategoryVector, CodonCategory};

/// Inside-ORF state carried between codons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationState {
    #[default]
    Off,
    On,
}

/// Streaming form of the activation rule.
///
/// Feed category vectors in codon order; each step returns the flag for that
/// codon. A start codon always switches the machine on. A stop codon seen
/// while on is still part of the ORF; the switch off takes effect after it.
#[derive(Debug, Clone, Default)]
pub struct ActivationMachine {
    state: ActivationState,
}

impl ActivationMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> ActivationState {
        self.state
    }

    pub fn step(&mut self, vector: &CategoryVector) -> u8 {
        match (CodonCategory::from_vector(vector), self.state) {
            (CodonCategory::Start, _) => {
                self.state = ActivationState::On;
                1
            }
            (CodonCategory::Stop, ActivationState::On) => {
                self.state = ActivationState::Off;
                1
            }
            (_, ActivationState::On) => 1,
            (_, ActivationState::Off) => 0,
        }
    }
}

/// Convert a codon-ordered run of category vectors into inside-ORF flags.
///
/// # Examples
///
/// ```rust
/// use codonav_core::algorithms::{activate, classify_codons};
///
/// let flags = activate(&classify_codons(b"CCCATGATGTAACCC"));
/// assert_eq!(flags, vec![0, 1, 1, 1, 0]);
/// ```
#[must_use]
pub fn activate(vectors: &[CategoryVector]) -> Vec<u8> {
    let mut machine = ActivationMachine::new();
    vectors.iter().map(|vector| machine.step(vector)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::classify_codons;

    fn flags_for(sequence: &[u8]) -> Vec<u8> {
        activate(&classify_codons(sequence))
    }

    #[test]
    fn test_terminated_orf() {
        assert_eq!(flags_for(b"ATGAAATAG"), vec![1, 1, 1]);
    }

    #[test]
    fn test_no_start_codon() {
        assert_eq!(flags_for(b"AAAAAACCC"), vec![0, 0, 0]);
    }

    #[test]
    fn test_unterminated_orf_stays_on() {
        assert_eq!(flags_for(b"ATGAAAAAA"), vec![1, 1, 1]);
    }

    #[test]
    fn test_repeated_start_is_noop() {
        assert_eq!(flags_for(b"ATGATGTAA"), vec![1, 1, 1]);
        assert_eq!(flags_for(b"ATGAAAATGCCCTAGCCC"), vec![1, 1, 1, 1, 1, 0]);
    }

    #[test]
    fn test_stop_while_off_is_ignored() {
        assert_eq!(flags_for(b"TAACCCTGA"), vec![0, 0, 0]);
    }

    #[test]
    fn test_stop_closes_after_emitting() {
        assert_eq!(flags_for(b"ATGTAATAAATG"), vec![1, 1, 0, 1]);
    }

    #[test]
    fn test_start_flag_always_set() {
        let sequences: [&[u8]; 4] = [
            b"ATGATGATG",
            b"TAAATGTAA",
            b"CCCATGTGAATG",
            b"ATGTAGATGTGAATG",
        ];
        for sequence in sequences {
            let vectors = classify_codons(sequence);
            let flags = activate(&vectors);
            for (vector, flag) in vectors.iter().zip(&flags) {
                if CodonCategory::from_vector(vector) == CodonCategory::Start {
                    assert_eq!(*flag, 1);
                }
            }
        }
    }

    #[test]
    fn test_machine_tracks_state() {
        let mut machine = ActivationMachine::new();
        assert_eq!(machine.state(), ActivationState::Off);
        machine.step(&CodonCategory::Start.to_vector());
        assert_eq!(machine.state(), ActivationState::On);
        machine.step(&CodonCategory::Start.to_vector());
        assert_eq!(machine.state(), ActivationState::On);
        machine.step(&CodonCategory::Neutral.to_vector());
        assert_eq!(machine.state(), ActivationState::On);
        assert_eq!(machine.step(&CodonCategory::Stop.to_vector()), 1);
        assert_eq!(machine.state(), ActivationState::Off);
    }

    #[test]
    fn test_empty_input() {
        assert!(activate(&[]).is_empty());
    }
}
