use serde::Serialize;

use crate::types::{CodonScore, Orf};

/// ORF scan results for one sequence.
///
/// Holds everything a presentation layer needs: the ORFs with their metrics,
/// plus the per-codon activation flags and network scores behind them.
///
/// # Examples
///
/// ```rust
/// use codonav_core::{CodonavAnalyzer, config::CodonavConfig};
///
/// let analyzer = CodonavAnalyzer::new(CodonavConfig::default());
/// let results = analyzer.analyze_sequence("ATGAAATAG", Some("demo".to_string()));
///
/// assert_eq!(results.sequence_info.header, "demo");
/// assert_eq!(results.orfs.len(), 1);
/// assert_eq!(results.orfs[0].protein, "MK");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ScanResults {
    /// ORFs in order of their start offset.
    pub orfs: Vec<Orf>,

    /// Information about the scanned sequence.
    pub sequence_info: SequenceInfo,

    /// Inside-ORF flag per codon, as emitted by the activation state machine.
    pub activations: Vec<u8>,

    /// Fixed-weight network output per codon.
    ///
    /// Informational only; aligned with `activations`.
    pub codon_scores: Vec<CodonScore>,
}

impl ScanResults {
    #[must_use]
    pub fn has_orfs(&self) -> bool {
        !self.orfs.is_empty()
    }
}

/// Information about a scanned sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceInfo {
    /// Sequence identifier from the FASTA header.
    ///
    /// The first word of the header line (after '>').
    pub header: String,

    /// Everything after the first word in the FASTA header line.
    pub description: Option<String>,

    /// Length of the normalised sequence in base pairs.
    pub length: usize,

    /// Number of whole codons scanned in frame 0.
    pub codon_count: usize,

    /// GC content of the whole sequence as a percentage.
    pub gc_content: f64,
}
