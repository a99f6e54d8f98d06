use std::path::Path;

use log::{debug, info};
use rayon::prelude::*;

use crate::algorithms::{activate, classify_codons, extract_intervals, score};
use crate::config::CodonavConfig;
use crate::constants::DEFAULT_SEQUENCE_ID;
use crate::results::{ScanResults, SequenceInfo};
use crate::sequence::{
    FastaRecord, base_composition, codon_count, codon_highlights, gc_content, normalize,
    parse_fasta_str, read_fasta_sequences, translate,
};
use crate::types::{CodonScore, CodonavError, Orf, OrfInterval};

/// Find ORF intervals in a normalised sequence.
///
/// Classifies every whole codon in frame 0, runs the activation state machine
/// over the categories and extracts the runs of active codons.
///
/// # Examples
///
/// ```rust
/// use codonav_core::engine::find_orfs;
/// use codonav_core::types::OrfInterval;
///
/// assert_eq!(find_orfs(b"ATGAAATAG"), vec![OrfInterval::new(0, 9)]);
/// assert!(find_orfs(b"AAAAAACCC").is_empty());
/// ```
#[must_use]
pub fn find_orfs(sequence: &[u8]) -> Vec<OrfInterval> {
    extract_intervals(&activate(&classify_codons(sequence)))
}

/// Attach metrics to an interval of a normalised sequence.
///
/// # Panics
///
/// Panics if `interval` does not lie within `sequence`.
#[must_use]
pub fn build_orf(sequence: &[u8], interval: OrfInterval) -> Orf {
    let orf_sequence = &sequence[interval.start..interval.end];

    Orf {
        interval,
        gc_content: gc_content(orf_sequence),
        protein: translate(orf_sequence),
        sequence: String::from_utf8_lossy(orf_sequence).into_owned(),
        composition: base_composition(orf_sequence),
        highlights: codon_highlights(orf_sequence),
    }
}

/// High-level ORF scanner.
///
/// Each record is scanned independently: the only shared state is the
/// constant network weights, so multi-record input is fanned out over Rayon.
///
/// # Examples
///
/// ## Scan a sequence string
///
/// ```rust
/// use codonav_core::{CodonavAnalyzer, config::CodonavConfig};
///
/// let analyzer = CodonavAnalyzer::new(CodonavConfig::default());
/// let results = analyzer.analyze_sequence("ccc ATG AAA TAG ccc", None);
///
/// let orf = &results.orfs[0];
/// assert_eq!((orf.interval.start, orf.interval.end), (3, 12));
/// assert_eq!(orf.gc_content, 22.22);
/// ```
///
/// ## Scan a FASTA file
///
/// ```rust,no_run
/// use codonav_core::{CodonavAnalyzer, config::CodonavConfig};
///
/// let analyzer = CodonavAnalyzer::new(CodonavConfig::default());
/// for result in analyzer.analyze_fasta_file("genes.fasta")? {
///     println!("{}: {} ORFs", result.sequence_info.header, result.orfs.len());
/// }
/// # Ok::<(), codonav_core::types::CodonavError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodonavAnalyzer {
    /// Configuration options for the scan
    pub config: CodonavConfig,
}

impl CodonavAnalyzer {
    #[must_use]
    pub const fn new(config: CodonavConfig) -> Self {
        Self { config }
    }

    /// Scans every record of a FASTA file.
    ///
    /// # Errors
    ///
    /// Returns [`CodonavError::IoError`] if the file cannot be read, or
    /// [`CodonavError::InvalidConfiguration`] if the thread pool cannot be built.
    pub fn analyze_fasta_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<ScanResults>, CodonavError> {
        let records = read_fasta_sequences(path.as_ref())?;
        if !self.config.quiet {
            info!(
                "Read {} record(s) from {}",
                records.len(),
                path.as_ref().display()
            );
        }
        self.analyze_records(records)
    }

    /// Scans every record of FASTA text held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`CodonavError::InvalidConfiguration`] if the thread pool
    /// cannot be built.
    pub fn analyze_fasta_str(&self, content: &str) -> Result<Vec<ScanResults>, CodonavError> {
        self.analyze_records(parse_fasta_str(content))
    }

    /// Scans already-parsed records, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`CodonavError::InvalidConfiguration`] if a dedicated pool of
    /// `num_threads` threads cannot be built.
    pub fn analyze_records(
        &self,
        records: Vec<FastaRecord>,
    ) -> Result<Vec<ScanResults>, CodonavError> {
        let scan_all = || {
            records
                .into_par_iter()
                .map(|record| {
                    self.analyze_sequence_bytes(&record.sequence, record.id, record.description)
                })
                .collect::<Vec<_>>()
        };

        match self.config.num_threads {
            Some(num_threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()
                    .map_err(|e| {
                        CodonavError::InvalidConfiguration(format!(
                            "Failed to configure thread pool: {}",
                            e
                        ))
                    })?;
                Ok(pool.install(scan_all))
            }
            None => Ok(scan_all()),
        }
    }

    /// Scans a single sequence given as a string.
    ///
    /// The header defaults to [`DEFAULT_SEQUENCE_ID`].
    #[must_use]
    pub fn analyze_sequence(&self, sequence: &str, header: Option<String>) -> ScanResults {
        let header = header.unwrap_or_else(|| DEFAULT_SEQUENCE_ID.to_string());
        self.analyze_sequence_bytes(sequence.as_bytes(), header, None)
    }

    /// Scans a single raw sequence.
    ///
    /// The sequence is normalised (upper-cased, whitespace removed) before
    /// scanning; all offsets in the results refer to the normalised sequence.
    #[must_use]
    pub fn analyze_sequence_bytes(
        &self,
        sequence: &[u8],
        header: String,
        description: Option<String>,
    ) -> ScanResults {
        let sequence = normalize(sequence);
        let vectors = classify_codons(&sequence);
        let activations = activate(&vectors);
        let (outputs, hidden) = score(&vectors);
        let codon_scores = hidden
            .into_iter()
            .zip(outputs)
            .map(|(hidden, output)| CodonScore { hidden, output })
            .collect();

        let orfs: Vec<Orf> = extract_intervals(&activations)
            .into_iter()
            .map(|interval| build_orf(&sequence, interval))
            .collect();

        debug!(
            "{}: {} bp, {} codons, {} active",
            header,
            sequence.len(),
            vectors.len(),
            activations.iter().filter(|&&flag| flag == 1).count()
        );

        if !self.config.quiet {
            if orfs.is_empty() {
                info!("{}: No ORFs found.", header);
            } else {
                info!("{}: found {} ORF(s)", header, orfs.len());
            }
        }

        ScanResults {
            orfs,
            sequence_info: SequenceInfo {
                header,
                description,
                length: sequence.len(),
                codon_count: codon_count(&sequence),
                gc_content: gc_content(&sequence),
            },
            activations,
            codon_scores,
        }
    }
}
