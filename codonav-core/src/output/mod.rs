//! Output formatting for ORF scan results.
//!
//! This module provides writers for converting [`ScanResults`] into text
//! formats, plus the weight heatmap table of the fixed-weight network.
//!
//! ## Supported Formats
//!
//! - **Summary**: Plain-text export, one block per ORF
//! - **GFF3**: General Feature Format version 3
//! - **SCO**: Tab-separated coordinates
//! - **FAA**: Protein FASTA
//!
//! ## Examples
//!
//! ```rust
//! use codonav_core::{CodonavAnalyzer, config::{CodonavConfig, OutputFormat}};
//! use codonav_core::output::write_results;
//!
//! let analyzer = CodonavAnalyzer::new(CodonavConfig::default());
//! let results = analyzer.analyze_sequence("ATGAAATAG", None);
//!
//! let mut buffer = Vec::new();
//! write_results(&mut buffer, &results, OutputFormat::Summary)?;
//! assert!(String::from_utf8_lossy(&buffer).starts_with("ORF 1: 0-9 (9 bp)"));
//! # Ok::<(), codonav_core::types::CodonavError>(())
//! ```

use std::io::Write;

use crate::algorithms::FixedWeights;
use crate::constants::{HEATMAP_COLUMN_LABELS, HEATMAP_ROW_LABELS};
use crate::{CodonavError, config::OutputFormat, results::ScanResults};

mod formats {
    pub mod faa;
    pub mod gff;
    pub mod sco;
    pub mod summary;
}

use formats::{
    faa::write_faa_format, gff::write_gff_format, sco::write_sco_format,
    summary::write_summary_format,
};

/// Writes scan results in the specified format.
///
/// # Errors
///
/// Returns [`CodonavError::IoError`] if writing fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &ScanResults,
    format: OutputFormat,
) -> Result<(), CodonavError> {
    match format {
        OutputFormat::Summary => write_summary_format(writer, results),
        OutputFormat::Gff => write_gff_format(writer, results),
        OutputFormat::Sco => write_sco_format(writer, results),
        OutputFormat::Faa => write_faa_format(writer, results),
    }
}

/// Writes the first-layer weights as a tab-separated heatmap table.
///
/// # Errors
///
/// Returns [`CodonavError::IoError`] if writing fails.
pub fn write_weight_heatmap<W: Write>(
    writer: &mut W,
    weights: &FixedWeights,
) -> Result<(), CodonavError> {
    writeln!(writer, "\t{}", HEATMAP_COLUMN_LABELS.join("\t"))?;
    for (label, row) in HEATMAP_ROW_LABELS.iter().zip(weights.heatmap()) {
        writeln!(writer, "{}\t{:.1}\t{:.1}", label, row[0], row[1])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CodonavAnalyzer, config::CodonavConfig};
    use std::io::Cursor;

    fn create_test_results() -> ScanResults {
        let analyzer = CodonavAnalyzer::new(CodonavConfig {
            quiet: true,
            ..Default::default()
        });
        analyzer.analyze_sequence("ATGAAATAGCCC", Some("test_seq".to_string()))
    }

    fn render(results: &ScanResults, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        write_results(&mut cursor, results, format).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_results_summary_format() {
        let output = render(&create_test_results(), OutputFormat::Summary);
        assert!(output.contains("ORF 1: 0-9 (9 bp)"));
        assert!(output.contains("Protein: MK"));
    }

    #[test]
    fn test_write_results_gff_format() {
        let output = render(&create_test_results(), OutputFormat::Gff);
        assert!(output.contains("##gff-version 3"));
        assert!(output.contains("test_seq\tCodonNavigator\tORF\t1\t9"));
    }

    #[test]
    fn test_write_results_sco_format() {
        let output = render(&create_test_results(), OutputFormat::Sco);
        assert_eq!(output, "test_seq\t1\t0\t9\t9\t22.22\n");
    }

    #[test]
    fn test_write_results_faa_format() {
        let output = render(&create_test_results(), OutputFormat::Faa);
        assert_eq!(output, ">test_seq_orf1 0-9\nMK\n");
    }

    #[test]
    fn test_write_results_empty_orfs() {
        let analyzer = CodonavAnalyzer::new(CodonavConfig {
            quiet: true,
            ..Default::default()
        });
        let results = analyzer.analyze_sequence("AAAAAACCC", Some("empty_seq".to_string()));

        for format in [OutputFormat::Summary, OutputFormat::Sco, OutputFormat::Faa] {
            assert_eq!(render(&results, format), "", "format {:?}", format);
        }
        assert!(!render(&results, OutputFormat::Gff).contains("\tORF\t"));
    }

    #[test]
    fn test_write_weight_heatmap() {
        let mut buffer = Vec::new();
        write_weight_heatmap(&mut buffer, &FixedWeights::STANDARD).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "\tHidden Unit 1\tHidden Unit 2");
        assert_eq!(lines[1], "Start Codon\t2.0\t-1.0");
        assert_eq!(lines[2], "Stop Codon\t-1.0\t2.0");
        assert_eq!(lines[3], "Neutral Codon\t0.0\t0.5");
        assert_eq!(lines[4], "Other\t0.0\t0.0");
    }
}
