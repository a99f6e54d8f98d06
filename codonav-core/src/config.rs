use std::fmt;
use std::str::FromStr;

use crate::types::CodonavError;

/// Output format options for ORF scan results.
///
/// # Formats
///
/// - **Summary**: Plain-text export, one block per ORF
/// - **GFF**: General Feature Format version 3
/// - **SCO**: Tab-separated coordinates with length and GC content
/// - **FAA**: Protein FASTA of the translated ORFs
///
/// # Examples
///
/// ```rust
/// use codonav_core::config::{CodonavConfig, OutputFormat};
///
/// let config = CodonavConfig {
///     output_format: OutputFormat::Gff,
///     ..Default::default()
/// };
/// assert_eq!("gff".parse::<OutputFormat>().unwrap(), config.output_format);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain-text summary with coordinates, GC content, protein and raw sequence.
    ///
    /// This is the downloadable summary file of the upload tool.
    #[default]
    Summary,

    /// General Feature Format version 3.
    ///
    /// One `ORF` feature per interval with 1-based inclusive coordinates.
    Gff,

    /// Simple coordinate output.
    ///
    /// Tab-delimited, one line per ORF. Easy to load into a spreadsheet.
    Sco,

    /// Protein FASTA.
    ///
    /// One record per ORF holding its translation.
    Faa,
}

impl FromStr for OutputFormat {
    type Err = CodonavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "summary" | "txt" => Ok(Self::Summary),
            "gff" | "gff3" => Ok(Self::Gff),
            "sco" => Ok(Self::Sco),
            "faa" | "protein" => Ok(Self::Faa),
            other => Err(CodonavError::InvalidConfiguration(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Gff => write!(f, "gff"),
            Self::Sco => write!(f, "sco"),
            Self::Faa => write!(f, "faa"),
        }
    }
}

/// Configuration settings for an ORF scan.
///
/// The detection algorithm itself has no knobs: the codon weights are
/// constants. Configuration only covers how records are processed and
/// reported.
///
/// # Examples
///
/// ```rust
/// use codonav_core::config::CodonavConfig;
///
/// let config = CodonavConfig {
///     num_threads: Some(4),
///     quiet: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodonavConfig {
    /// Suppress progress messages.
    ///
    /// When `true`, per-record progress is not logged. Warnings about
    /// malformed input are still emitted.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Output format for scan results.
    ///
    /// **Default**: [`OutputFormat::Summary`]
    pub output_format: OutputFormat,

    /// Number of threads used to scan records in parallel.
    ///
    /// When set, a dedicated Rayon pool of this size is used. `None` uses
    /// the global pool.
    ///
    /// **Default**: `None`
    pub num_threads: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodonavConfig::default();
        assert!(!config.quiet);
        assert_eq!(config.output_format, OutputFormat::Summary);
        assert_eq!(config.num_threads, None);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("summary".parse::<OutputFormat>().unwrap(), OutputFormat::Summary);
        assert_eq!("GFF3".parse::<OutputFormat>().unwrap(), OutputFormat::Gff);
        assert_eq!("sco".parse::<OutputFormat>().unwrap(), OutputFormat::Sco);
        assert_eq!("protein".parse::<OutputFormat>().unwrap(), OutputFormat::Faa);
    }

    #[test]
    fn test_output_format_parsing_rejects_unknown() {
        match "gbk".parse::<OutputFormat>() {
            Err(CodonavError::InvalidConfiguration(msg)) => assert!(msg.contains("gbk")),
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [
            OutputFormat::Summary,
            OutputFormat::Gff,
            OutputFormat::Sco,
            OutputFormat::Faa,
        ] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
