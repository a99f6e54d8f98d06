use std::fs::File;
use std::io::Read;
use std::path::Path;

use bio::io::fasta;
use log::warn;

use crate::types::CodonavError;

/// One FASTA entry: identifier, optional description and raw sequence bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

/// Read every record from a FASTA file.
///
/// # Errors
///
/// Returns [`CodonavError::IoError`] when the file cannot be opened. Malformed
/// content is not an error; see [`parse_fasta_reader`].
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, CodonavError> {
    let file = File::open(path)?;
    Ok(parse_fasta_reader(file))
}

/// Parse FASTA records from an in-memory string
#[must_use]
pub fn parse_fasta_str(content: &str) -> Vec<FastaRecord> {
    parse_fasta_reader(content.as_bytes())
}

/// Parse FASTA records from any reader.
///
/// Records read before a malformed entry are kept; the fault itself is logged
/// and ends parsing. Input that is not FASTA at all yields no records.
pub fn parse_fasta_reader<R: Read>(reader: R) -> Vec<FastaRecord> {
    let mut sequences = Vec::new();

    for result in fasta::Reader::new(reader).records() {
        match result {
            Ok(record) => sequences.push(FastaRecord {
                id: record.id().to_string(),
                description: record.desc().map(String::from),
                sequence: record.seq().to_vec(),
            }),
            Err(e) => {
                warn!(
                    "Stopped reading FASTA input after {} record(s): {}",
                    sequences.len(),
                    e
                );
                break;
            }
        }
    }

    sequences
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fasta(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_fasta_sequences_basic() {
        let file = write_fasta(b">test_sequence\nATCG\nGCTA\n");

        let sequences = read_fasta_sequences(file.path()).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].id, "test_sequence");
        assert_eq!(sequences[0].sequence, b"ATCGGCTA".to_vec());
    }

    #[test]
    fn test_read_fasta_sequences_empty_file() {
        let file = write_fasta(b"");

        let sequences = read_fasta_sequences(file.path()).unwrap();
        assert!(sequences.is_empty());
    }

    #[test]
    fn test_read_fasta_sequences_file_not_found() {
        let result = read_fasta_sequences("nonexistent_file.fa");
        match result {
            Err(CodonavError::IoError(_)) => {}
            _ => panic!("Expected IoError for missing file"),
        }
    }

    #[test]
    fn test_parse_fasta_str_multiple() {
        let sequences = parse_fasta_str(">seq1\nATCG\n>seq2\nGCTA\n>seq3\nTTAA\n");
        let ids: Vec<&str> = sequences.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["seq1", "seq2", "seq3"]);
    }

    #[test]
    fn test_parse_fasta_str_with_description() {
        let sequences = parse_fasta_str(">seq1 This is a test sequence\nATCG\n>seq2\nGCTA\n");
        assert_eq!(sequences.len(), 2);
        assert_eq!(
            sequences[0].description,
            Some("This is a test sequence".to_string())
        );
        assert_eq!(sequences[1].description, None);
    }

    #[test]
    fn test_parse_fasta_str_multiline_sequence() {
        let sequences = parse_fasta_str(">seq1\nATG\nAAA\nTAG\n");
        assert_eq!(sequences[0].sequence, b"ATGAAATAG".to_vec());
    }

    #[test]
    fn test_parse_fasta_str_not_fasta() {
        let sequences = parse_fasta_str("this is not a fasta file\nATGAAATAG\n");
        assert!(sequences.is_empty());
    }
}
