use std::io::Write;

use crate::{CodonavError, results::ScanResults};

/// Write ORF translations as protein FASTA
pub fn write_faa_format<W: Write>(
    writer: &mut W,
    results: &ScanResults,
) -> Result<(), CodonavError> {
    for (i, orf) in results.orfs.iter().enumerate() {
        writeln!(
            writer,
            ">{}_orf{} {}",
            results.sequence_info.header,
            i + 1,
            orf.interval
        )?;
        writeln!(writer, "{}", orf.protein)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CodonavAnalyzer;
    use crate::config::CodonavConfig;

    #[test]
    fn test_write_faa_format() {
        let analyzer = CodonavAnalyzer::new(CodonavConfig {
            quiet: true,
            ..Default::default()
        });
        let results = analyzer.analyze_sequence("ATGAAATAGCCCATGTTTGGG", Some("s1".to_string()));
        let mut buffer = Vec::new();
        write_faa_format(&mut buffer, &results).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, ">s1_orf1 0-9\nMK\n>s1_orf2 12-21\nMFG\n");
    }
}
