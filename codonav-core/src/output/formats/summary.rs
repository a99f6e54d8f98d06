use std::io::Write;

use crate::{CodonavError, results::ScanResults};

/// Write results as the plain-text summary export.
///
/// One block per ORF, numbered from 1 within each record:
///
/// ```text
/// ORF 1: 0-9 (9 bp)
/// GC Content: 22.22%
/// Protein: MK
/// Sequence: ATGAAATAG
/// ```
///
/// followed by a blank line. Records without ORFs write nothing.
pub fn write_summary_format<W: Write>(
    writer: &mut W,
    results: &ScanResults,
) -> Result<(), CodonavError> {
    for (i, orf) in results.orfs.iter().enumerate() {
        writeln!(
            writer,
            "ORF {}: {} ({} bp)",
            i + 1,
            orf.interval,
            orf.length()
        )?;
        writeln!(writer, "GC Content: {:.2}%", orf.gc_content)?;
        writeln!(writer, "Protein: {}", orf.protein)?;
        writeln!(writer, "Sequence: {}", orf.sequence)?;
        writeln!(writer)?;
    }
    Ok(())
}
