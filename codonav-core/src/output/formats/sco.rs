use std::io::Write;

use crate::{CodonavError, results::ScanResults};

/// Write results in SCO format (simple coordinate output).
///
/// `header  orf_number  start  end  length  gc_content`, tab-separated, with
/// the 0-based half-open coordinates of the scan.
pub fn write_sco_format<W: Write>(
    writer: &mut W,
    results: &ScanResults,
) -> Result<(), CodonavError> {
    for (i, orf) in results.orfs.iter().enumerate() {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{:.2}",
            results.sequence_info.header,
            i + 1,
            orf.interval.start,
            orf.interval.end,
            orf.length(),
            orf.gc_content
        )?;
    }
    Ok(())
}
