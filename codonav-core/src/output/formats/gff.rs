use std::io::Write;

use crate::{
    CodonavError,
    constants::{GFF_SOURCE, VERSION},
    results::ScanResults,
};

/// Write results in GFF3 format.
///
/// Coordinates are converted to 1-based inclusive. Every ORF is on the
/// forward strand in frame 0.
pub fn write_gff_format<W: Write>(
    writer: &mut W,
    results: &ScanResults,
) -> Result<(), CodonavError> {
    let info = &results.sequence_info;

    writeln!(writer, "##gff-version 3")?;
    match &info.description {
        Some(desc) => writeln!(
            writer,
            "# Sequence Data: seqlen={};seqhdr=\"{} {}\"",
            info.length, info.header, desc
        )?,
        None => writeln!(
            writer,
            "# Sequence Data: seqlen={};seqhdr=\"{}\"",
            info.length, info.header
        )?,
    }
    writeln!(
        writer,
        "# Model Data: version={}.v{};gc_cont={:.2};orfs={}",
        GFF_SOURCE,
        VERSION,
        info.gc_content,
        results.orfs.len()
    )?;

    for (i, orf) in results.orfs.iter().enumerate() {
        writeln!(
            writer,
            "{}\t{}\tORF\t{}\t{}\t.\t+\t0\tID={}_{};gc_cont={:.2};protein_len={}",
            info.header,
            GFF_SOURCE,
            orf.interval.start + 1,
            orf.interval.end,
            info.header,
            i + 1,
            orf.gc_content,
            orf.protein.len()
        )?;
    }
    Ok(())
}
