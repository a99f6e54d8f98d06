use crate::constants::CODON_LENGTH;
use crate::types::OrfInterval;

/// Run-length encode inside-ORF flags into half-open intervals.
///
/// A rising edge at codon `i` opens an interval at `i * 3`; a falling edge
/// closes it at `i * 3`. A run still open when the flags end is closed at
/// `flags.len() * 3`, the length of the scanned (whole-codon) sequence, so
/// the one or two bases of a trailing partial codon never belong to an ORF
/// and every interval end stays codon-aligned.
///
/// # Examples
///
/// ```rust
/// use codonav_core::algorithms::extract_intervals;
/// use codonav_core::types::OrfInterval;
///
/// let intervals = extract_intervals(&[0, 1, 1, 0, 1]);
/// assert_eq!(intervals, vec![OrfInterval::new(3, 9), OrfInterval::new(12, 15)]);
/// ```
#[must_use]
pub fn extract_intervals(flags: &[u8]) -> Vec<OrfInterval> {
    let mut intervals = Vec::new();
    let mut open_start: Option<usize> = None;

    for (codon_index, &flag) in flags.iter().enumerate() {
        match (flag != 0, open_start) {
            (true, None) => open_start = Some(codon_index * CODON_LENGTH),
            (false, Some(start)) => {
                intervals.push(OrfInterval::new(start, codon_index * CODON_LENGTH));
                open_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = open_start {
        intervals.push(OrfInterval::new(start, flags.len() * CODON_LENGTH));
    }

    intervals
}
