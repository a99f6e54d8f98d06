#![allow(dead_code)]

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// Two ORFs in the first record, none in the second, one unterminated in the third.
pub const SAMPLE_FASTA: &str = "\
>seq1 first record
ATGAAATAGCCC
ATGTTTGGGTGA
>seq2
AAAAAACCC
>seq3
cccatgaaaaaagc
";

/// Writes FASTA content to a temporary file that lives as long as the handle
pub fn fasta_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Runs the codonav CLI on an input file and returns its stdout
pub fn run_codonav(input_file: &str, format: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("codonav")?;
    cmd.arg("-i").arg(input_file).arg("-f").arg(format).arg("-q");

    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(String::from_utf8(output)?)
}
