//! # CodonNavigator CLI - Command-Line ORF Finder
//!
//! A command-line interface for the CodonNavigator ORF scanner.
//!
//! ## Usage
//!
//! ```bash
//! # Plain-text summary of every ORF
//! codonav -i genes.fasta -o orf_summary.txt
//!
//! # GFF3 output
//! codonav -i genes.fasta -f gff -o orfs.gff
//!
//! # Read from stdin, write proteins to stdout
//! cat genes.fasta | codonav -f faa
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input FASTA file (default: stdin)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-f, --format <FORMAT>`: Output format: summary, gff, sco, faa (default: summary)
//! - `-j, --threads <N>`: Threads used to scan records in parallel
//! - `-w, --weights`: Print the network weight heatmap table before the results
//! - `-q, --quiet`: Suppress progress messages
//!
//! Log verbosity can be tuned further with `RUST_LOG`.

use clap::{Arg, ArgAction, Command};
use codonav_core::algorithms::FixedWeights;
use codonav_core::config::{CodonavConfig, OutputFormat};
use codonav_core::output::{write_results, write_weight_heatmap};
use codonav_core::sequence::parse_fasta_reader;
use codonav_core::CodonavAnalyzer;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn build_command() -> Command {
    Command::new("codonav")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interpretable open reading frame finder")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Input FASTA file (default: stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: summary, gff, sco, faa")
                .default_value("summary"),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Number of threads for scanning records"),
        )
        .arg(
            Arg::new("weights")
                .short('w')
                .long("weights")
                .action(ArgAction::SetTrue)
                .help("Print the network weight heatmap before the results"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
}

/// Main entry point for the CodonNavigator CLI.
///
/// Parses command-line arguments, scans the input records and writes results
/// in the requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = build_command().get_matches();
    let quiet = matches.get_flag("quiet");

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if quiet { "warn" } else { "info" }),
    )
    .init();

    let format = matches
        .get_one::<String>("format")
        .map_or(Ok(OutputFormat::default()), |s| s.parse::<OutputFormat>())?;

    let config = CodonavConfig {
        quiet,
        output_format: format,
        num_threads: matches.get_one::<usize>("threads").copied(),
    };

    let analyzer = CodonavAnalyzer::new(config);
    let results = if let Some(input_file) = matches.get_one::<String>("input") {
        analyzer.analyze_fasta_file(input_file)?
    } else {
        analyzer.analyze_records(parse_fasta_reader(io::stdin().lock()))?
    };

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    if matches.get_flag("weights") {
        write_weight_heatmap(&mut writer, &FixedWeights::STANDARD)?;
        writeln!(writer)?;
    }

    for result in &results {
        write_results(&mut writer, result, analyzer.config.output_format)?;
    }
    writer.flush()?;

    if !quiet {
        info!(
            "Analysis complete! Found {} ORFs in {} sequences.",
            results.iter().map(|r| r.orfs.len()).sum::<usize>(),
            results.len()
        );
    }

    Ok(())
}
