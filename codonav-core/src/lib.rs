//! # CodonNavigator - Interpretable ORF Detection
//!
//! Scans DNA sequences for open reading frames using a hand-specified codon
//! network: no training, no learned parameters, every decision traceable to a
//! single start or stop codon.
//!
//! ## Overview
//!
//! Each whole codon in reading frame 0 is classified as a start marker (`ATG`),
//! a stop marker (`TAA`, `TAG`, `TGA`) or neutral. A two-state machine walks
//! the codons and flags those inside an ORF; runs of flagged codons become
//! half-open ORF intervals. Each ORF is then annotated with its GC content,
//! standard-code translation and base composition.
//!
//! A fixed 3→2→1 feedforward network scores the same codon categories for the
//! weight heatmap and activation views. It is purely informational and does
//! not take part in ORF detection.
//!
//! ## Quick Start
//!
//! ```rust
//! use codonav_core::{CodonavAnalyzer, config::CodonavConfig};
//!
//! let analyzer = CodonavAnalyzer::new(CodonavConfig::default());
//! let results = analyzer.analyze_sequence("ATGAAATAG", Some("demo".to_string()));
//!
//! for orf in &results.orfs {
//!     println!("{} ({} bp) GC {:.2}% {}", orf.interval, orf.length(), orf.gc_content, orf.protein);
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`algorithms`]: Codon classifier, fixed-weight scorer, activation state machine, interval extractor
//! - [`sequence`]: Normalisation, GC content, composition, translation and FASTA input
//! - [`engine`]: Per-record scan pipeline and the [`CodonavAnalyzer`] entry point
//! - [`results`]: Scan results handed to presentation layers
//! - [`output`]: Summary, GFF3, SCO and protein FASTA writers
//! - [`config`]: Configuration options
//! - [`types`]: Core data types and the error enum
//!
//! ## Error Handling
//!
//! Scanning itself cannot fail. Fallible operations (reading files, writing
//! output, building a thread pool) return
//! [`Result<T, CodonavError>`](types::CodonavError).

pub mod algorithms;
pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod results;
pub mod sequence;
pub mod types;

pub use engine::CodonavAnalyzer;
pub use types::CodonavError;
