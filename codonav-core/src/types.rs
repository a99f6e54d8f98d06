use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::constants::NUM_CATEGORIES;

/// One-hot category vector over `[Start, Stop, Neutral]`.
pub type CategoryVector = [u8; NUM_CATEGORIES];

/// Hidden-layer activations for a single codon.
pub type HiddenActivations = [f64; 2];

/// Codon categories recognised by the classifier.
///
/// Only the literal codon value matters: `ATG` is a start marker, the three
/// standard-code stop codons are stop markers and everything else is neutral.
///
/// # Examples
///
/// ```rust
/// use codonav_core::types::CodonCategory;
///
/// assert_eq!(CodonCategory::Start.to_vector(), [1, 0, 0]);
/// assert_eq!(CodonCategory::Neutral.to_index(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CodonCategory {
    /// ATG start codon
    Start,
    /// Stop codon (TAA, TAG, TGA)
    Stop,
    /// Any other three-character string
    Neutral,
}

impl CodonCategory {
    /// Position of the set entry in the one-hot vector
    #[must_use]
    pub const fn to_index(self) -> usize {
        match self {
            Self::Start => 0,
            Self::Stop => 1,
            Self::Neutral => 2,
        }
    }

    #[must_use]
    pub const fn to_vector(self) -> CategoryVector {
        match self {
            Self::Start => [1, 0, 0],
            Self::Stop => [0, 1, 0],
            Self::Neutral => [0, 0, 1],
        }
    }

    /// Recover the category from a one-hot vector.
    ///
    /// Vectors with no start or stop bit set are treated as neutral.
    #[must_use]
    pub const fn from_vector(vector: &CategoryVector) -> Self {
        if vector[0] == 1 {
            Self::Start
        } else if vector[1] == 1 {
            Self::Stop
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for CodonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Stop => write!(f, "Stop"),
            Self::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Half-open `[start, end)` character offsets of an ORF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrfInterval {
    /// First base of the start codon (0-based)
    pub start: usize,
    /// One past the last base of the ORF
    pub end: usize,
}

impl OrfInterval {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bases covered by the interval
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for OrfInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Nucleotide counts for a stretch of sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BaseComposition {
    pub a: usize,
    pub t: usize,
    pub g: usize,
    pub c: usize,
}

impl BaseComposition {
    /// Counts in `A, T, G, C` order, matching the pie chart legend
    #[must_use]
    pub const fn as_array(&self) -> [usize; 4] {
        [self.a, self.t, self.g, self.c]
    }

    /// Number of unambiguous bases counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.a + self.t + self.g + self.c
    }
}

/// A start or stop marker found while walking the codons of an ORF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodonHighlight {
    /// Offset of the codon relative to the start of the ORF
    pub offset: usize,
    /// Either [`CodonCategory::Start`] or [`CodonCategory::Stop`]
    pub category: CodonCategory,
}

/// Output of the fixed-weight scorer for one codon
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodonScore {
    /// ReLU activations of the two hidden units
    pub hidden: HiddenActivations,
    /// Raw output unit value (never used to decide ORF membership)
    pub output: f64,
}

/// A detected open reading frame with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Orf {
    /// Position of the ORF in the scanned sequence
    pub interval: OrfInterval,
    /// GC content as a percentage rounded to two decimals
    pub gc_content: f64,
    /// Standard-code translation up to the first in-frame stop
    pub protein: String,
    /// Raw ORF subsequence (uppercase)
    pub sequence: String,
    /// Base counts for the composition chart
    pub composition: BaseComposition,
    /// Start and stop codons inside the ORF
    pub highlights: Vec<CodonHighlight>,
}

impl Orf {
    /// Length of the ORF in base pairs
    #[must_use]
    pub const fn length(&self) -> usize {
        self.interval.len()
    }
}

/// Error types that can occur while reading input or writing results
#[derive(Error, Debug)]
pub enum CodonavError {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Configuration could not be applied
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
