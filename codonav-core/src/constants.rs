// =============================================================================
// =============================================================================

/// Version string for CodonNavigator
pub const VERSION: &str = "0.1.0";

/// Source tag written into GFF feature lines
pub const GFF_SOURCE: &str = "CodonNavigator";

// =============================================================================
// =============================================================================

/// Length of a codon in base pairs
pub const CODON_LENGTH: usize = 3;

/// The only codon recognised as a start marker
pub const START_CODON: &[u8; 3] = b"ATG";

/// Codons recognised as stop markers under the standard code
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Amino acid symbol emitted for codons with non-ACGT characters
pub const UNKNOWN_AMINO_ACID: char = 'X';

/// Identifier used when a sequence is scanned without a header
pub const DEFAULT_SEQUENCE_ID: &str = "CodonNav_Seq_1";

// =============================================================================
// =============================================================================

/// Number of codon categories (input layer width)
pub const NUM_CATEGORIES: usize = 3;

/// Number of hidden units in the fixed-weight network
pub const NUM_HIDDEN_UNITS: usize = 2;

/// First-layer weights, one row per codon category
pub const FIRST_LAYER_WEIGHTS: [[f64; NUM_HIDDEN_UNITS]; NUM_CATEGORIES] =
    [[2.0, -1.0], [-1.0, 2.0], [0.0, 0.5]];

/// First-layer biases
pub const FIRST_LAYER_BIAS: [f64; NUM_HIDDEN_UNITS] = [0.0, 0.0];

/// Second-layer weights, hidden unit to output
pub const SECOND_LAYER_WEIGHTS: [f64; NUM_HIDDEN_UNITS] = [1.0, 1.0];

/// Second-layer bias
pub const SECOND_LAYER_BIAS: f64 = 0.0;

/// Row labels of the weight heatmap (the last row is padding)
pub const HEATMAP_ROW_LABELS: [&str; 4] =
    ["Start Codon", "Stop Codon", "Neutral Codon", "Other"];

/// Column labels of the weight heatmap
pub const HEATMAP_COLUMN_LABELS: [&str; NUM_HIDDEN_UNITS] = ["Hidden Unit 1", "Hidden Unit 2"];
