//! Optimal global alignment of two or three sequences.

pub mod error;
pub mod lattice;
pub mod pairwise;
pub mod scoring;
pub mod triple;

pub use error::AlignmentError;
pub use lattice::{best_of, Cell, Direction, Lattice};
pub use pairwise::{align_pair, PairAlignment, PairDirection};
pub use scoring::ScoringScheme;
pub use triple::{align_triple, TripleAlignment, TripleDirection};

/// Symbol inserted for a position consumed by the other sequence(s).
pub const GAP: char = '-';

/// Removes gap symbols, recovering the original sequence.
///
/// ```
/// use bioalg::libs::alignment::ungapped;
/// assert_eq!(ungapped("GA--TTA-CA"), "GATTACA");
/// ```
pub fn ungapped(aligned: &str) -> String {
    aligned.chars().filter(|&c| c != GAP).collect()
}
