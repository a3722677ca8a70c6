//! BLOSUM-style substitution matrices derived from aligned blocks.
//!
//! The derivation runs in three stages:
//!
//! 1. Q values: background frequency of every symbol over all block cells;
//! 2. P values: frequency of every symbol pair within block columns;
//! 3. scores: `(1/lambda) * ln(p / (q * q))`.

pub mod block;
pub mod error;
pub mod matrix;
pub mod pvalue;
pub mod qvalue;

pub use block::{blocks_to_text, parse_blocks_from_text, sample_blocks, Block};
pub use error::{BlosumError, MalformedBlockError};
pub use matrix::{compute_score_matrix, SymbolMatrix, HALF_BIT_LAMBDA};
pub use pvalue::{column_pairs, compute_p_values, count_pairs, PairCounts};
pub use qvalue::{compute_q_values, QValue, QValues};

use serde::Serialize;

/// Every stage of the derivation for one set of blocks. The P and score
/// matrices follow the Q value order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlosumTables {
    pub q_values: QValues,
    pub pair_counts: PairCounts,
    pub p_values: SymbolMatrix,
    pub lambda: f64,
    pub scores: SymbolMatrix,
}

impl BlosumTables {
    pub fn from_blocks(blocks: &[Block], lambda: f64) -> Result<Self, BlosumError> {
        let q_values = compute_q_values(blocks);
        let pair_counts = count_pairs(blocks, &q_values.symbols())?;
        let p_values = pair_counts.to_probabilities();
        let scores = compute_score_matrix(&q_values, &p_values, lambda);

        Ok(Self {
            q_values,
            pair_counts,
            p_values,
            lambda,
            scores,
        })
    }

    /// ```
    /// use bioalg::libs::blosum::{BlosumTables, HALF_BIT_LAMBDA};
    /// let tables = BlosumTables::from_text("AB\nAB\nAC", HALF_BIT_LAMBDA).unwrap();
    /// assert_eq!(tables.q_values.symbols(), vec!['A', 'B', 'C']);
    /// assert_eq!(tables.pair_counts.total_pairs(), 6);
    ///
    /// assert!(BlosumTables::from_text("AB\nA", HALF_BIT_LAMBDA).is_err());
    /// ```
    pub fn from_text(raw: &str, lambda: f64) -> Result<Self, BlosumError> {
        let blocks = parse_blocks_from_text(raw)?;
        Self::from_blocks(&blocks, lambda)
    }
}
