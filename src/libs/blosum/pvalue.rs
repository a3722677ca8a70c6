use super::block::Block;
use super::error::BlosumError;
use super::matrix::SymbolMatrix;
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use serde::Serialize;

/// Number of unordered pairs among `n` items, `n choose 2`.
///
/// ```
/// assert_eq!(bioalg::libs::blosum::column_pairs(6), 15);
/// assert_eq!(bioalg::libs::blosum::column_pairs(1), 0);
/// assert_eq!(bioalg::libs::blosum::column_pairs(0), 0);
/// ```
pub fn column_pairs(n: usize) -> u64 {
    let n = n as u64;
    n * n.saturating_sub(1) / 2
}

/// Symbol pairs observed within block columns.
///
/// Same-symbol pairs sit on the diagonal; a cross pair is added to both
/// `[a][b]` and `[b][a]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairCounts {
    symbols: Vec<char>,
    counts: Vec<u64>,
    total_pairs: u64,
}

impl PairCounts {
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn get(&self, i: usize, j: usize) -> u64 {
        self.counts[i * self.symbols.len() + j]
    }

    /// Sum of `n choose 2` over every column of every block.
    pub fn total_pairs(&self) -> u64 {
        self.total_pairs
    }

    /// Divides every count by the total. With no pairs at all the result is
    /// the zero matrix.
    pub fn to_probabilities(&self) -> SymbolMatrix {
        let n = self.symbols.len();
        let mut p = SymbolMatrix::zeros(self.symbols.clone());
        if self.total_pairs == 0 {
            return p;
        }

        let total = self.total_pairs as f64;
        for i in 0..n {
            for j in 0..=i {
                p.set_symmetric(i, j, self.get(i, j) as f64 / total);
            }
        }
        p
    }
}

/// Counts pairs column by column, indexing the result by `symbol_order`
/// (duplicates are ignored).
///
/// Fails if a block holds a symbol missing from `symbol_order`.
pub fn count_pairs(blocks: &[Block], symbol_order: &[char]) -> Result<PairCounts, BlosumError> {
    let index: IndexSet<char> = symbol_order.iter().copied().collect();
    let n = index.len();
    let mut counts = vec![0u64; n * n];
    let mut total_pairs = 0;

    for block in blocks {
        for pos in 0..block.width() {
            let mut column: IndexMap<usize, u64> = IndexMap::new();
            for symbol in block.column(pos) {
                let i = index
                    .get_index_of(&symbol)
                    .ok_or(BlosumError::UnknownSymbol(symbol))?;
                *column.entry(i).or_insert(0) += 1;
            }
            total_pairs += column_pairs(block.height());

            for (&i, &c) in &column {
                counts[i * n + i] += column_pairs(c as usize);
            }
            for ((&i, &ci), (&j, &cj)) in column.iter().tuple_combinations() {
                counts[i * n + j] += ci * cj;
                counts[j * n + i] += ci * cj;
            }
        }
    }

    tracing::debug!(symbols = n, total_pairs, "pair counts");

    Ok(PairCounts {
        symbols: index.into_iter().collect(),
        counts,
        total_pairs,
    })
}

/// Co-occurrence frequencies `pairs(i, j) / total pairs`.
pub fn compute_p_values(blocks: &[Block], symbol_order: &[char]) -> Result<SymbolMatrix, BlosumError> {
    Ok(count_pairs(blocks, symbol_order)?.to_probabilities())
}
