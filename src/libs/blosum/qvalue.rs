use super::block::Block;
use indexmap::IndexMap;
use serde::Serialize;

/// Background frequency of one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QValue {
    pub symbol: char,
    pub count: usize,
    pub total_cells: usize,
    pub q_value: f64,
}

impl QValue {
    /// `count/total`, as shown next to the decimal value.
    pub fn fraction(&self) -> String {
        format!("{}/{}", self.count, self.total_cells)
    }
}

/// Q values ordered by descending frequency. Symbols with equal counts keep
/// the order in which they first appear in the blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QValues {
    entries: Vec<QValue>,
    total_cells: usize,
}

impl QValues {
    pub fn iter(&self) -> std::slice::Iter<'_, QValue> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_cells(&self) -> usize {
        self.total_cells
    }

    /// Symbols in table order; the natural symbol order for the P and score matrices.
    pub fn symbols(&self) -> Vec<char> {
        self.entries.iter().map(|e| e.symbol).collect()
    }

    pub fn get(&self, symbol: char) -> Option<&QValue> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    /// Frequency of `symbol`, 0 when it never occurs.
    pub fn q(&self, symbol: char) -> f64 {
        self.get(symbol).map_or(0.0, |e| e.q_value)
    }
}

impl<'a> IntoIterator for &'a QValues {
    type Item = &'a QValue;
    type IntoIter = std::slice::Iter<'a, QValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Counts every symbol in every cell of every block.
///
/// ```
/// use bioalg::libs::blosum::{compute_q_values, parse_blocks_from_text};
/// let blocks = parse_blocks_from_text("AAB\nABC").unwrap();
/// let q = compute_q_values(&blocks);
/// assert_eq!(q.symbols(), vec!['A', 'B', 'C']);
/// assert_eq!(q.get('A').unwrap().fraction(), "3/6");
/// ```
pub fn compute_q_values(blocks: &[Block]) -> QValues {
    let mut counts: IndexMap<char, usize> = IndexMap::new();
    for symbol in blocks.iter().flat_map(Block::cells) {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    let total_cells: usize = counts.values().sum();

    let mut entries: Vec<QValue> = counts
        .into_iter()
        .map(|(symbol, count)| QValue {
            symbol,
            count,
            total_cells,
            q_value: count as f64 / total_cells as f64,
        })
        .collect();
    // same denominator everywhere, so ordering by count is ordering by q; sort is stable
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    tracing::debug!(symbols = entries.len(), total_cells, "q values");

    QValues {
        entries,
        total_cells,
    }
}
