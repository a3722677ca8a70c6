use super::qvalue::QValues;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Scores in half-bit units, the scale of the published BLOSUM tables.
pub const HALF_BIT_LAMBDA: f64 = std::f64::consts::LN_2 / 2.0;

/// Dense square matrix of reals indexed by symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolMatrix {
    symbols: Vec<char>,
    values: Vec<f64>,
}

impl SymbolMatrix {
    pub fn zeros(symbols: Vec<char>) -> Self {
        let n = symbols.len();
        Self {
            symbols,
            values: vec![0.0; n * n],
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size() + j]
    }

    /// Each row with its symbol, in symbol order.
    pub fn rows(&self) -> impl Iterator<Item = (char, &[f64])> + '_ {
        self.symbols
            .iter()
            .copied()
            .zip(self.values.chunks(self.size().max(1)))
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Every entry rounded to the nearest integer.
    pub fn rounded(&self) -> Self {
        Self {
            symbols: self.symbols.clone(),
            values: self.values.iter().map(|v| v.round()).collect(),
        }
    }

    pub(crate) fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        let n = self.size();
        self.values[i * n + j] = value;
        self.values[j * n + i] = value;
    }
}

impl Serialize for SymbolMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<&[f64]> = self.rows().map(|(_, row)| row).collect();

        let mut state = serializer.serialize_struct("SymbolMatrix", 2)?;
        state.serialize_field("symbols", &self.symbols)?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}

/// Log-odds scores `(1/lambda) * ln(p[i][j] / (q[i] * q[j]))`, indexed by the
/// symbols of `p_values`.
///
/// A cell is 0 when either q value or the p value is not positive, and every
/// cell is 0 when `lambda` is not positive.
pub fn compute_score_matrix(q_values: &QValues, p_values: &SymbolMatrix, lambda: f64) -> SymbolMatrix {
    let q: Vec<f64> = p_values.symbols().iter().map(|&s| q_values.q(s)).collect();
    let mut scores = SymbolMatrix::zeros(p_values.symbols().to_vec());

    if lambda.is_nan() || lambda <= 0.0 {
        tracing::warn!(lambda, "lambda is not positive, every score is 0");
        return scores;
    }

    for i in 0..q.len() {
        for j in 0..=i {
            let p = p_values.get(i, j);
            if q[i] > 0.0 && q[j] > 0.0 && p > 0.0 {
                scores.set_symmetric(i, j, (1.0 / lambda) * (p / (q[i] * q[j])).ln());
            }
        }
    }

    scores
}
