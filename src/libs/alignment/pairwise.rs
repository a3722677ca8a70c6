use super::error::AlignmentError;
use super::lattice::{backtrace, fill_axis, fill_plane, Axis, Direction, Lattice};
use super::scoring::ScoringScheme;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PairDirection {
    #[default]
    None,
    Diagonal,
    Up,
    Left,
}

impl Direction for PairDirection {
    fn advances(self) -> &'static [bool] {
        // (x, y); up consumes y, left consumes x
        match self {
            PairDirection::None => &[false, false],
            PairDirection::Diagonal => &[true, true],
            PairDirection::Up => &[false, true],
            PairDirection::Left => &[true, false],
        }
    }
}

/// A filled `[row, col]` = `[y, x]` lattice with its optimal path stamped.
#[derive(Debug, Clone, PartialEq)]
pub struct PairAlignment {
    pub lattice: Lattice<PairDirection, 2>,
    pub aligned_x: String,
    pub aligned_y: String,
}

impl PairAlignment {
    pub fn score(&self) -> f64 {
        self.lattice.terminal().score
    }
}

/// Needleman-Wunsch global alignment of `x` (columns) against `y` (rows)
/// with linear gap costs.
///
/// Every `char` is one symbol. Ties are broken diagonal, up, left. Empty
/// sequences are fine and give an all-gap alignment.
///
/// ```
/// use bioalg::libs::alignment::{align_pair, ScoringScheme};
/// let aln = align_pair("GTCGACGCA", "GATTACA", &ScoringScheme::default()).unwrap();
/// assert_eq!(aln.score(), -3.0);
/// assert_eq!(aln.aligned_y, "GATTA--CA");
/// ```
pub fn align_pair(
    x: &str,
    y: &str,
    scoring: &ScoringScheme,
) -> Result<PairAlignment, AlignmentError> {
    let x: Vec<char> = x.chars().collect();
    let y: Vec<char> = y.chars().collect();
    let mut lattice = Lattice::new([y.len() + 1, x.len() + 1])?;

    let rows = Axis {
        seq: &y,
        index: 0,
        direction: PairDirection::Up,
    };
    let cols = Axis {
        seq: &x,
        index: 1,
        direction: PairDirection::Left,
    };

    fill_axis(&mut lattice, &cols, scoring.gap);
    fill_axis(&mut lattice, &rows, scoring.gap);
    fill_plane(&mut lattice, &rows, &cols, PairDirection::Diagonal, scoring);

    let [aligned_x, aligned_y] = backtrace(&mut lattice, [&x, &y]);

    tracing::debug!(
        rows = y.len() + 1,
        cols = x.len() + 1,
        score = lattice.terminal().score,
        columns = aligned_x.chars().count(),
        "pairwise alignment"
    );

    Ok(PairAlignment {
        lattice,
        aligned_x,
        aligned_y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::alignment::ungapped;

    fn align(x: &str, y: &str, s: &ScoringScheme) -> PairAlignment {
        align_pair(x, y, s).unwrap()
    }

    #[test]
    fn test_pair_reference() {
        let aln = align("GTCGACGCA", "GATTACA", &ScoringScheme::default());
        assert_eq!(aln.score(), -3.0);
        assert_eq!(aln.aligned_x, "GTCGACGCA");
        assert_eq!(aln.aligned_y, "GATTA--CA");
    }

    #[test]
    fn test_pair_borders() {
        let aln = align("ACG", "AC", &ScoringScheme::default());
        let lattice = &aln.lattice;
        assert_eq!(lattice.shape(), [3, 4]);

        assert_eq!(lattice[[0, 0]].score, 0.0);
        assert_eq!(lattice[[0, 0]].direction, PairDirection::None);
        for j in 1..4 {
            assert_eq!(lattice[[0, j]].score, -2.0 * j as f64);
            assert_eq!(lattice[[0, j]].direction, PairDirection::Left);
        }
        for i in 1..3 {
            assert_eq!(lattice[[i, 0]].score, -2.0 * i as f64);
            assert_eq!(lattice[[i, 0]].direction, PairDirection::Up);
        }
    }

    #[test]
    fn test_pair_degenerate() {
        let s = ScoringScheme::default();

        let aln = align("", "", &s);
        assert_eq!(aln.score(), 0.0);
        assert!(aln.aligned_x.is_empty());
        assert_eq!(aln.lattice.path(), vec![[0, 0]]);

        let aln = align("A", "", &s);
        assert_eq!(aln.score(), -2.0);
        assert_eq!(aln.aligned_x, "A");
        assert_eq!(aln.aligned_y, "-");

        let aln = align("", "AC", &s);
        assert_eq!(aln.score(), -4.0);
        assert_eq!(aln.aligned_x, "--");
        assert_eq!(aln.aligned_y, "AC");
    }

    #[test]
    fn test_pair_tie_break() {
        // diagonal = 0 + mismatch = -1, up/left = -2 + gap = -4
        let aln = align("A", "C", &ScoringScheme::default());
        assert_eq!(aln.lattice[[1, 1]].direction, PairDirection::Diagonal);

        // with mismatch -4 and gap -2 all three moves tie at -4
        let s = ScoringScheme::new(1.0, -4.0, -2.0);
        let aln = align("A", "C", &s);
        assert_eq!(aln.lattice[[1, 1]].score, -4.0);
        assert_eq!(aln.lattice[[1, 1]].direction, PairDirection::Diagonal);

        // up beats left when only those two tie
        let s = ScoringScheme::new(1.0, -9.0, -2.0);
        let aln = align("A", "C", &s);
        assert_eq!(aln.lattice[[1, 1]].direction, PairDirection::Up);
        assert_eq!(aln.aligned_x, "A-");
        assert_eq!(aln.aligned_y, "-C");
    }

    #[test]
    fn test_pair_symmetric_score() {
        let s = ScoringScheme::default();
        let pairs = [
            ("GTCGACGCA", "GATTACA"),
            ("AB", "B"),
            ("", "ACGT"),
            ("AAAA", "AA"),
            ("HEAGAWGHEE", "PAWHEAE"),
        ];
        for (a, b) in pairs {
            assert_eq!(align(a, b, &s).score(), align(b, a, &s).score());
        }
    }

    #[test]
    fn test_pair_ungap_and_path() {
        let s = ScoringScheme::new(2.0, -1.0, -1.0);
        let x = "HEAGAWGHEE";
        let y = "PAWHEAE";
        let aln = align(x, y, &s);

        assert_eq!(aln.score(), 4.0);
        assert_eq!(aln.aligned_x, "HEAGAWGHE-E");
        assert_eq!(aln.aligned_y, "---PAW-HEAE");
        assert_eq!(ungapped(&aln.aligned_x), x);
        assert_eq!(ungapped(&aln.aligned_y), y);

        // one stamped cell per column plus the origin
        let path = aln.lattice.path();
        assert_eq!(path.len(), aln.aligned_x.len() + 1);
        assert!(path.contains(&[0, 0]));
        assert!(path.contains(&[7, 10]));
    }

    #[test]
    fn test_pair_fractional_scores() {
        let s = ScoringScheme::new(0.5, -0.25, -0.75);
        let aln = align("AC", "A", &s);
        assert_eq!(aln.score(), -0.25);
        assert_eq!(aln.aligned_x, "AC");
        assert_eq!(aln.aligned_y, "A-");
        assert_eq!(aln.lattice[[1, 2]].direction, PairDirection::Left);

        let s = ScoringScheme::new(1.5, -0.5, -1.25);
        let aln = align("GATTACA", "GCATGCU", &s);
        assert_eq!(aln.score(), 2.5);
        assert_eq!(aln.aligned_y, "GCATGCU");
    }

    #[test]
    fn test_pair_large_gap() {
        let s = ScoringScheme::new(1.0, -1.0, -1.5e9);
        let aln = align("AA", "", &s);
        assert_eq!(aln.score(), -3.0e9);
        assert_eq!(aln.aligned_y, "--");

        let aln = align("AC", "AG", &s);
        assert_eq!(aln.score(), 0.0);
        assert_eq!(aln.aligned_y, "AG");
    }

    #[test]
    fn test_pair_multibyte_symbols() {
        let s = ScoringScheme::default();

        // one symbol, one gap
        let aln = align("É", "", &s);
        assert_eq!(aln.score(), -2.0);
        assert_eq!(aln.aligned_y, "-");
        assert_eq!(aln.lattice.shape(), [1, 2]);

        // É and Ö share their first UTF-8 byte but are different symbols
        let aln = align("É", "Ö", &s);
        assert_eq!(aln.score(), -1.0);
        assert_eq!(aln.lattice[[1, 1]].direction, PairDirection::Diagonal);

        let aln = align("ÉA", "ÖA", &s);
        assert_eq!(aln.score(), 0.0);
        assert_eq!(aln.aligned_x, "ÉA");
        assert_eq!(aln.aligned_y, "ÖA");
    }
}
