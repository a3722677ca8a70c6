//! Dense dynamic-programming lattices.
//!
//! A lattice of `N` dimensions is one contiguous buffer of cells addressed by
//! stride. Coordinates are ordered from the slowest axis to the fastest, so a
//! pairwise lattice is indexed `[row, col]` = `[y, x]` and a three-way lattice
//! `[z, y, x]`. Sequence `s` (x = 0, y = 1, z = 2) therefore lives on axis
//! `N - 1 - s`.

use super::error::AlignmentError;
use super::scoring::ScoringScheme;
use super::GAP;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::ops::Index;

/// The move that produced a cell, decoded only during backtrace.
pub trait Direction: Copy + Default + PartialEq + Serialize {
    /// Which sequences this move consumes, in sequence order (x, y, z).
    /// The origin tag consumes nothing.
    fn advances(self) -> &'static [bool];
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Cell<D> {
    pub score: f64,
    pub direction: D,
    pub in_alignment: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lattice<D, const N: usize> {
    shape: [usize; N],
    strides: [usize; N],
    cells: Vec<Cell<D>>,
}

impl<D: Direction, const N: usize> Lattice<D, N> {
    /// Allocates a lattice with the given extent on every axis.
    /// All cells start as `{0, none}`.
    ///
    /// Fails when the cell count, or the bytes needed to hold it, overflow.
    pub fn new(shape: [usize; N]) -> Result<Self, AlignmentError> {
        let too_large = || AlignmentError::TooLarge {
            shape: shape.to_vec(),
        };

        let size = shape
            .iter()
            .try_fold(1usize, |acc, &s| acc.checked_mul(s))
            .ok_or_else(too_large)?;
        let bytes = size
            .checked_mul(std::mem::size_of::<Cell<D>>())
            .ok_or_else(too_large)?;
        if bytes > isize::MAX as usize {
            return Err(too_large());
        }

        let mut strides = [1; N];
        for axis in (0..N.saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * shape[axis + 1];
        }

        Ok(Self {
            shape,
            strides,
            cells: vec![Cell::default(); size],
        })
    }

    pub fn shape(&self) -> [usize; N] {
        self.shape
    }

    /// The cell holding the score of the whole alignment.
    pub fn terminal(&self) -> &Cell<D> {
        &self[self.shape.map(|s| s.saturating_sub(1))]
    }

    /// Iterates over `(coordinate, cell)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = ([usize; N], &Cell<D>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(offset, cell)| (self.coord_of(offset), cell))
    }

    /// Coordinates of the cells stamped by the backtrace, in storage order.
    pub fn path(&self) -> Vec<[usize; N]> {
        self.iter()
            .filter(|(_, cell)| cell.in_alignment)
            .map(|(coord, _)| coord)
            .collect()
    }

    fn offset(&self, coord: [usize; N]) -> usize {
        coord
            .iter()
            .zip(self.strides.iter())
            .map(|(c, s)| c * s)
            .sum()
    }

    fn coord_of(&self, mut offset: usize) -> [usize; N] {
        let mut coord = [0; N];
        for axis in 0..N {
            coord[axis] = offset / self.strides[axis];
            offset %= self.strides[axis];
        }
        coord
    }

    pub(crate) fn set(&mut self, coord: [usize; N], (score, direction): (f64, D)) {
        let offset = self.offset(coord);
        self.cells[offset].score = score;
        self.cells[offset].direction = direction;
    }

    fn mark(&mut self, coord: [usize; N]) {
        let offset = self.offset(coord);
        self.cells[offset].in_alignment = true;
    }
}

impl<D: Direction, const N: usize> Index<[usize; N]> for Lattice<D, N> {
    type Output = Cell<D>;

    fn index(&self, coord: [usize; N]) -> &Self::Output {
        &self.cells[self.offset(coord)]
    }
}

impl<D: Direction, const N: usize> Serialize for Lattice<D, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Lattice", 2)?;
        state.serialize_field("shape", &self.shape[..])?;
        state.serialize_field("cells", &self.cells)?;
        state.end()
    }
}

/// Picks the highest scoring candidate. On ties the earliest candidate wins,
/// so the order of the array is the tie-break order.
#[inline]
pub fn best_of<D: Copy, const K: usize>(candidates: [(f64, D); K]) -> (f64, D) {
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.0 > best.0 {
            best = *candidate;
        }
    }
    best
}

/// One sequence laid along a lattice axis.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Axis<'a, D> {
    pub seq: &'a [char],
    pub index: usize,
    /// Tag of a move along this axis alone.
    pub direction: D,
}

#[inline]
pub(crate) fn back<const N: usize>(mut coord: [usize; N], axis: usize) -> [usize; N] {
    coord[axis] -= 1;
    coord
}

/// Gap accumulation along one axis, every other coordinate held at zero.
pub(crate) fn fill_axis<D: Direction, const N: usize>(
    lattice: &mut Lattice<D, N>,
    axis: &Axis<D>,
    gap: f64,
) {
    for k in 1..=axis.seq.len() {
        let mut here = [0; N];
        here[axis.index] = k;
        let score = lattice[back(here, axis.index)].score + gap;
        lattice.set(here, (score, axis.direction));
    }
}

/// Fills the interior of the plane spanned by `rows` and `cols`, every other
/// coordinate held at zero. Both border lines must already be filled.
///
/// Candidates are evaluated diagonal, up (rows), left (cols).
pub(crate) fn fill_plane<D: Direction, const N: usize>(
    lattice: &mut Lattice<D, N>,
    rows: &Axis<D>,
    cols: &Axis<D>,
    diagonal: D,
    scoring: &ScoringScheme,
) {
    for i in 1..=rows.seq.len() {
        for j in 1..=cols.seq.len() {
            let mut here = [0; N];
            here[rows.index] = i;
            here[cols.index] = j;

            let up = back(here, rows.index);
            let left = back(here, cols.index);
            let diag = back(up, cols.index);

            let candidates = [
                (
                    lattice[diag].score + scoring.pair(rows.seq[i - 1], cols.seq[j - 1]),
                    diagonal,
                ),
                (lattice[up].score + scoring.gap, rows.direction),
                (lattice[left].score + scoring.gap, cols.direction),
            ];
            lattice.set(here, best_of(candidates));
        }
    }
}

/// Follows stored directions from the terminal cell back to the origin,
/// stamping every visited cell, and returns the gapped sequences in sequence
/// order.
pub(crate) fn backtrace<D: Direction, const N: usize>(
    lattice: &mut Lattice<D, N>,
    seqs: [&[char]; N],
) -> [String; N] {
    let mut aligned: [Vec<char>; N] = std::array::from_fn(|_| Vec::new());
    let mut here = lattice.shape.map(|s| s.saturating_sub(1));

    while here.iter().any(|&c| c != 0) {
        lattice.mark(here);

        let direction = lattice[here].direction;
        if direction == D::default() {
            break;
        }

        for (s, &advance) in direction.advances().iter().enumerate() {
            let axis = N - 1 - s;
            if advance {
                aligned[s].push(seqs[s][here[axis] - 1]);
                here[axis] -= 1;
            } else {
                aligned[s].push(GAP);
            }
        }
    }
    lattice.mark(here);

    aligned.map(|seq| seq.into_iter().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
    enum Step {
        #[default]
        None,
        A,
        B,
    }

    impl Direction for Step {
        fn advances(self) -> &'static [bool] {
            match self {
                Step::None => &[false],
                Step::A | Step::B => &[true],
            }
        }
    }

    #[test]
    fn test_lattice_strides() {
        let mut lattice: Lattice<Step, 3> = Lattice::new([2, 3, 4]).unwrap();
        assert_eq!(lattice.cells.len(), 24);

        lattice.set([1, 2, 3], (7.0, Step::A));
        assert_eq!(lattice[[1, 2, 3]].score, 7.0);
        assert_eq!(lattice.cells[23].score, 7.0);

        lattice.set([0, 1, 0], (5.0, Step::B));
        assert_eq!(lattice.cells[4].score, 5.0);

        let coords: Vec<_> = lattice.iter().map(|(c, _)| c).collect();
        assert_eq!(coords[4], [0, 1, 0]);
        assert_eq!(coords[23], [1, 2, 3]);
    }

    #[test]
    fn test_lattice_too_large() {
        // the cell count itself overflows
        let err = Lattice::<Step, 3>::new([1 << 30, 1 << 30, 1 << 30]).unwrap_err();
        assert_eq!(
            err,
            AlignmentError::TooLarge {
                shape: vec![1 << 30, 1 << 30, 1 << 30]
            }
        );

        // the count fits but its bytes do not
        assert!(Lattice::<Step, 2>::new([1 << 31, 1 << 31]).is_err());
        assert!(Lattice::<Step, 1>::new([usize::MAX]).is_err());
    }

    #[test]
    fn test_best_of_first_wins_ties() {
        assert_eq!(best_of([(1.0, Step::A), (1.0, Step::B)]), (1.0, Step::A));
        assert_eq!(best_of([(0.0, Step::A), (1.0, Step::B)]), (1.0, Step::B));
        assert_eq!(
            best_of([(2.0, Step::A), (1.0, Step::B), (2.0, Step::None)]),
            (2.0, Step::A)
        );
        assert_eq!(best_of([(-0.5, Step::A), (-0.25, Step::B)]), (-0.25, Step::B));
    }

    #[test]
    fn test_fill_axis_and_backtrace() {
        let seq = ['A', 'C', 'G'];
        let mut lattice: Lattice<Step, 1> = Lattice::new([seq.len() + 1]).unwrap();
        let axis = Axis {
            seq: &seq,
            index: 0,
            direction: Step::A,
        };
        fill_axis(&mut lattice, &axis, -2.5);
        assert_eq!(lattice.terminal().score, -7.5);

        let [aligned] = backtrace(&mut lattice, [&seq]);
        assert_eq!(aligned, "ACG");
        assert_eq!(lattice.path().len(), 4);
    }
}
