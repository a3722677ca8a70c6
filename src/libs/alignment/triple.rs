use super::error::AlignmentError;
use super::lattice::{back, backtrace, best_of, fill_axis, fill_plane, Axis, Direction, Lattice};
use super::scoring::ScoringScheme;
use serde::Serialize;

/// Gap penalties charged for a single-axis move inside the cube: the two
/// sequences left behind each receive a gap.
pub const INTERIOR_AXIS_GAPS: f64 = 2.0;

/// Gap penalties charged for a single-axis move on a coordinate plane, and
/// for a plane move inside the cube.
pub const PLANE_GAPS: f64 = 1.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TripleDirection {
    #[default]
    None,
    X,
    Y,
    Z,
    Xy,
    Xz,
    Yz,
    Xyz,
}

impl Direction for TripleDirection {
    fn advances(self) -> &'static [bool] {
        match self {
            TripleDirection::None => &[false, false, false],
            TripleDirection::X => &[true, false, false],
            TripleDirection::Y => &[false, true, false],
            TripleDirection::Z => &[false, false, true],
            TripleDirection::Xy => &[true, true, false],
            TripleDirection::Xz => &[true, false, true],
            TripleDirection::Yz => &[false, true, true],
            TripleDirection::Xyz => &[true, true, true],
        }
    }
}

/// A filled `[z, y, x]` lattice with its optimal path stamped.
#[derive(Debug, Clone, PartialEq)]
pub struct TripleAlignment {
    pub lattice: Lattice<TripleDirection, 3>,
    pub aligned_x: String,
    pub aligned_y: String,
    pub aligned_z: String,
}

impl TripleAlignment {
    pub fn score(&self) -> f64 {
        self.lattice.terminal().score
    }
}

/// Global alignment of three sequences over a `[z, y, x]` lattice.
///
/// The cube is filled in four stages:
///
/// 1. the three axes, one `gap` per step;
/// 2. the three coordinate planes, each a pairwise alignment of its two
///    sequences;
/// 3. the interior, choosing among seven moves evaluated in the order
///    x, y, z, xy, xz, yz, xyz (earlier wins ties):
///    * single axis: two gaps,
///    * plane: pair score of the advancing sequences plus one gap,
///    * xyz: sum of the three pair scores;
/// 4. backtrace from the far corner to the origin.
///
/// ```
/// use bioalg::libs::alignment::{align_triple, ScoringScheme};
/// let aln = align_triple("AATTCCGG", "AATTCCGG", "ATC", &ScoringScheme::default()).unwrap();
/// assert_eq!(aln.score(), 6.0);
/// assert_eq!(aln.aligned_z, "-AT-C---");
/// ```
pub fn align_triple(
    x: &str,
    y: &str,
    z: &str,
    scoring: &ScoringScheme,
) -> Result<TripleAlignment, AlignmentError> {
    let x: Vec<char> = x.chars().collect();
    let y: Vec<char> = y.chars().collect();
    let z: Vec<char> = z.chars().collect();
    let mut lattice = Lattice::new([z.len() + 1, y.len() + 1, x.len() + 1])?;

    let ax = Axis {
        seq: &x,
        index: 2,
        direction: TripleDirection::X,
    };
    let ay = Axis {
        seq: &y,
        index: 1,
        direction: TripleDirection::Y,
    };
    let az = Axis {
        seq: &z,
        index: 0,
        direction: TripleDirection::Z,
    };

    // axes
    fill_axis(&mut lattice, &ax, scoring.gap);
    fill_axis(&mut lattice, &ay, scoring.gap);
    fill_axis(&mut lattice, &az, scoring.gap);

    // coordinate planes
    fill_plane(&mut lattice, &ay, &ax, TripleDirection::Xy, scoring);
    fill_plane(&mut lattice, &az, &ax, TripleDirection::Xz, scoring);
    fill_plane(&mut lattice, &az, &ay, TripleDirection::Yz, scoring);

    fill_interior(&mut lattice, &x, &y, &z, scoring);

    let [aligned_x, aligned_y, aligned_z] = backtrace(&mut lattice, [&x, &y, &z]);

    tracing::debug!(
        shape = ?lattice.shape(),
        score = lattice.terminal().score,
        columns = aligned_x.chars().count(),
        "three-way alignment"
    );

    Ok(TripleAlignment {
        lattice,
        aligned_x,
        aligned_y,
        aligned_z,
    })
}

fn fill_interior(
    lattice: &mut Lattice<TripleDirection, 3>,
    x: &[char],
    y: &[char],
    z: &[char],
    scoring: &ScoringScheme,
) {
    let axis_cost = INTERIOR_AXIS_GAPS * scoring.gap;
    let plane_cost = PLANE_GAPS * scoring.gap;

    for k in 1..=z.len() {
        for j in 1..=y.len() {
            for i in 1..=x.len() {
                let here = [k, j, i];
                let (a, b, c) = (x[i - 1], y[j - 1], z[k - 1]);
                let (ab, ac, bc) = (scoring.pair(a, b), scoring.pair(a, c), scoring.pair(b, c));

                let candidates = [
                    (lattice[back(here, 2)].score + axis_cost, TripleDirection::X),
                    (lattice[back(here, 1)].score + axis_cost, TripleDirection::Y),
                    (lattice[back(here, 0)].score + axis_cost, TripleDirection::Z),
                    (lattice[[k, j - 1, i - 1]].score + ab + plane_cost, TripleDirection::Xy),
                    (lattice[[k - 1, j, i - 1]].score + ac + plane_cost, TripleDirection::Xz),
                    (lattice[[k - 1, j - 1, i]].score + bc + plane_cost, TripleDirection::Yz),
                    (lattice[[k - 1, j - 1, i - 1]].score + ab + ac + bc, TripleDirection::Xyz),
                ];
                lattice.set(here, best_of(candidates));
            }
        }
    }
}
