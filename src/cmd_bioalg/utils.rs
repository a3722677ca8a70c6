use bioalg::libs::alignment::{Cell, ScoringScheme, GAP};
use bioalg::libs::blosum::SymbolMatrix;
use clap::*;

pub fn scoring_args() -> [Arg; 3] {
    [
        Arg::new("match")
            .long("match")
            .short('m')
            .value_parser(value_parser!(f64))
            .default_value("1")
            .allow_negative_numbers(true)
            .help("Score for matching symbols, may be fractional"),
        Arg::new("mismatch")
            .long("mismatch")
            .short('n')
            .value_parser(value_parser!(f64))
            .default_value("-1")
            .allow_negative_numbers(true)
            .help("Score for mismatching symbols"),
        Arg::new("gap")
            .long("gap")
            .short('g')
            .value_parser(value_parser!(f64))
            .default_value("-2")
            .allow_negative_numbers(true)
            .help("Score for a symbol aligned against a gap"),
    ]
}

pub fn scoring_scheme(args: &ArgMatches) -> anyhow::Result<ScoringScheme> {
    let scoring = ScoringScheme::new(
        *args.get_one::<f64>("match").unwrap(),
        *args.get_one::<f64>("mismatch").unwrap(),
        *args.get_one::<f64>("gap").unwrap(),
    );
    if ![scoring.match_score, scoring.mismatch_score, scoring.gap]
        .iter()
        .all(|v| v.is_finite())
    {
        anyhow::bail!("scores must be finite numbers");
    }

    Ok(scoring)
}

pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Write the full result as JSON")
}

pub fn outfile_arg() -> Arg {
    Arg::new("outfile")
        .long("outfile")
        .short('o')
        .num_args(1)
        .default_value("stdout")
        .help("Output filename. [stdout] for screen")
}

/// A lattice plane as a TSV table, `rows` down the side and `cols` across the
/// top, each headed by `-` for the empty prefix. Cells on the optimal path
/// carry a `*`.
pub fn format_grid<D>(
    rows: &[char],
    cols: &[char],
    cell: impl Fn(usize, usize) -> Cell<D>,
) -> String {
    let label = |seq: &[char], i: usize| if i == 0 { GAP } else { seq[i - 1] };

    let mut out = String::new();
    for j in 0..=cols.len() {
        out += &format!("\t{}", label(cols, j));
    }
    out += "\n";

    for i in 0..=rows.len() {
        out.push(label(rows, i));
        for j in 0..=cols.len() {
            let c = cell(i, j);
            out += &format!("\t{}{}", c.score, if c.in_alignment { "*" } else { "" });
        }
        out += "\n";
    }

    out
}

/// A symbol matrix as a TSV table with symbols heading rows and columns.
pub fn format_matrix(matrix: &SymbolMatrix, value: impl Fn(f64) -> String) -> String {
    let mut out = String::new();
    for symbol in matrix.symbols() {
        out += &format!("\t{}", symbol);
    }
    out += "\n";

    for (symbol, row) in matrix.rows() {
        out.push(symbol);
        for &v in row {
            out += &format!("\t{}", value(v));
        }
        out += "\n";
    }

    out
}
