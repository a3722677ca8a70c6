use super::utils;
use bioalg::libs::alignment::align_pair;
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("nw")
        .about("Global alignment of two sequences")
        .after_help(
            r###"
Aligns two sequences end to end with Needleman-Wunsch and linear gap scores.

Notes:
* The first sequence runs across the columns of the DP table, the second down the rows
* Every character is one symbol, so non-ASCII letters align as single symbols
* Scores may be fractional, e.g. --match 0.5 --gap -0.75
* Ties between moves are broken diagonal, then up, then left
* Empty sequences are allowed: pass "" and the other sequence is aligned against gaps
* Output is TSV: the score, then one aligned sequence per line

Examples:
1. Align with the default scores (match 1, mismatch -1, gap -2):
   bioalg nw GTCGACGCA GATTACA

2. Also print the DP table, path cells marked with '*':
   bioalg nw GTCGACGCA GATTACA --matrix

3. Custom scores, JSON output:
   bioalg nw HEAGAWGHEE PAWHEAE --match 2 --mismatch -1 --gap -1 --json

"###,
        )
        .arg(
            Arg::new("seq_x")
                .required(true)
                .index(1)
                .help("First sequence (columns)"),
        )
        .arg(
            Arg::new("seq_y")
                .required(true)
                .index(2)
                .help("Second sequence (rows)"),
        )
        .args(utils::scoring_args())
        .arg(
            Arg::new("matrix")
                .long("matrix")
                .action(ArgAction::SetTrue)
                .help("Also print the DP table"),
        )
        .arg(utils::json_arg())
        .arg(utils::outfile_arg())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let seq_x = args.get_one::<String>("seq_x").unwrap();
    let seq_y = args.get_one::<String>("seq_y").unwrap();
    let scoring = utils::scoring_scheme(args)?;

    let mut writer = bioalg::writer(args.get_one::<String>("outfile").unwrap())?;

    //----------------------------
    // Ops
    //----------------------------
    let aln = align_pair(seq_x, seq_y, &scoring)?;

    //----------------------------
    // Output
    //----------------------------
    if args.get_flag("json") {
        let value = serde_json::json!({
            "scoring": scoring,
            "score": aln.score(),
            "aligned_x": aln.aligned_x,
            "aligned_y": aln.aligned_y,
            "lattice": aln.lattice,
        });
        writer.write_fmt(format_args!("{}\n", serde_json::to_string_pretty(&value)?))?;
        return Ok(());
    }

    writer.write_fmt(format_args!(
        "score\t{}\nx\t{}\ny\t{}\n",
        aln.score(),
        aln.aligned_x,
        aln.aligned_y,
    ))?;

    if args.get_flag("matrix") {
        let xs: Vec<char> = seq_x.chars().collect();
        let ys: Vec<char> = seq_y.chars().collect();
        let grid = utils::format_grid(&ys, &xs, |i, j| aln.lattice[[i, j]]);
        writer.write_fmt(format_args!("\n{}", grid))?;
    }

    Ok(())
}
