use super::utils;
use bioalg::libs::alignment::{align_triple, GAP};
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("nw3")
        .about("Global alignment of three sequences")
        .after_help(
            r###"
Aligns three sequences end to end over a 3-D DP lattice indexed (z, y, x).

Notes:
* Axes and the three coordinate planes are filled first, each plane being the
  pairwise alignment of its two sequences
* Inside the cube, seven moves compete:
    * x / y / z    - one symbol against two gaps, costs two gap scores
    * xy / xz / yz - pair score of the two symbols plus one gap score
    * xyz          - sum of the three pair scores
* Ties go to the earlier move in the order x, y, z, xy, xz, yz, xyz
* With --matrix the lattice is printed as one y-by-x table per z slice

Examples:
1. Align with the default scores (match 1, mismatch -1, gap -2):
   bioalg nw3 AATTCCGG AATTCCGG ATC

2. Print every z slice of the lattice:
   bioalg nw3 GAT GT AT --matrix

"###,
        )
        .arg(
            Arg::new("seq_x")
                .required(true)
                .index(1)
                .help("First sequence (x axis)"),
        )
        .arg(
            Arg::new("seq_y")
                .required(true)
                .index(2)
                .help("Second sequence (y axis)"),
        )
        .arg(
            Arg::new("seq_z")
                .required(true)
                .index(3)
                .help("Third sequence (z axis)"),
        )
        .args(utils::scoring_args())
        .arg(
            Arg::new("matrix")
                .long("matrix")
                .action(ArgAction::SetTrue)
                .help("Also print the lattice, one z slice at a time"),
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
    let seq_z = args.get_one::<String>("seq_z").unwrap();
    let scoring = utils::scoring_scheme(args)?;

    let mut writer = bioalg::writer(args.get_one::<String>("outfile").unwrap())?;

    //----------------------------
    // Ops
    //----------------------------
    let aln = align_triple(seq_x, seq_y, seq_z, &scoring)?;

    //----------------------------
    // Output
    //----------------------------
    if args.get_flag("json") {
        let value = serde_json::json!({
            "scoring": scoring,
            "score": aln.score(),
            "aligned_x": aln.aligned_x,
            "aligned_y": aln.aligned_y,
            "aligned_z": aln.aligned_z,
            "lattice": aln.lattice,
        });
        writer.write_fmt(format_args!("{}\n", serde_json::to_string_pretty(&value)?))?;
        return Ok(());
    }

    writer.write_fmt(format_args!(
        "score\t{}\nx\t{}\ny\t{}\nz\t{}\n",
        aln.score(),
        aln.aligned_x,
        aln.aligned_y,
        aln.aligned_z,
    ))?;

    if args.get_flag("matrix") {
        let xs: Vec<char> = seq_x.chars().collect();
        let ys: Vec<char> = seq_y.chars().collect();
        let zs: Vec<char> = seq_z.chars().collect();
        for k in 0..=zs.len() {
            let label = if k == 0 { GAP } else { zs[k - 1] };
            let grid = utils::format_grid(&ys, &xs, |j, i| aln.lattice[[k, j, i]]);
            writer.write_fmt(format_args!("\n#z={}\t{}\n{}", k, label, grid))?;
        }
    }

    Ok(())
}
