use crate::cmd_bioalg::utils;
use bioalg::libs::blosum::{BlosumTables, HALF_BIT_LAMBDA};
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("matrix")
        .about("Log-odds substitution matrix")
        .after_help(
            r###"
Computes score[i][j] = (1/lambda) * ln(p[i][j] / (q[i] * q[j])).

Notes:
* Symbols are ordered as in `bioalg blosum qvalues`
* Pairs never observed together score 0
* The default lambda is ln(2)/2, giving scores in half bits like the
  published BLOSUM tables
* --round rounds every score to the nearest integer
* --json writes every stage: q values, pair counts, p values and scores

Examples:
1. Half-bit scores:
   bioalg blosum matrix tests/blosum/sample.txt

2. Natural-log scores, rounded:
   bioalg blosum matrix tests/blosum/sample.txt --lambda 1 --round

"###,
        )
        .arg(super::infile_arg())
        .arg(
            Arg::new("lambda")
                .long("lambda")
                .short('l')
                .value_parser(value_parser!(f64))
                .num_args(1)
                .help("Scale factor, must be positive [default: ln(2)/2]"),
        )
        .arg(
            Arg::new("round")
                .long("round")
                .action(ArgAction::SetTrue)
                .help("Round scores to integers"),
        )
        .arg(utils::json_arg())
        .arg(utils::outfile_arg())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let lambda = args
        .get_one::<f64>("lambda")
        .copied()
        .unwrap_or(HALF_BIT_LAMBDA);
    if lambda.is_nan() || lambda <= 0.0 {
        anyhow::bail!("lambda must be positive, got {}", lambda);
    }

    let blocks = super::load_blocks(args.get_one::<String>("infile").unwrap())?;
    let mut writer = bioalg::writer(args.get_one::<String>("outfile").unwrap())?;

    //----------------------------
    // Ops
    //----------------------------
    let mut tables = BlosumTables::from_blocks(&blocks, lambda)?;
    if args.get_flag("round") {
        tables.scores = tables.scores.rounded();
    }

    //----------------------------
    // Output
    //----------------------------
    if args.get_flag("json") {
        writer.write_fmt(format_args!("{}\n", serde_json::to_string_pretty(&tables)?))?;
    } else if args.get_flag("round") {
        writer.write_all(utils::format_matrix(&tables.scores, |v| format!("{}", v as i64)).as_bytes())?;
    } else {
        writer.write_all(utils::format_matrix(&tables.scores, |v| format!("{:.4}", v)).as_bytes())?;
    }

    Ok(())
}
