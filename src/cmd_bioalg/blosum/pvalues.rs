use crate::cmd_bioalg::utils;
use bioalg::libs::blosum::{compute_q_values, count_pairs};
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("pvalues")
        .about("Co-occurrence frequency of every symbol pair")
        .after_help(
            r###"
Counts symbol pairs inside every column of every block and divides by the
total number of pairs (n choose 2 per column of n rows).

Notes:
* Symbols are ordered as in `bioalg blosum qvalues`
* A cross pair a/b is counted in both [a][b] and [b][a]
* Without any pair (single-row blocks) every value is 0
* --counts prints the raw pair counts followed by the total

Examples:
1. P values of a block file:
   bioalg blosum pvalues tests/blosum/sample.txt

2. Raw counts:
   bioalg blosum pvalues tests/blosum/sample.txt --counts

"###,
        )
        .arg(super::infile_arg())
        .arg(
            Arg::new("counts")
                .long("counts")
                .action(ArgAction::SetTrue)
                .help("Print pair counts instead of frequencies"),
        )
        .arg(utils::json_arg())
        .arg(utils::outfile_arg())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let blocks = super::load_blocks(args.get_one::<String>("infile").unwrap())?;
    let mut writer = bioalg::writer(args.get_one::<String>("outfile").unwrap())?;

    let q_values = compute_q_values(&blocks);
    let pair_counts = count_pairs(&blocks, &q_values.symbols())?;

    if args.get_flag("counts") {
        if args.get_flag("json") {
            writer.write_fmt(format_args!(
                "{}\n",
                serde_json::to_string_pretty(&pair_counts)?
            ))?;
            return Ok(());
        }

        let symbols = pair_counts.symbols();
        for symbol in symbols {
            writer.write_fmt(format_args!("\t{}", symbol))?;
        }
        writer.write_all(b"\n")?;
        for (i, symbol) in symbols.iter().enumerate() {
            writer.write_fmt(format_args!("{}", symbol))?;
            for j in 0..symbols.len() {
                writer.write_fmt(format_args!("\t{}", pair_counts.get(i, j)))?;
            }
            writer.write_all(b"\n")?;
        }
        writer.write_fmt(format_args!("total\t{}\n", pair_counts.total_pairs()))?;
        return Ok(());
    }

    let p_values = pair_counts.to_probabilities();
    if args.get_flag("json") {
        writer.write_fmt(format_args!("{}\n", serde_json::to_string_pretty(&p_values)?))?;
    } else {
        writer.write_all(utils::format_matrix(&p_values, |v| format!("{:.4}", v)).as_bytes())?;
    }

    Ok(())
}
