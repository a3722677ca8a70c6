use crate::cmd_bioalg::utils;
use bioalg::libs::blosum::compute_q_values;
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("qvalues")
        .about("Background frequency of every symbol")
        .after_help(
            r###"
Counts every symbol over all cells of all blocks.

Output columns: symbol, count, fraction (count/total), q value (4 decimals).
Rows are sorted by descending q value; ties keep the order of first
appearance in the input.

Examples:
1. Q values of a block file:
   bioalg blosum qvalues tests/blosum/sample.txt

"###,
        )
        .arg(super::infile_arg())
        .arg(utils::json_arg())
        .arg(utils::outfile_arg())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let blocks = super::load_blocks(args.get_one::<String>("infile").unwrap())?;
    let mut writer = bioalg::writer(args.get_one::<String>("outfile").unwrap())?;

    let q_values = compute_q_values(&blocks);

    if args.get_flag("json") {
        writer.write_fmt(format_args!("{}\n", serde_json::to_string_pretty(&q_values)?))?;
        return Ok(());
    }

    writer.write_all(b"symbol\tcount\tfraction\tqvalue\n")?;
    for q in &q_values {
        writer.write_fmt(format_args!(
            "{}\t{}\t{}\t{:.4}\n",
            q.symbol,
            q.count,
            q.fraction(),
            q.q_value
        ))?;
    }

    Ok(())
}
