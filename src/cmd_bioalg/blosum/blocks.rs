use crate::cmd_bioalg::utils;
use bioalg::libs::blosum::blocks_to_text;
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("blocks")
        .about("Validate and normalize block files")
        .after_help(
            r###"
Reads blocks, rejects ragged ones and writes them back one row per line,
blocks separated by a blank line.

Examples:
1. Normalize a block file:
   bioalg blosum blocks tests/blosum/oneline.txt

2. Print the shape of every block:
   bioalg blosum blocks tests/blosum/sample.txt --stat

"###,
        )
        .arg(super::infile_arg())
        .arg(
            Arg::new("stat")
                .long("stat")
                .action(ArgAction::SetTrue)
                .help("Print rows and columns of each block instead"),
        )
        .arg(utils::json_arg())
        .arg(utils::outfile_arg())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let blocks = super::load_blocks(args.get_one::<String>("infile").unwrap())?;
    let mut writer = bioalg::writer(args.get_one::<String>("outfile").unwrap())?;

    if args.get_flag("json") {
        writer.write_fmt(format_args!("{}\n", serde_json::to_string_pretty(&blocks)?))?;
    } else if args.get_flag("stat") {
        writer.write_all(b"block\trows\tcolumns\n")?;
        for (i, block) in blocks.iter().enumerate() {
            writer.write_fmt(format_args!(
                "{}\t{}\t{}\n",
                i + 1,
                block.height(),
                block.width()
            ))?;
        }
    } else if !blocks.is_empty() {
        writer.write_fmt(format_args!("{}\n", blocks_to_text(&blocks)))?;
    }

    Ok(())
}
