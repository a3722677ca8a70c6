use crate::cmd_bioalg::utils;
use bioalg::libs::blosum::{blocks_to_text, sample_blocks};
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("sample")
        .about("Print the built-in example blocks")
        .after_help(
            r###"
Three small blocks over the alphabet ABCD, ready to feed the other
subcommands.

Examples:
1. Sample Q values:
   bioalg blosum sample | bioalg blosum qvalues stdin

"###,
        )
        .arg(utils::outfile_arg())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = bioalg::writer(args.get_one::<String>("outfile").unwrap())?;
    writer.write_fmt(format_args!("{}\n", blocks_to_text(&sample_blocks())))?;

    Ok(())
}
