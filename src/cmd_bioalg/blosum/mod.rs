use bioalg::libs::blosum::{parse_blocks_from_text, Block};
use clap::*;

pub mod blocks;
pub mod matrix;
pub mod pvalues;
pub mod qvalues;
pub mod sample;

pub fn make_subcommand() -> Command {
    Command::new("blosum")
        .about("Derive BLOSUM-style substitution matrices from blocks")
        .after_help(
            r###"Subcommand groups:

* input: blocks / sample
* stages: qvalues / pvalues / matrix

Block files hold one sequence per whitespace-separated token; blank lines
separate blocks. Every row of a block must have the same length.

"###,
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(blocks::make_subcommand())
        .subcommand(sample::make_subcommand())
        .subcommand(qvalues::make_subcommand())
        .subcommand(pvalues::make_subcommand())
        .subcommand(matrix::make_subcommand())
}

pub fn execute(matches: &ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("blocks", sub_matches)) => blocks::execute(sub_matches),
        Some(("sample", sub_matches)) => sample::execute(sub_matches),
        Some(("qvalues", sub_matches)) => qvalues::execute(sub_matches),
        Some(("pvalues", sub_matches)) => pvalues::execute(sub_matches),
        Some(("matrix", sub_matches)) => matrix::execute(sub_matches),
        _ => unreachable!(),
    }
}

pub fn infile_arg() -> Arg {
    Arg::new("infile")
        .required(true)
        .index(1)
        .help("Input block file. [stdin] for standard input")
}

pub fn load_blocks(infile: &str) -> anyhow::Result<Vec<Block>> {
    let text = bioalg::read_text(infile)?;
    let blocks = parse_blocks_from_text(&text)?;
    tracing::info!(infile, blocks = blocks.len(), "loaded blocks");

    Ok(blocks)
}
