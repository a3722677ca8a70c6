extern crate clap;
use clap::*;

mod cmd_bioalg;

fn main() -> anyhow::Result<()> {
    let app = Command::new("bioalg")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`bioalg` - Global sequence alignment and substitution matrices")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log progress to stderr"),
        )
        .subcommand(cmd_bioalg::nw::make_subcommand())
        .subcommand(cmd_bioalg::nw3::make_subcommand())
        .subcommand(cmd_bioalg::blosum::make_subcommand())
        .after_help(
            r###"Subcommand groups:

* Alignments:
    * nw     - Needleman-Wunsch alignment of two sequences
    * nw3    - Needleman-Wunsch alignment of three sequences

* Substitution matrices:
    * blosum - Q values, P values and log-odds scores from blocks

"###,
        );

    let matches = app.get_matches();
    init_logging(matches.get_flag("verbose"));

    // Check which subcomamnd the user ran...
    match matches.subcommand() {
        Some(("nw", sub_matches)) => cmd_bioalg::nw::execute(sub_matches),
        Some(("nw3", sub_matches)) => cmd_bioalg::nw3::execute(sub_matches),
        Some(("blosum", sub_matches)) => cmd_bioalg::blosum::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}

/// Logs go to stderr so they never mix with TSV or JSON on stdout
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
