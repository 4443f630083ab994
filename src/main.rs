//! CLI entry point for the tile assembly tool

use clap::Parser;
use jigsawtile::io::cli::{Cli, FileProcessor};
use jigsawtile::io::logging::init_logging;

#[allow(clippy::print_stdout)]
fn main() -> jigsawtile::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let mut processor = FileProcessor::new(cli);
    for report in processor.process()? {
        println!("{report}");
    }
    Ok(())
}
