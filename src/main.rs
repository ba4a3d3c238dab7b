//! CLI entry point for the tile mosaic evolution tool

use clap::Parser;
use tilevolve::io::cli::{Cli, EvolutionRunner};

fn main() -> tilevolve::Result<()> {
    let cli = Cli::parse();
    let mut runner = EvolutionRunner::new(cli);
    runner.run()
}
