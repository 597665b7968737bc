//! CLI entry point for connected cave and maze map generation

use clap::Parser;
use mapcarve::io::cli::{Cli, MapGenerator, init_tracing};

fn main() -> mapcarve::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut generator = MapGenerator::new(cli);
    generator.process()?;
    Ok(())
}
