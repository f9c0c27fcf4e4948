//! Cardgen - blank placeholder card asset generator.

mod adapters;
mod cli;
mod config;
mod error;
mod generator;
mod output;
mod ports;

use std::process;

use clap::Parser;

use crate::adapters::png::PngSink;
use crate::cli::Cli;
use crate::config::Config;
use crate::generator::PlaceholderGenerator;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), error::CardgenError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(error::CardgenError::Config)?;
    let generator_config = config.resolve(cli);

    if cli.verbose {
        eprintln!("Config file: {}", config_path.display());
        eprintln!("Output directory: {}", generator_config.output_dir.display());
        eprintln!(
            "Placeholder size: {}x{}",
            generator_config.width, generator_config.height
        );
    }

    let generator = PlaceholderGenerator::new(generator_config);

    generator.ensure_output_directory()?;
    let written = generator.generate_all(&PngSink)?;

    println!("Done: {written} blank placeholder files generated");
    Ok(())
}
