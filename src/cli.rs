//! CLI argument parsing with clap.

use clap::Parser;

/// Generates blank transparent placeholder images for card-face assets.
///
/// Flags override config-file values, which override the built-in defaults
/// (80×120 pixels, `assets/cards`, the three face ranks and four suits).
#[derive(Parser, Debug)]
#[command(name = "cardgen", version, about)]
pub struct Cli {
    /// Output directory for the generated files.
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Placeholder width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Placeholder height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
