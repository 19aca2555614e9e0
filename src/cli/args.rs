use clap::Parser;
use std::path::PathBuf;

use stickerfit::{Color, DEFAULT_OUTPUT_DIR, DEFAULT_SOFT_MARGIN, DEFAULT_TOLERANCE};

#[derive(Parser, Debug)]
#[command(
    name = "stickerfit",
    version,
    about = "Batch convert images to 370x320 PNG stickers with transparency"
)]
pub struct CliArgs {
    /// Input image file or folder (searched recursively)
    pub input: PathBuf,

    /// Output folder (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Remove a solid background with soft edges
    #[arg(long, default_value_t = false)]
    pub make_transparent: bool,

    /// Background color to remove (hex, e.g. #FFFFFF or #fff). Auto-detected from corners if omitted
    #[arg(long, value_name = "HEX")]
    pub bg_color: Option<Color>,

    /// Color tolerance for background removal (0-64)
    #[arg(long, default_value_t = DEFAULT_TOLERANCE, value_parser = clap::value_parser!(u8).range(0..=64))]
    pub tolerance: u8,

    /// Width of the distance band above the tolerance where edges fade in (0 = hard cut)
    #[arg(long, default_value_t = DEFAULT_SOFT_MARGIN)]
    pub soft_margin: u8,

    /// Write a JSON batch report to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
