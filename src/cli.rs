use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfrotate")]
#[command(about = "Rotate pages of a PDF by a multiple of 90 degrees into a new file")]
#[command(version)]
pub struct Cli {
    /// PDF file to rotate (left untouched)
    #[arg(long, default_value = "")]
    pub path: String,

    /// Rotation in degrees, a multiple of 90 (e.g. 90, 180, -90)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub degree: String,

    /// Comma-separated 1-based page numbers (e.g. "1,3,5"); empty rotates every page
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub pages: String,

    /// Output file (defaults to <name>_rotateDDD.<ext> next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a JSON report instead of a summary line
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
