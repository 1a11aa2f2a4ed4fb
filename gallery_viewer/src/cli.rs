use std::path::PathBuf;

use clap::Parser;
use gallery_engine::Facing;

#[derive(Parser, Debug)]
#[command(about = "Terminal walkthrough of the grid gallery", version)]
pub struct Args {
    /// Layout JSON describing walls and artwork placements
    #[arg(long, default_value = "data/layout.json")]
    pub layout: PathBuf,

    /// Artwork metadata manifest JSON
    #[arg(long, default_value = "data/manifest.json")]
    pub manifest: PathBuf,

    /// Grid side length
    #[arg(long, default_value_t = 11)]
    pub grid_size: i32,

    /// Starting column, 1-based
    #[arg(long, default_value_t = 10)]
    pub start_x: i32,

    /// Starting row, 1-based
    #[arg(long, default_value_t = 11)]
    pub start_y: i32,

    /// Initial facing (up/down/left/right)
    #[arg(long, default_value = "up")]
    pub facing: Facing,

    /// Replay a script of actions instead of reading stdin. Accepts action
    /// words (moveForward, left, ...) or compact letters ("fflr"), separated
    /// by spaces or commas
    #[arg(long)]
    pub script: Option<String>,

    /// Write the per-step state trace as JSON (with --script)
    #[arg(long)]
    pub trace_json: Option<PathBuf>,

    /// Print the starting map and info lines, then exit without reading input
    #[arg(long)]
    pub headless: bool,
}
