use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gallery_formats::{audit_cells, load_layout, load_manifest};

#[derive(Parser, Debug)]
#[command(about = "Inspect a gallery layout file and report defects", version)]
struct Args {
    /// Layout JSON file to inspect
    #[arg(long, default_value = "data/layout.json")]
    layout: PathBuf,

    /// Artwork manifest JSON; cross-checks placement ids when provided
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Grid side length used for the bounds audit
    #[arg(long, default_value_t = 11)]
    grid_size: i32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let cells = load_layout(&args.layout)?;
    let walls = cells.iter().filter(|cell| cell.wall_borders.any()).count();
    let placements: Vec<_> = cells
        .iter()
        .filter(|cell| cell.artwork_id.is_some())
        .collect();
    println!(
        "{} cell records in {} ({} with wall borders, {} artwork placements)",
        cells.len(),
        args.layout.display(),
        walls,
        placements.len()
    );

    let issues = audit_cells(&cells, args.grid_size);
    for issue in &issues {
        println!("  issue: {issue}");
    }

    if let Some(path) = args.manifest.as_ref() {
        let manifest = load_manifest(path)?;
        println!("{} artworks in {}", manifest.len(), path.display());
        for cell in &placements {
            if let Some(id) = cell.artwork_id.as_deref() {
                if !manifest.contains_key(id) {
                    println!("  missing metadata: {id} placed at ({}, {})", cell.x, cell.y);
                }
            }
        }
    }

    if issues.is_empty() {
        println!("Layout is clean.");
    }
    Ok(())
}
