use std::fs;

use anyhow::{Context, Result};
use gallery_formats::{audit_cells, load_layout, load_manifest};
use tempfile::tempdir;

#[test]
fn loads_layout_and_manifest_from_disk() -> Result<()> {
    let dir = tempdir().context("creating temp dir for layout fixtures")?;

    let layout_path = dir.path().join("layout.json");
    fs::write(
        &layout_path,
        r#"[
            { "x": 1, "y": 1, "isWall": true, "wallBorders": { "top": true, "left": true } },
            { "x": 2, "y": 1, "isWall": true, "wallBorders": { "top": true },
              "artworkId": "MERIDIANS_I", "artworkBorders": { "top": true } }
        ]"#,
    )?;

    let manifest_path = dir.path().join("manifest.json");
    fs::write(
        &manifest_path,
        r#"{
            "MERIDIANS_I": {
                "name": "MERIDIANS I",
                "imageUrl": "/images/MERIDIANS_I.jpg",
                "actualWidth": 840,
                "actualHeight": 563
            }
        }"#,
    )?;

    let cells = load_layout(&layout_path)?;
    assert_eq!(cells.len(), 2);
    assert!(audit_cells(&cells, 11).is_empty());

    let manifest = load_manifest(&manifest_path)?;
    let placed = cells
        .iter()
        .filter_map(|cell| cell.artwork_id.as_deref())
        .all(|id| manifest.contains_key(id));
    assert!(placed, "every placement should have manifest metadata");

    Ok(())
}

#[test]
fn missing_layout_file_reports_path() {
    let err = load_layout(std::path::Path::new("does-not-exist/layout.json"))
        .expect_err("missing file should fail");
    assert!(format!("{err:#}").contains("does-not-exist"));
}
