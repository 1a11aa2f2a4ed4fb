//! Cell records for the floorplan layout file.
//!
//! A layout file is a JSON array of sparse cell records: any grid square not
//! listed is open floor with no flags. Field names are camelCase to match the
//! upstream data files served alongside the gallery.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One grid square of the floorplan. Coordinates are 1-based; the valid range
/// is `[1, grid_size]` on both axes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    pub x: i32,
    pub y: i32,
    /// Marks the cell as structurally part of a wall. Passability is decided
    /// by `wall_borders` alone; this flag is presentational.
    #[serde(default)]
    pub is_wall: bool,
    /// Edges of this cell that are impassable wall segments.
    #[serde(default)]
    pub wall_borders: EdgeFlags,
    /// Artwork mounted on one edge of this cell, if any.
    #[serde(default)]
    pub artwork_id: Option<String>,
    /// The mounting edge of the artwork. At most one flag may be set; the
    /// piece faces the direction opposite its mounting edge.
    #[serde(default)]
    pub artwork_borders: EdgeFlags,
}

/// Per-edge boolean flags on a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeFlags {
    #[serde(default)]
    pub top: bool,
    #[serde(default)]
    pub bottom: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
}

impl EdgeFlags {
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    pub fn count(&self) -> usize {
        [self.top, self.bottom, self.left, self.right]
            .into_iter()
            .filter(|flag| *flag)
            .count()
    }
}

pub fn parse_layout(text: &str) -> Result<Vec<CellRecord>> {
    serde_json::from_str(text).context("parsing layout JSON")
}

pub fn load_layout(path: &Path) -> Result<Vec<CellRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading layout file {}", path.display()))?;
    parse_layout(&text)
}

/// A defect found in a layout file. Findings are advisory: loaders skip the
/// offending record and keep the rest of the file.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutIssue {
    pub x: i32,
    pub y: i32,
    pub detail: String,
}

impl fmt::Display for LayoutIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell ({}, {}): {}", self.x, self.y, self.detail)
    }
}

/// Audit cell records against the grid bounds and the one-artwork-edge rule.
pub fn audit_cells(cells: &[CellRecord], grid_size: i32) -> Vec<LayoutIssue> {
    let mut issues = Vec::new();
    let mut seen: Vec<(i32, i32)> = Vec::with_capacity(cells.len());

    for cell in cells {
        let coords = (cell.x, cell.y);
        if seen.contains(&coords) {
            issues.push(issue(cell, "duplicate record for this coordinate"));
        } else {
            seen.push(coords);
        }

        let in_range = |v: i32| (1..=grid_size).contains(&v);
        if !in_range(cell.x) || !in_range(cell.y) {
            issues.push(issue(
                cell,
                format!("coordinates outside the {grid_size}x{grid_size} grid"),
            ));
        }

        if cell.artwork_borders.count() > 1 {
            issues.push(issue(cell, "more than one artwork mounting edge"));
        }
        if cell.artwork_id.is_some() && !cell.artwork_borders.any() {
            issues.push(issue(cell, "artwork id without a mounting edge"));
        }
        if cell.artwork_id.is_none() && cell.artwork_borders.any() {
            issues.push(issue(cell, "artwork mounting edge without an artwork id"));
        }
    }

    issues
}

fn issue(cell: &CellRecord, detail: impl Into<String>) -> LayoutIssue {
    LayoutIssue {
        x: cell.x,
        y: cell.y,
        detail: detail.into(),
    }
}
