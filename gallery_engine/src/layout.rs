//! Indexed, immutable form of the floorplan.

use std::collections::BTreeMap;

use gallery_formats::{CellRecord, EdgeFlags};
use thiserror::Error;

use crate::grid::{Edge, Position};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("grid size must be positive (got {0})")]
    InvalidGridSize(i32),
    #[error("duplicate cell record at ({x}, {y})")]
    DuplicateCell { x: i32, y: i32 },
}

/// The floorplan, indexed by coordinate. Built once at load time and never
/// mutated for the rest of the session. Cells absent from the index are open
/// floor with no wall or artwork flags.
#[derive(Debug, Clone)]
pub struct GalleryLayout {
    grid_size: i32,
    cells: BTreeMap<(i32, i32), CellRecord>,
}

impl GalleryLayout {
    /// Index the parsed cell records. Records outside the grid are skipped
    /// with a diagnostic; duplicate coordinates are an authoring error.
    pub fn from_records(
        grid_size: i32,
        records: Vec<CellRecord>,
    ) -> Result<Self, LayoutError> {
        if grid_size < 1 {
            return Err(LayoutError::InvalidGridSize(grid_size));
        }

        let mut cells = BTreeMap::new();
        for record in records {
            let in_range =
                |v: i32| (1..=grid_size).contains(&v);
            if !in_range(record.x) || !in_range(record.y) {
                log::warn!(
                    "skipping cell record ({}, {}) outside the {grid_size}x{grid_size} grid",
                    record.x,
                    record.y
                );
                continue;
            }
            let key = (record.x, record.y);
            if cells.insert(key, record).is_some() {
                return Err(LayoutError::DuplicateCell { x: key.0, y: key.1 });
            }
        }

        Ok(Self { grid_size, cells })
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `pos` lies inside the grid bounds.
    pub fn contains(&self, pos: Position) -> bool {
        (1..=self.grid_size).contains(&pos.x) && (1..=self.grid_size).contains(&pos.y)
    }

    pub fn cell(&self, pos: Position) -> Option<&CellRecord> {
        self.cells.get(&(pos.x, pos.y))
    }

    pub fn cells(&self) -> impl Iterator<Item = &CellRecord> {
        self.cells.values()
    }

    /// True when the cell at `pos` has a wall border on `edge`. Missing cells
    /// have no borders.
    pub fn wall_on_edge(&self, pos: Position, edge: Edge) -> bool {
        self.cell(pos)
            .map(|cell| edge_flag(&cell.wall_borders, edge))
            .unwrap_or(false)
    }

    /// True when the cell at `pos` has an artwork mounted on `edge`.
    pub fn artwork_on_edge(&self, pos: Position, edge: Edge) -> bool {
        self.cell(pos)
            .map(|cell| edge_flag(&cell.artwork_borders, edge))
            .unwrap_or(false)
    }
}

fn edge_flag(flags: &EdgeFlags, edge: Edge) -> bool {
    match edge {
        Edge::Top => flags.top,
        Edge::Bottom => flags.bottom,
        Edge::Left => flags.left,
        Edge::Right => flags.right,
    }
}
