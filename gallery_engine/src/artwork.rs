//! Artwork placement instances: the join of layout cells with manifest
//! metadata, derived once at load time.

use gallery_formats::{ArtworkManifest, CellRecord, EdgeFlags};
use serde::Serialize;

use crate::grid::{Edge, Facing, Position};

/// One physical placement of an artwork on a wall edge. Several instances may
/// share an `id` when a piece spans multiple cells; each is independently
/// resolvable through its `instance_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkInstance {
    pub id: String,
    pub instance_id: String,
    pub x: i32,
    pub y: i32,
    /// Direction the piece faces into the room, opposite its mounting edge.
    pub wall_face: Facing,
    pub name: String,
    pub image_url: String,
    pub actual_width: u32,
    pub actual_height: u32,
    pub description: String,
    pub medium: String,
    pub exhibition: String,
    pub dimensions_original: String,
}

impl ArtworkInstance {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Join layout placements with manifest metadata. Placements with no manifest
/// entry or no mounting edge are skipped with a diagnostic rather than
/// aborting the whole load.
pub fn join_instances(cells: &[CellRecord], manifest: &ArtworkManifest) -> Vec<ArtworkInstance> {
    let mut instances = Vec::new();

    for cell in cells {
        let Some(id) = cell.artwork_id.as_deref() else {
            continue;
        };
        let Some(meta) = manifest.get(id) else {
            log::warn!(
                "no manifest entry for artwork {id} placed at ({}, {})",
                cell.x,
                cell.y
            );
            continue;
        };
        let Some(edge) = mounting_edge(&cell.artwork_borders) else {
            log::warn!(
                "artwork {id} at ({}, {}) has no mounting edge; skipping placement",
                cell.x,
                cell.y
            );
            continue;
        };

        instances.push(ArtworkInstance {
            id: id.to_string(),
            instance_id: format!("{id}-{}-{}", cell.x, cell.y),
            x: cell.x,
            y: cell.y,
            wall_face: edge.inward_facing(),
            name: meta.name.clone(),
            image_url: meta.image_url.clone(),
            actual_width: meta.actual_width,
            actual_height: meta.actual_height,
            description: meta.description.clone(),
            medium: meta.medium.clone(),
            exhibition: meta.exhibition.clone(),
            dimensions_original: meta.dimensions_original.clone(),
        });
    }

    instances
}

/// The single mounting edge of a placement. Layouts should set at most one
/// flag; the top/bottom/left/right precedence matches the upstream data.
fn mounting_edge(flags: &EdgeFlags) -> Option<Edge> {
    if flags.top {
        Some(Edge::Top)
    } else if flags.bottom {
        Some(Edge::Bottom)
    } else if flags.left {
        Some(Edge::Left)
    } else if flags.right {
        Some(Edge::Right)
    } else {
        None
    }
}
