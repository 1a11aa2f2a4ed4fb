pub mod layout;
pub mod manifest;

pub use layout::{CellRecord, EdgeFlags, LayoutIssue, audit_cells, load_layout, parse_layout};
pub use manifest::{ArtworkManifest, ArtworkRecord, load_manifest, parse_manifest};
