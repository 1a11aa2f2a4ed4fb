//! Artwork metadata manifest: display details keyed by artwork id.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub type ArtworkManifest = BTreeMap<String, ArtworkRecord>;

/// Display metadata for one artwork. Placement lives in the layout file; a
/// single manifest entry may back several placements of the same piece.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkRecord {
    pub name: String,
    pub image_url: String,
    /// Pixel dimensions of the scanned image.
    #[serde(default)]
    pub actual_width: u32,
    #[serde(default)]
    pub actual_height: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub exhibition: String,
    /// Physical dimensions as catalogued, e.g. "24x36".
    #[serde(default)]
    pub dimensions_original: String,
}

pub fn parse_manifest(text: &str) -> Result<ArtworkManifest> {
    serde_json::from_str(text).context("parsing artwork manifest JSON")
}

pub fn load_manifest(path: &Path) -> Result<ArtworkManifest> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading artwork manifest {}", path.display()))?;
    parse_manifest(&text)
}
