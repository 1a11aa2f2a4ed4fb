//! Faced-artwork resolution.
//!
//! Only the single cell directly ahead is checked, and only an exact
//! wall-face match counts: the piece must look back toward the visitor.
//! Oblique sightlines along adjacent walls are deliberately unresolved.

use crate::artwork::ArtworkInstance;
use crate::navigation::User;

/// The artwork placement the user is looking at, if any. Returns the first
/// instance occupying the cell ahead whose wall face is the reverse of the
/// user's facing.
pub fn find_faced_artwork<'a>(
    user: &User,
    instances: &'a [ArtworkInstance],
) -> Option<&'a ArtworkInstance> {
    let ahead = user.position.offset(user.facing);
    let expected_face = user.facing.opposite();

    instances
        .iter()
        .find(|inst| inst.x == ahead.x && inst.y == ahead.y && inst.wall_face == expected_face)
}
