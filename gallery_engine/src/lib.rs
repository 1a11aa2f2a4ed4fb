//! Navigation core for the grid-gallery walkthrough.
//!
//! The engine is a small geometric state machine: a discrete position and
//! facing move across an immutable floorplan, collisions are resolved per
//! cell edge, and whichever artwork faces the visitor gets a flat
//! perspective transform (rotation, scale, anchor) derived from the grid
//! relationship. Everything here is synchronous and pure; the owning shell
//! drives one action at a time through [`WalkSession`].

pub mod artwork;
pub mod controller;
pub mod grid;
pub mod layout;
pub mod navigation;
pub mod perspective;
pub mod session;
pub mod sightline;

pub use artwork::{ArtworkInstance, join_instances};
pub use controller::{NavAction, handle_action};
pub use grid::{Edge, Facing, Position};
pub use layout::{GalleryLayout, LayoutError};
pub use navigation::{MoveDirection, Rotation, User, can_enter, rotate, step};
pub use perspective::{Anchor, ViewTransform, compute_transform, map_range};
pub use session::{ViewState, WalkSession};
pub use sightline::find_faced_artwork;
