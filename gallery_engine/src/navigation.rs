//! Movement and collision resolution.
//!
//! Both the current cell and the target cell get a say: a move is rejected
//! when the current cell has a wall border on its exit edge, or the target
//! cell has one on the entry edge. The `is_wall` flag never blocks by
//! itself; the border flags are authoritative. Blocked moves are silent
//! no-ops, never errors.

use serde::Serialize;

use crate::grid::{Facing, Position};
use crate::layout::GalleryLayout;

/// Which way a move action travels relative to the user's facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

/// The visitor's navigation state. An immutable value: `step` and `rotate`
/// return the next state instead of mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct User {
    pub position: Position,
    pub facing: Facing,
}

impl User {
    pub fn new(position: Position, facing: Facing) -> Self {
        Self { position, facing }
    }
}

/// Whether a one-cell move from `from` along `travel` is legal.
pub fn can_enter(layout: &GalleryLayout, from: Position, travel: Facing) -> bool {
    let target = from.offset(travel);
    if !layout.contains(target) {
        return false;
    }
    if layout.wall_on_edge(from, travel.exit_edge()) {
        return false;
    }
    if layout.wall_on_edge(target, travel.entry_edge()) {
        return false;
    }
    true
}

/// One move step. Forward travels along the facing, backward against it
/// without turning. A blocked move returns the user unchanged.
pub fn step(user: User, layout: &GalleryLayout, direction: MoveDirection) -> User {
    let travel = match direction {
        MoveDirection::Forward => user.facing,
        MoveDirection::Backward => user.facing.opposite(),
    };

    if can_enter(layout, user.position, travel) {
        User {
            position: user.position.offset(travel),
            ..user
        }
    } else {
        log::debug!(
            "move blocked at {} travelling {}",
            user.position,
            travel
        );
        user
    }
}

/// Turn in place. Rotations never consult the layout and always succeed.
pub fn rotate(user: User, rotation: Rotation) -> User {
    let facing = match rotation {
        Rotation::Left => user.facing.rotated_left(),
        Rotation::Right => user.facing.rotated_right(),
    };
    User { facing, ..user }
}
