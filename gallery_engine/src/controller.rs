//! Action vocabulary and dispatch.
//!
//! The controller is a thin dispatcher: move actions go through the
//! collision resolver, rotations mutate facing directly. Unknown action
//! words from the script/stdin path never reach it; the parser reports them
//! as `None` and the caller warns and drops the input.

use serde::Serialize;

use crate::layout::GalleryLayout;
use crate::navigation::{rotate, step, MoveDirection, Rotation, User};

/// Symbolic input actions delivered by the outer input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NavAction {
    MoveForward,
    MoveBackward,
    RotateLeft,
    RotateRight,
}

impl NavAction {
    /// Parse one action word. Accepts the long camelCase names, bare verbs,
    /// and single-letter shorthand (f/b/l/r), case-insensitively.
    pub fn parse(word: &str) -> Option<NavAction> {
        match word.to_ascii_lowercase().as_str() {
            "moveforward" | "forward" | "f" => Some(NavAction::MoveForward),
            "movebackward" | "backward" | "back" | "b" => Some(NavAction::MoveBackward),
            "rotateleft" | "left" | "l" => Some(NavAction::RotateLeft),
            "rotateright" | "right" | "r" => Some(NavAction::RotateRight),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavAction::MoveForward => "moveForward",
            NavAction::MoveBackward => "moveBackward",
            NavAction::RotateLeft => "rotateLeft",
            NavAction::RotateRight => "rotateRight",
        }
    }
}

/// Resolve one action into the next user state. Blocked moves come back
/// unchanged; rotations always succeed.
pub fn handle_action(action: NavAction, user: User, layout: &GalleryLayout) -> User {
    match action {
        NavAction::MoveForward => step(user, layout, MoveDirection::Forward),
        NavAction::MoveBackward => step(user, layout, MoveDirection::Backward),
        NavAction::RotateLeft => rotate(user, Rotation::Left),
        NavAction::RotateRight => rotate(user, Rotation::Right),
    }
}
