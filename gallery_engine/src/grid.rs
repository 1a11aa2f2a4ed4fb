//! Grid vocabulary: positions, facing directions, and cell edges.
//!
//! The grid is 1-based with y growing downward, so `Up` travels toward
//! negative y. Facings double as artwork wall faces: a piece whose
//! `wall_face` is `Down` hangs on the top edge of its cell and looks back
//! down the room at the visitor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    /// Grid delta for one step along this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Facing::Up => (0, -1),
            Facing::Down => (0, 1),
            Facing::Left => (-1, 0),
            Facing::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Facing {
        match self {
            Facing::Up => Facing::Down,
            Facing::Down => Facing::Up,
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// 90-degree turn counter-clockwise: up, left, down, right, up.
    pub fn rotated_left(self) -> Facing {
        match self {
            Facing::Up => Facing::Left,
            Facing::Left => Facing::Down,
            Facing::Down => Facing::Right,
            Facing::Right => Facing::Up,
        }
    }

    /// 90-degree turn clockwise; exact inverse of [`Facing::rotated_left`].
    pub fn rotated_right(self) -> Facing {
        match self {
            Facing::Up => Facing::Right,
            Facing::Right => Facing::Down,
            Facing::Down => Facing::Left,
            Facing::Left => Facing::Up,
        }
    }

    /// Edge of a cell crossed when leaving it along this direction.
    pub fn exit_edge(self) -> Edge {
        match self {
            Facing::Up => Edge::Top,
            Facing::Down => Edge::Bottom,
            Facing::Left => Edge::Left,
            Facing::Right => Edge::Right,
        }
    }

    /// Edge of the target cell crossed when entering it along this direction.
    /// Travelling up enters the target through its bottom edge.
    pub fn entry_edge(self) -> Edge {
        self.opposite().exit_edge()
    }

    pub fn label(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Facing {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.to_ascii_lowercase().as_str() {
            "up" => Ok(Facing::Up),
            "down" => Ok(Facing::Down),
            "left" => Ok(Facing::Left),
            "right" => Ok(Facing::Right),
            other => Err(format!("unknown facing '{other}' (expected up/down/left/right)")),
        }
    }
}

/// One side of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Direction a piece mounted on this edge faces into the room: art on the
    /// top edge of a cell faces down, and so on.
    pub fn inward_facing(self) -> Facing {
        match self {
            Edge::Top => Facing::Down,
            Edge::Bottom => Facing::Up,
            Edge::Left => Facing::Right,
            Edge::Right => Facing::Left,
        }
    }
}

/// A 1-based grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step along `facing`.
    pub fn offset(self, facing: Facing) -> Position {
        let (dx, dy) = facing.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
