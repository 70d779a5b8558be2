//! Core type definitions used throughout the codebase

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Player identifier as advertised by the game (the player's service URL)
pub type PlayerId = String;

/// Grid cell coordinate. `y` grows downward, so north is `y - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Orthogonal step distance
    pub fn manhattan(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Offset by (dx, dy), saturating at the `i32` range
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// The four orthogonal neighbours, in search order: north, south, west, east
    pub fn neighbors(&self) -> [Position; 4] {
        [
            self.offset(0, -1),
            self.offset(0, 1),
            self.offset(-1, 0),
            self.offset(1, 0),
        ]
    }
}

/// Compass direction a player is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Column index into the decision tables (N, E, S, W)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One of the four moves a player may make per turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "F")]
    MoveForward,
    #[serde(rename = "L")]
    TurnLeft,
    #[serde(rename = "R")]
    TurnRight,
    #[serde(rename = "T")]
    Throw,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::MoveForward,
        Action::TurnLeft,
        Action::TurnRight,
        Action::Throw,
    ];

    /// Single-character wire code
    pub fn code(self) -> &'static str {
        match self {
            Action::MoveForward => "F",
            Action::TurnLeft => "L",
            Action::TurnRight => "R",
            Action::Throw => "T",
        }
    }

    /// Uniformly random action
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Action::ALL[rng.gen_range(0..Action::ALL.len())]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
