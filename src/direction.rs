//! Direction and diagonal enumerations for a hexagonal coordinate system.
//!
//! Assumes that the major orientation is horizontal: each hex has neighbors
//! to its left and right, and four more up-left/up-right/down-left/down-right.

use crate::coordinate::Hex;
use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

/// Direction in a hexagonal coordinate system.
///
/// The six displacing variants map onto the unit vectors of the grid;
/// [`Direction::Zero`] is the null displacement, used as the "no answer"
/// result of [`Hex::direction_to`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, FromStr, Serialize, Deserialize,
)]
#[display(style = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Right,
    LeftUp,
    LeftDown,
    Left,
    RightDown,
    RightUp,
    Zero,
}

impl Direction {
    /// The six displacing directions, in declaration order. `Zero` is not a
    /// displacement and is excluded.
    pub const ALL: [Direction; 6] = [
        Direction::Right,
        Direction::LeftUp,
        Direction::LeftDown,
        Direction::Left,
        Direction::RightDown,
        Direction::RightUp,
    ];

    /// Iterate through the six displacing `Direction`s in declaration order.
    pub fn iter() -> impl Iterator<Item = Direction> {
        Self::ALL.iter().copied()
    }

    /// The unit hex vector for this direction.
    pub fn offset(self) -> Hex {
        match self {
            Direction::Right => Hex::RIGHT,
            Direction::LeftUp => Hex::LEFT_UP,
            Direction::LeftDown => Hex::LEFT_DOWN,
            Direction::Left => Hex::LEFT,
            Direction::RightDown => Hex::RIGHT_DOWN,
            Direction::RightUp => Hex::RIGHT_UP,
            Direction::Zero => Hex::ZERO,
        }
    }
}

/// Diagonal direction in a hexagonal coordinate system.
///
/// Diagonal neighbors are the six hexes two steps away which touch a hex only
/// at a vertex. Each variant maps to a fixed two-step offset vector.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, FromStr, Serialize, Deserialize,
)]
#[display(style = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Diagonal {
    DownRight,
    Up,
    DownLeft,
    UpLeft,
    Down,
    UpRight,
}

impl Diagonal {
    /// All six diagonals, in declaration order.
    pub const ALL: [Diagonal; 6] = [
        Diagonal::DownRight,
        Diagonal::Up,
        Diagonal::DownLeft,
        Diagonal::UpLeft,
        Diagonal::Down,
        Diagonal::UpRight,
    ];

    /// Iterate through all `Diagonal`s in declaration order.
    pub fn iter() -> impl Iterator<Item = Diagonal> {
        Self::ALL.iter().copied()
    }

    /// The two-step offset vector for this diagonal.
    pub fn offset(self) -> Hex {
        match self {
            Diagonal::DownRight => Hex::new(2, -1),
            Diagonal::Up => Hex::new(-1, 2),
            Diagonal::DownLeft => Hex::new(-1, -1),
            Diagonal::UpLeft => Hex::new(-2, 1),
            Diagonal::Down => Hex::new(1, -2),
            Diagonal::UpRight => Hex::new(1, 1),
        }
    }
}
