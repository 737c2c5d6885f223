//! Common types for BattleSalvo: errors, shot impacts and game results.

use alloc::string::String;
use core::fmt;

use crate::core::bitgrid::GridError;
use crate::core::config::ShipType;
use crate::core::coord::Coord;

/// How a shot landed on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Hit,
    Miss,
}

/// What a single board cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water, never shot at.
    Empty,
    /// Ship segment that has not been hit.
    Ship,
    Hit,
    Miss,
}

/// Final result of a match from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    Win,
    Lose,
    Draw,
}

impl GameResult {
    /// The result the opponent sees.
    pub fn opposite(self) -> Self {
        match self {
            GameResult::Win => GameResult::Lose,
            GameResult::Lose => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Errors returned by setup and turn operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board dimensions or fleet counts cannot describe a legal game.
    InvalidSpecification(String),
    /// The fleet could not be placed within the attempt cap.
    PlacementInfeasible { ship: ShipType, attempts: usize },
    /// A shot or hit report names a cell outside the grid.
    OutOfBoundsShot(Coord),
    /// A turn operation was called before a successful setup.
    NotSetUp,
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds { x, y } => GameError::OutOfBoundsShot(Coord::new(x, y)),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSpecification(reason) => {
                write!(f, "Invalid game specification: {}", reason)
            }
            GameError::PlacementInfeasible { ship, attempts } => write!(
                f,
                "Unable to place {} after {} attempts",
                ship.name(),
                attempts
            ),
            GameError::OutOfBoundsShot(c) => write!(f, "Shot {} is outside the board", c),
            GameError::NotSetUp => write!(f, "Player has not been set up"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
