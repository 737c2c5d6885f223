//! Commonly used types and utilities for ease of import.

pub use crate::core::{Board, Coord, FleetSpec, GameError, GameResult, Ship, ShipType};
pub use crate::game::{Match, MatchOutcome};
pub use crate::player::{Player, RandomPlayer, SalvoAi};
pub use crate::render::{BoardRenderer, NullRenderer};

#[cfg(feature = "std")]
pub use crate::render::ConsoleRenderer;
