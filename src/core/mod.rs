//! Core BattleSalvo engine (no_std compatible)
//!
//! This module contains the pure game logic: grid model, ship catalog, board
//! and damage resolution, fleet placement and the shot selection engine. It
//! needs only `alloc` and never prints; observability goes through `log`.

pub mod bitgrid;
pub mod board;
pub mod common;
pub mod config;
pub mod coord;
pub mod placement;
pub mod ship;
pub mod targeting;

// Re-export commonly used types
pub use bitgrid::{BitGrid, GridError};
pub use board::Board;
pub use common::{Cell, GameError, GameResult, Impact};
pub use config::*;
pub use coord::Coord;
pub use placement::{place_fleet, Fleet};
pub use ship::{Orientation, Ship};
pub use targeting::{parity_pool, seed_path, Targeting};
