//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - SalvoAi: hunt/target player with diagonal seeding and line follow-up
//! - RandomPlayer: fires at uniformly random untaken cells

use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::core::{
    place_fleet, Board, Coord, FleetSpec, GameError, GameResult, PlacementPolicy, Ship,
};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing its fleet and owning the resulting board
/// - Producing a salvo each turn
/// - Resolving the opponent's salvo against its board
/// - Learning from which of its own shots hit
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    /// Place a fleet on a `height` x `width` board and return the placements.
    /// On error no board is kept.
    fn setup(
        &mut self,
        rng: &mut SmallRng,
        height: usize,
        width: usize,
        spec: &FleetSpec,
    ) -> Result<Vec<Ship>, GameError>;

    /// Shots on the opponent's board for this turn, one per own standing ship.
    fn take_shots(&mut self, rng: &mut SmallRng) -> Result<Vec<Coord>, GameError>;

    /// Resolve the opponent's shots against this player's board and return
    /// the ones that hit.
    fn report_damage(&mut self, opponent_shots: &[Coord]) -> Result<Vec<Coord>, GameError>;

    /// Inform the player which of its last shots hit.
    fn successful_hits(&mut self, _hits: &[Coord]) -> Result<(), GameError> {
        Ok(())
    }

    /// Notify the player that the game is over.
    fn end_game(&mut self, _result: GameResult, _reason: &str) {}

    /// The player's own board, once set up.
    fn board(&self) -> Option<&Board>;
}

/// Place a fleet and build the board it lives on.
pub(crate) fn build_board(
    rng: &mut SmallRng,
    height: usize,
    width: usize,
    spec: &FleetSpec,
    policy: &PlacementPolicy,
) -> Result<Board, GameError> {
    let fleet = place_fleet(rng, height, width, spec, policy)?;
    log::debug!(
        "placed {} ships on {}x{} (adjacency enforced: {})",
        fleet.ships().len(),
        height,
        width,
        fleet.adjacency_enforced()
    );
    Board::new(height, width, fleet.into_ships())
}

// Re-export implementations
pub mod ai;
pub use ai::SalvoAi;

pub mod random;
pub use random::RandomPlayer;
