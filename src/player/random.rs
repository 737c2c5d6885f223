use alloc::string::String;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::{BitGrid, Board, Coord, FleetSpec, GameError, PlacementPolicy, Ship};

use super::{build_board, Player};

/// Baseline player that fires at uniformly random cells it has not tried yet.
pub struct RandomPlayer {
    name: String,
    policy: PlacementPolicy,
    state: Option<(Board, BitGrid)>,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            name: "Random".into(),
            policy: PlacementPolicy::default(),
            state: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn setup(
        &mut self,
        rng: &mut SmallRng,
        height: usize,
        width: usize,
        spec: &FleetSpec,
    ) -> Result<Vec<Ship>, GameError> {
        self.state = None;
        let board = build_board(rng, height, width, spec, &self.policy)?;
        let fleet = board.ships().to_vec();
        self.state = Some((board, BitGrid::new(height, width)));
        Ok(fleet)
    }

    fn take_shots(&mut self, rng: &mut SmallRng) -> Result<Vec<Coord>, GameError> {
        let (board, taken) = self.state.as_mut().ok_or(GameError::NotSetUp)?;
        let quota = board.standing_count().min(taken.count_zeros());
        let mut shots = Vec::with_capacity(quota);
        while shots.len() < quota {
            let c = Coord::new(
                rng.random_range(0..taken.width()),
                rng.random_range(0..taken.height()),
            );
            if !taken.get(c)? {
                taken.set(c)?;
                shots.push(c);
            }
        }
        Ok(shots)
    }

    fn report_damage(&mut self, opponent_shots: &[Coord]) -> Result<Vec<Coord>, GameError> {
        let (board, _) = self.state.as_mut().ok_or(GameError::NotSetUp)?;
        board.report_damage(opponent_shots)
    }

    fn board(&self) -> Option<&Board> {
        self.state.as_ref().map(|(board, _)| board)
    }
}
