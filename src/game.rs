//! Match controller: runs two players against each other.
//!
//! Both players fire their salvos in the same round. Each salvo is resolved
//! against the opponent's board and the hits are reported back to the
//! shooter. The match ends after the first round in which a fleet is gone;
//! if both fleets go down in the same round it is a draw.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::{FleetSpec, GameError, GameResult};
use crate::player::Player;

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Result from the first player's point of view.
    pub result: GameResult,
    pub reason: String,
    pub rounds: usize,
    /// Shots fired by each player.
    pub shots: [usize; 2],
    /// Shots of each player that hit.
    pub hits: [usize; 2],
}

impl MatchOutcome {
    /// Index of the winning player, `None` on a draw.
    pub fn winner(&self) -> Option<usize> {
        match self.result {
            GameResult::Win => Some(0),
            GameResult::Lose => Some(1),
            GameResult::Draw => None,
        }
    }
}

/// Two players and their random sources.
pub struct Match {
    players: [Box<dyn Player>; 2],
    rngs: [SmallRng; 2],
}

impl Match {
    /// Seed both players from one number so a match can be replayed.
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>, seed: u64) -> Self {
        Self::with_rngs(
            first,
            second,
            SmallRng::seed_from_u64(seed),
            SmallRng::seed_from_u64(seed.wrapping_add(1)),
        )
    }

    pub fn with_rngs(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        first_rng: SmallRng,
        second_rng: SmallRng,
    ) -> Self {
        Self {
            players: [first, second],
            rngs: [first_rng, second_rng],
        }
    }

    pub fn players(&self) -> &[Box<dyn Player>; 2] {
        &self.players
    }

    /// Set both players up and play until a fleet is sunk.
    pub fn run(
        &mut self,
        height: usize,
        width: usize,
        spec: &FleetSpec,
    ) -> Result<MatchOutcome, GameError> {
        let [a, b] = &mut self.players;
        let [rng_a, rng_b] = &mut self.rngs;

        a.setup(rng_a, height, width, spec)?;
        b.setup(rng_b, height, width, spec)?;
        log::info!(
            "{} vs {} on {}x{} with {} ships each",
            a.name(),
            b.name(),
            height,
            width,
            spec.total_ships()
        );

        let mut rounds = 0;
        let mut shots = [0usize; 2];
        let mut hits = [0usize; 2];
        let (result, reason) = loop {
            rounds += 1;
            let salvo_a = a.take_shots(rng_a)?;
            let salvo_b = b.take_shots(rng_b)?;
            if salvo_a.is_empty() && salvo_b.is_empty() {
                break (GameResult::Draw, String::from("No shots left to fire"));
            }

            let hits_on_b = b.report_damage(&salvo_a)?;
            let hits_on_a = a.report_damage(&salvo_b)?;
            a.successful_hits(&hits_on_b)?;
            b.successful_hits(&hits_on_a)?;

            shots[0] += salvo_a.len();
            shots[1] += salvo_b.len();
            hits[0] += hits_on_b.len();
            hits[1] += hits_on_a.len();
            log::debug!(
                "round {}: {} hit {}/{}, {} hit {}/{}",
                rounds,
                a.name(),
                hits_on_b.len(),
                salvo_a.len(),
                b.name(),
                hits_on_a.len(),
                salvo_b.len()
            );

            let a_sunk = a.board().ok_or(GameError::NotSetUp)?.all_sunk();
            let b_sunk = b.board().ok_or(GameError::NotSetUp)?.all_sunk();
            match (a_sunk, b_sunk) {
                (true, true) => {
                    break (GameResult::Draw, String::from("Both fleets were sunk in the same round"))
                }
                (false, true) => {
                    break (GameResult::Win, format!("{} sank every ship of {}", a.name(), b.name()))
                }
                (true, false) => {
                    break (GameResult::Lose, format!("{} sank every ship of {}", b.name(), a.name()))
                }
                (false, false) => {}
            }
        };

        log::info!("match over after {} rounds: {}", rounds, reason);
        a.end_game(result, &reason);
        b.end_game(result.opposite(), &reason);
        Ok(MatchOutcome {
            result,
            reason,
            rounds,
            shots,
            hits,
        })
    }
}
