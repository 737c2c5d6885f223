#![cfg(feature = "std")]

//! Serializable envelopes exchanged with the outside world.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, GameResult};
use crate::game::MatchOutcome;

/// A list of cells: a salvo, a damage report or a set of confirmed hits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub coordinates: Vec<Coord>,
}

impl From<Vec<Coord>> for Coordinates {
    fn from(coordinates: Vec<Coord>) -> Self {
        Self { coordinates }
    }
}

impl From<Coordinates> for Vec<Coord> {
    fn from(c: Coordinates) -> Self {
        c.coordinates
    }
}

/// One side of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub name: String,
    pub result: GameResult,
    pub shots: usize,
    pub hits: usize,
}

/// Machine-readable summary of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub height: usize,
    pub width: usize,
    pub rounds: usize,
    pub players: [PlayerReport; 2],
    pub winner: Option<String>,
    pub reason: String,
}

impl MatchReport {
    pub fn new(height: usize, width: usize, names: [&str; 2], outcome: &MatchOutcome) -> Self {
        let results = [outcome.result, outcome.result.opposite()];
        let players = [0, 1].map(|i| PlayerReport {
            name: names[i].to_string(),
            result: results[i],
            shots: outcome.shots[i],
            hits: outcome.hits[i],
        });
        Self {
            height,
            width,
            rounds: outcome.rounds,
            winner: outcome.winner().map(|i| names[i].to_string()),
            players,
            reason: outcome.reason.clone(),
        }
    }
}
