//! Randomized fleet placement.
//!
//! Ships are dropped one at a time at uniformly random positions until a
//! candidate neither overlaps nor touches anything already committed. Dense
//! fleets cannot always honour the "no touching" rule, so it is dropped up
//! front when the fleet's footprint is too large for the board. A round that
//! runs out of adjacency budget is abandoned and the whole fleet is placed
//! again; only the last round may finish without the rule. Overlap is always
//! rejected.

use alloc::vec::Vec;
use rand::Rng;

use crate::core::common::GameError;
use crate::core::config::{FleetSpec, PlacementPolicy, ShipType};
use crate::core::coord::Coord;
use crate::core::ship::{Orientation, Ship};

/// A placed fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
    adjacency_enforced: bool,
}

impl Fleet {
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn into_ships(self) -> Vec<Ship> {
        self.ships
    }

    /// `false` if the adjacency rule was dropped at any point during placement.
    pub fn adjacency_enforced(&self) -> bool {
        self.adjacency_enforced
    }
}

/// Per-round placement state.
struct PlacementContext {
    relaxed: bool,
    budget: usize,
    max_attempts: usize,
    /// Last round of the call: an exhausted budget drops the adjacency rule
    /// instead of abandoning the round.
    final_round: bool,
    /// Set once a candidate was accepted without the adjacency check.
    skipped_adjacency: bool,
}

/// The round ran out of adjacency budget before its final round.
struct BudgetExhausted;

impl PlacementContext {
    fn new(
        policy: &PlacementPolicy,
        height: usize,
        width: usize,
        spec: &FleetSpec,
        final_round: bool,
    ) -> Self {
        let area = height * width;
        let occupied = spec.footprint();
        let relaxed = occupied * 100 > policy.density_threshold_percent * area;
        if relaxed {
            log::debug!(
                "fleet footprint {} exceeds {}% of {} cells, adjacency rule off",
                occupied,
                policy.density_threshold_percent,
                area
            );
        }
        Self {
            relaxed,
            budget: policy.adjacency_budget,
            max_attempts: policy.max_attempts_per_ship,
            final_round,
            skipped_adjacency: false,
        }
    }

    fn adjacency_enforced(&self) -> bool {
        !self.relaxed && !self.skipped_adjacency
    }

    /// Returns `Ok(true)` if `candidate` may be committed next to `placed`.
    fn accepts(&mut self, placed: &[Ship], candidate: &Ship) -> Result<bool, BudgetExhausted> {
        if self.relaxed {
            return Ok(!placed.iter().any(|s| s.overlaps(candidate)));
        }
        if self.budget == 0 {
            if !self.final_round {
                return Err(BudgetExhausted);
            }
            if !self.skipped_adjacency {
                log::debug!("adjacency budget exhausted on the final round, adjacency rule off");
                self.skipped_adjacency = true;
            }
            return Ok(!placed.iter().any(|s| s.overlaps(candidate)));
        }
        self.budget -= 1;
        Ok(!placed.iter().any(|s| s.touches(candidate)))
    }
}

/// Place every ship requested by `spec` on a `height` x `width` board.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    height: usize,
    width: usize,
    spec: &FleetSpec,
    policy: &PlacementPolicy,
) -> Result<Fleet, GameError> {
    spec.validate(height, width)?;
    if let Some((ship, _)) = spec.iter().find(|&(_, n)| n > 0) {
        if spec.total_cells() > height * width {
            return Err(GameError::PlacementInfeasible { ship, attempts: 0 });
        }
    }

    let mut round = 0;
    loop {
        let final_round = round == policy.max_restarts;
        match place_round(rng, height, width, spec, policy, final_round) {
            Ok(fleet) => return Ok(fleet),
            Err(e) if round < policy.max_restarts => {
                log::debug!("placement round {} failed: {}", round, e);
                round += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// One attempt at the whole fleet with a fresh context and budget.
fn place_round<R: Rng + ?Sized>(
    rng: &mut R,
    height: usize,
    width: usize,
    spec: &FleetSpec,
    policy: &PlacementPolicy,
    final_round: bool,
) -> Result<Fleet, GameError> {
    let mut ctx = PlacementContext::new(policy, height, width, spec, final_round);
    let mut ships: Vec<Ship> = Vec::with_capacity(spec.total_ships());
    for (ship_type, count) in spec.iter() {
        for _ in 0..count {
            let ship = place_one(rng, &mut ctx, &ships, height, width, ship_type)?;
            ships.push(ship);
        }
    }

    Ok(Fleet {
        ships,
        adjacency_enforced: ctx.adjacency_enforced(),
    })
}

fn place_one<R: Rng + ?Sized>(
    rng: &mut R,
    ctx: &mut PlacementContext,
    placed: &[Ship],
    height: usize,
    width: usize,
    ship_type: ShipType,
) -> Result<Ship, GameError> {
    for attempt in 0..ctx.max_attempts {
        let candidate = random_ship(rng, height, width, ship_type);
        match ctx.accepts(placed, &candidate) {
            Ok(true) => return Ok(candidate),
            Ok(false) => {}
            Err(BudgetExhausted) => {
                return Err(GameError::PlacementInfeasible {
                    ship: ship_type,
                    attempts: attempt,
                })
            }
        }
    }
    Err(GameError::PlacementInfeasible {
        ship: ship_type,
        attempts: ctx.max_attempts,
    })
}

/// Draw a uniformly random placement that fits inside the grid.
fn random_ship<R: Rng + ?Sized>(
    rng: &mut R,
    height: usize,
    width: usize,
    ship_type: ShipType,
) -> Ship {
    let size = ship_type.size();
    if rng.random() {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..=height - size);
        Ship::new(ship_type, Coord::new(x, y), Orientation::Vertical)
    } else {
        let x = rng.random_range(0..=width - size);
        let y = rng.random_range(0..height);
        Ship::new(ship_type, Coord::new(x, y), Orientation::Horizontal)
    }
}
