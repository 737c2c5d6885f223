//! Game board state: ship placements, hits, misses and damage resolution.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::format;
use alloc::vec::Vec;
use core::fmt;

use crate::core::bitgrid::BitGrid;
use crate::core::common::{Cell, GameError, Impact};
use crate::core::coord::Coord;
use crate::core::ship::Ship;

/// One player's board for a single game.
pub struct Board {
    height: usize,
    width: usize,
    ships: Vec<Ship>,
    /// Every occupied cell mapped to the index of its ship.
    ship_locations: BTreeMap<Coord, usize>,
    /// Indices of ships with at least one cell not yet hit.
    standing: BTreeSet<usize>,
    hits: BitGrid,
    misses: BitGrid,
}

impl Board {
    /// Build a board from a placed fleet. Rejects ships that leave the grid or
    /// share a cell.
    pub fn new(height: usize, width: usize, fleet: Vec<Ship>) -> Result<Self, GameError> {
        let mut ship_locations = BTreeMap::new();
        for (i, ship) in fleet.iter().enumerate() {
            for &c in ship.cells() {
                if !c.in_bounds(height, width) {
                    return Err(GameError::InvalidSpecification(format!(
                        "{} at {} leaves the {}x{} board",
                        ship.ship_type().name(),
                        c,
                        height,
                        width
                    )));
                }
                if ship_locations.insert(c, i).is_some() {
                    return Err(GameError::InvalidSpecification(format!(
                        "two ships share cell {}",
                        c
                    )));
                }
            }
        }
        Ok(Board {
            height,
            width,
            standing: (0..fleet.len()).collect(),
            ships: fleet,
            ship_locations,
            hits: BitGrid::new(height, width),
            misses: BitGrid::new(height, width),
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// All ships, sunk or not, in fleet order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ship_locations.get(&coord).map(|&i| &self.ships[i])
    }

    /// Ships that still have an unhit cell.
    pub fn standing_ships(&self) -> impl Iterator<Item = &Ship> + '_ {
        self.standing.iter().map(move |&i| &self.ships[i])
    }

    pub fn standing_count(&self) -> usize {
        self.standing.len()
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.standing.is_empty()
    }

    pub fn hits(&self) -> &BitGrid {
        &self.hits
    }

    pub fn misses(&self) -> &BitGrid {
        &self.misses
    }

    /// What the cell at `coord` shows.
    pub fn cell(&self, coord: Coord) -> Result<Cell, GameError> {
        if self.hits.get(coord)? {
            Ok(Cell::Hit)
        } else if self.misses.get(coord)? {
            Ok(Cell::Miss)
        } else if self.ship_locations.contains_key(&coord) {
            Ok(Cell::Ship)
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Mark every cell in `shots` with `impact`. Nothing is marked if any
    /// shot falls outside the grid.
    pub fn set_shots(&mut self, shots: &[Coord], impact: Impact) -> Result<(), GameError> {
        self.check_bounds(shots)?;
        for &c in shots {
            match impact {
                Impact::Hit => {
                    self.hits.set(c)?;
                    self.refresh_standing(c);
                }
                Impact::Miss => self.misses.set(c)?,
            }
        }
        Ok(())
    }

    /// Resolve an incoming salvo. Each shot is a hit iff it lands on a ship
    /// cell; hits are returned in salvo order, each cell at most once.
    pub fn report_damage(&mut self, shots: &[Coord]) -> Result<Vec<Coord>, GameError> {
        self.check_bounds(shots)?;
        let mut seen = BTreeSet::new();
        let mut hits = Vec::new();
        let mut misses = Vec::new();
        for &c in shots {
            if !seen.insert(c) {
                continue;
            }
            if self.ship_locations.contains_key(&c) {
                hits.push(c);
            } else {
                misses.push(c);
            }
        }
        self.set_shots(&hits, Impact::Hit)?;
        self.set_shots(&misses, Impact::Miss)?;
        log::trace!("resolved salvo: {} hits, {} misses", hits.len(), misses.len());
        Ok(hits)
    }

    fn check_bounds(&self, shots: &[Coord]) -> Result<(), GameError> {
        match shots.iter().find(|c| !c.in_bounds(self.height, self.width)) {
            Some(&c) => Err(GameError::OutOfBoundsShot(c)),
            None => Ok(()),
        }
    }

    fn refresh_standing(&mut self, hit: Coord) {
        let Some(&idx) = self.ship_locations.get(&hit) else {
            return;
        };
        if !self.standing.contains(&idx) {
            return;
        }
        let sunk = self.ships[idx]
            .cells()
            .iter()
            .all(|&c| self.hits.get(c).unwrap_or(false));
        if sunk {
            self.standing.remove(&idx);
            log::debug!("{} sunk", self.ships[idx].ship_type().name());
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {}x{},\n  hits: {:?},\n  misses: {:?},\n  standing: {:?},\n  ships: {:?}\n}}",
            self.height, self.width, self.hits, self.misses, self.standing, self.ships
        )
    }
}
