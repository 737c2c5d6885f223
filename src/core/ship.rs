//! Ship placements on the grid.

use alloc::vec::Vec;
use core::fmt;

use crate::core::config::ShipType;
use crate::core::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A placed ship: its type plus the cells it occupies, ordered from the
/// origin outward.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    ship_type: ShipType,
    cells: Vec<Coord>,
}

impl Ship {
    /// Lay a ship out from `origin` in the given orientation. Bounds are the
    /// caller's concern; placement draws origins that always fit.
    pub fn new(ship_type: ShipType, origin: Coord, orientation: Orientation) -> Self {
        let cells = (0..ship_type.size())
            .map(|i| match orientation {
                Orientation::Horizontal => Coord::new(origin.x + i, origin.y),
                Orientation::Vertical => Coord::new(origin.x, origin.y + i),
            })
            .collect();
        Ship { ship_type, cells }
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Occupied cells, origin first.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// First cell of the ship.
    pub fn origin(&self) -> Coord {
        self.cells[0]
    }

    /// Ships of length one have no meaningful orientation and report horizontal.
    pub fn orientation(&self) -> Orientation {
        match self.cells.as_slice() {
            [a, b, ..] if a.x == b.x => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Returns `true` if any cell of `self` is on or next to a cell of `other`.
    pub fn touches(&self, other: &Ship) -> bool {
        self.cells
            .iter()
            .any(|a| other.cells.iter().any(|b| a == b || a.is_adjacent(b)))
    }

    /// Returns `true` if the two ships share a cell.
    pub fn overlaps(&self, other: &Ship) -> bool {
        self.cells.iter().any(|a| other.cells.contains(a))
    }

    /// Returns `true` if every cell lies inside a `height` x `width` grid.
    pub fn in_bounds(&self, height: usize, width: usize) -> bool {
        self.cells.iter().all(|c| c.in_bounds(height, width))
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?} }}",
            self.ship_type.name(),
            self.origin(),
            self.orientation(),
        )
    }
}
