//! Grid positions and bounds arithmetic.

use core::fmt;

/// A cell on the grid: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns `true` if the cell lies inside a `height` x `width` grid.
    pub fn in_bounds(&self, height: usize, width: usize) -> bool {
        self.x < width && self.y < height
    }

    /// Left neighbour, if any.
    pub fn left(&self) -> Option<Coord> {
        self.x.checked_sub(1).map(|x| Coord::new(x, self.y))
    }

    /// Right neighbour inside a grid of `width` columns.
    pub fn right(&self, width: usize) -> Option<Coord> {
        (self.x + 1 < width).then(|| Coord::new(self.x + 1, self.y))
    }

    /// Upper neighbour, if any.
    pub fn up(&self) -> Option<Coord> {
        self.y.checked_sub(1).map(|y| Coord::new(self.x, y))
    }

    /// Lower neighbour inside a grid of `height` rows.
    pub fn down(&self, height: usize) -> Option<Coord> {
        (self.y + 1 < height).then(|| Coord::new(self.x, self.y + 1))
    }

    /// `true` when the two cells touch orthogonally or diagonally. A cell is
    /// not adjacent to itself.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
