//! A packed rectangular bit grid.
//!
//! Boards in BattleSalvo range from 6x6 to 15x15, which does not fit a single
//! machine word, so the grid is split over a vector of unsigned words `T`.
//! Cells are indexed row-major (`y * width + x`).

use alloc::vec;
use alloc::vec::Vec;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::core::coord::Coord;

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Column or row index is outside the grid.
    OutOfBounds { x: usize, y: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { x, y } => write!(f, "OutOfBounds: x={}, y={}", x, y),
        }
    }
}

/// A `height` x `width` grid of flags stored in words of type `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitGrid<T = u64>
where
    T: PrimInt + Unsigned + Zero,
{
    height: usize,
    width: usize,
    words: Vec<T>,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    const WORD_BITS: usize = mem::size_of::<T>() * 8;

    /// Create an empty grid (all cells cleared).
    pub fn new(height: usize, width: usize) -> Self {
        let cells = height * width;
        let len = cells.div_ceil(Self::WORD_BITS);
        BitGrid {
            height,
            width,
            words: vec![T::zero(); len],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.height * self.width
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Number of cleared cells.
    pub fn count_zeros(&self) -> usize {
        self.cells() - self.count_ones()
    }

    /// Returns true if no cell is set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Gets the flag at `coord`.
    pub fn get(&self, coord: Coord) -> Result<bool, GridError> {
        let (word, bit) = self.locate(coord)?;
        Ok(((self.words[word] >> bit) & T::one()) != T::zero())
    }

    /// Sets the flag at `coord`.
    pub fn set(&mut self, coord: Coord) -> Result<(), GridError> {
        let (word, bit) = self.locate(coord)?;
        self.words[word] = self.words[word] | (T::one() << bit);
        Ok(())
    }

    #[inline]
    fn locate(&self, coord: Coord) -> Result<(usize, usize), GridError> {
        if !coord.in_bounds(self.height, self.width) {
            return Err(GridError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }
        let idx = coord.y * self.width + coord.x;
        Ok((idx / Self::WORD_BITS, idx % Self::WORD_BITS))
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        ((self.words[idx / Self::WORD_BITS] >> (idx % Self::WORD_BITS)) & T::one()) != T::zero()
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid {}x{}:", self.height, self.width)?;
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = if self.bit(y * self.width + x) { '■' } else { '□' };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
