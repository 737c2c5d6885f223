//! Hunt-and-target shot selection.
//!
//! Shots are drawn from four sources in priority order:
//!
//! 1. follow-ups queued around confirmed hits,
//! 2. the diagonal seed path running from the centre toward the top-left,
//! 3. a random cell from the parity pool (every other cell, checkerboard),
//! 4. a uniformly random untaken cell.
//!
//! A cell is never fired at twice. Candidates that were already taken are
//! dropped from their queue when they reach the front.

use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use rand::Rng;

use crate::core::bitgrid::BitGrid;
use crate::core::common::GameError;
use crate::core::coord::Coord;

/// One player's view of where to shoot next.
#[derive(Debug, Clone)]
pub struct Targeting {
    height: usize,
    width: usize,
    already_taken: BitGrid,
    seed_path: VecDeque<Coord>,
    follow_ups: VecDeque<Coord>,
    confirmed_hits: BTreeSet<Coord>,
    parity_pool: Vec<Coord>,
}

impl Targeting {
    /// Fresh targeting state for an opponent grid of `height` x `width`.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            already_taken: BitGrid::new(height, width),
            seed_path: seed_path(height, width),
            follow_ups: VecDeque::new(),
            confirmed_hits: BTreeSet::new(),
            parity_pool: parity_pool(height, width),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cells not yet fired at.
    pub fn untaken(&self) -> usize {
        self.already_taken.count_zeros()
    }

    pub fn is_taken(&self, coord: Coord) -> Result<bool, GameError> {
        Ok(self.already_taken.get(coord)?)
    }

    /// Pending follow-up targets, front first.
    pub fn follow_ups(&self) -> impl Iterator<Item = &Coord> + '_ {
        self.follow_ups.iter()
    }

    /// Every hit confirmed so far.
    pub fn confirmed_hits(&self) -> &BTreeSet<Coord> {
        &self.confirmed_hits
    }

    /// Pick up to `standing` new cells, never more than remain untaken.
    pub fn next_salvo<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        standing: usize,
    ) -> Result<Vec<Coord>, GameError> {
        let quota = standing.min(self.untaken());
        let mut salvo = Vec::with_capacity(quota);
        while salvo.len() < quota {
            let shot = self.next_shot(rng)?;
            self.already_taken.set(shot)?;
            salvo.push(shot);
        }
        log::trace!(
            "salvo of {}: {} follow-ups, {} seeds, {} parity cells left",
            salvo.len(),
            self.follow_ups.len(),
            self.seed_path.len(),
            self.parity_pool.len()
        );
        Ok(salvo)
    }

    /// Next untaken cell by priority. Callers guarantee one exists.
    fn next_shot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, GameError> {
        while let Some(c) = self.follow_ups.pop_front() {
            if !self.is_taken(c)? {
                return Ok(c);
            }
        }
        while let Some(c) = self.seed_path.pop_front() {
            if !self.is_taken(c)? {
                return Ok(c);
            }
        }
        while !self.parity_pool.is_empty() {
            let idx = rng.random_range(0..self.parity_pool.len());
            let c = self.parity_pool.remove(idx);
            if !self.is_taken(c)? {
                return Ok(c);
            }
        }
        loop {
            let c = Coord::new(
                rng.random_range(0..self.width),
                rng.random_range(0..self.height),
            );
            if !self.is_taken(c)? {
                return Ok(c);
            }
        }
    }

    /// Feed back the shots of the last salvo that hit. Hits that extend a
    /// known hit continue the line; isolated hits queue all four neighbours.
    pub fn record_hits(&mut self, hits: &[Coord]) -> Result<(), GameError> {
        if let Some(&c) = hits.iter().find(|c| !c.in_bounds(self.height, self.width)) {
            return Err(GameError::OutOfBoundsShot(c));
        }
        let (h, w) = (self.height, self.width);
        for &c in hits {
            self.confirmed_hits.insert(c);
            let hit = |n: Option<Coord>| n.is_some_and(|n| self.confirmed_hits.contains(&n));

            let mut queued = Vec::new();
            let mut isolated = true;
            if hit(c.left()) {
                queued.extend(c.right(w));
                isolated = false;
            }
            if hit(c.right(w)) {
                queued.extend(c.left());
                isolated = false;
            }
            if hit(c.up()) {
                queued.extend(c.down(h));
                isolated = false;
            }
            if hit(c.down(h)) {
                queued.extend(c.up());
                isolated = false;
            }
            if isolated {
                queued.extend([c.left(), c.right(w), c.up(), c.down(h)].into_iter().flatten());
            }
            self.follow_ups.extend(queued);
        }

        let mut seen = BTreeSet::new();
        self.follow_ups.retain(|c| seen.insert(*c));
        Ok(())
    }
}

/// Checkerboard sample of the grid in row-major order. Each row starts on the
/// opposite phase of the previous one and keeps every other column.
pub fn parity_pool(height: usize, width: usize) -> Vec<Coord> {
    let mut pool = Vec::with_capacity(height * width / 2 + 1);
    for y in 0..height {
        let mut place = y % 2 == 0;
        for x in 0..width {
            if place {
                pool.push(Coord::new(x, y));
            }
            place = !place;
        }
    }
    pool
}

/// Diagonal from the centre toward the top-left corner, stopping before
/// either axis reaches zero.
pub fn seed_path(height: usize, width: usize) -> VecDeque<Coord> {
    let (mut x, mut y) = (width / 2, height / 2);
    let mut path = VecDeque::new();
    while x > 0 && y > 0 {
        path.push_back(Coord::new(x, y));
        x -= 1;
        y -= 1;
    }
    path
}
