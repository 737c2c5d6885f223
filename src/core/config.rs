use alloc::format;

use crate::core::common::GameError;

/// Smallest allowed board dimension.
pub const MIN_DIMENSION: usize = 6;
/// Largest allowed board dimension.
pub const MAX_DIMENSION: usize = 15;

/// Fleets whose exclusion footprint covers more than this share of the board
/// are placed without the adjacency rule.
pub const DENSITY_THRESHOLD_PERCENT: usize = 74;

/// Candidates checked under the adjacency rule in one placement round.
pub const ADJACENCY_BUDGET: usize = 900;

/// Random draws allowed for a single ship before the round is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2_000;

/// Fresh placement rounds tried after the first one fails.
pub const MAX_PLACEMENT_RESTARTS: usize = 10;

pub const NUM_SHIP_TYPES: usize = 4;

/// The ship catalog, longest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipType {
    Carrier,
    Battleship,
    Destroyer,
    Submarine,
}

impl ShipType {
    pub const ALL: [ShipType; NUM_SHIP_TYPES] = [
        ShipType::Carrier,
        ShipType::Battleship,
        ShipType::Destroyer,
        ShipType::Submarine,
    ];

    /// Ship's length in cells.
    pub const fn size(self) -> usize {
        match self {
            ShipType::Carrier => 6,
            ShipType::Battleship => 5,
            ShipType::Destroyer => 4,
            ShipType::Submarine => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Carrier => "Carrier",
            ShipType::Battleship => "Battleship",
            ShipType::Destroyer => "Destroyer",
            ShipType::Submarine => "Submarine",
        }
    }

    /// Approximate area a ship claims including a one cell buffer.
    pub const fn footprint(self) -> usize {
        self.size() * 2 + 2
    }

    const fn index(self) -> usize {
        match self {
            ShipType::Carrier => 0,
            ShipType::Battleship => 1,
            ShipType::Destroyer => 2,
            ShipType::Submarine => 3,
        }
    }
}

/// Requested number of ships of each type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetSpec {
    counts: [usize; NUM_SHIP_TYPES],
}

impl FleetSpec {
    /// An empty fleet request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for one ship type.
    pub fn with(mut self, ship: ShipType, count: usize) -> Self {
        self.counts[ship.index()] = count;
        self
    }

    pub fn set(&mut self, ship: ShipType, count: usize) {
        self.counts[ship.index()] = count;
    }

    pub fn count(&self, ship: ShipType) -> usize {
        self.counts[ship.index()]
    }

    /// `(type, count)` pairs in catalog order, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (ShipType, usize)> + '_ {
        ShipType::ALL.iter().map(move |&s| (s, self.count(s)))
    }

    /// Total number of ships requested.
    pub fn total_ships(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Total number of ship cells requested.
    pub fn total_cells(&self) -> usize {
        self.iter().map(|(s, n)| s.size() * n).sum()
    }

    /// Sum of the exclusion footprints of every requested ship.
    pub fn footprint(&self) -> usize {
        self.iter().map(|(s, n)| s.footprint() * n).sum()
    }

    /// Check the request against the board dimensions.
    pub fn validate(&self, height: usize, width: usize) -> Result<(), GameError> {
        validate_dimensions(height, width)?;
        if self.total_ships() == 0 {
            return Err(GameError::InvalidSpecification(
                "fleet must contain at least one ship".into(),
            ));
        }
        let limit = height.min(width);
        if let Some((ship, _)) = self.iter().find(|&(s, n)| n > 0 && s.size() > limit) {
            return Err(GameError::InvalidSpecification(format!(
                "{} of length {} does not fit a {}x{} board",
                ship.name(),
                ship.size(),
                height,
                width
            )));
        }
        Ok(())
    }
}

impl FromIterator<(ShipType, usize)> for FleetSpec {
    fn from_iter<I: IntoIterator<Item = (ShipType, usize)>>(iter: I) -> Self {
        let mut spec = FleetSpec::new();
        for (ship, count) in iter {
            spec.set(ship, count);
        }
        spec
    }
}

/// Check that both dimensions are within the playable range.
pub fn validate_dimensions(height: usize, width: usize) -> Result<(), GameError> {
    let range = MIN_DIMENSION..=MAX_DIMENSION;
    if !range.contains(&height) || !range.contains(&width) {
        return Err(GameError::InvalidSpecification(format!(
            "board {}x{} is outside {}..={}",
            height, width, MIN_DIMENSION, MAX_DIMENSION
        )));
    }
    Ok(())
}

/// Tunables for the fleet placement algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPolicy {
    pub density_threshold_percent: usize,
    pub adjacency_budget: usize,
    pub max_attempts_per_ship: usize,
    pub max_restarts: usize,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            density_threshold_percent: DENSITY_THRESHOLD_PERCENT,
            adjacency_budget: ADJACENCY_BUDGET,
            max_attempts_per_ship: MAX_PLACEMENT_ATTEMPTS,
            max_restarts: MAX_PLACEMENT_RESTARTS,
        }
    }
}
