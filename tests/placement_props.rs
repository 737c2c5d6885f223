use battlesalvo::{place_fleet, FleetSpec, PlacementPolicy, ShipType};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_fleet_is_legal(
        seed in any::<u64>(),
        height in 6usize..=15,
        width in 6usize..=15,
        counts in prop::array::uniform4(0usize..=2),
    ) {
        let spec: FleetSpec = ShipType::ALL.iter().copied().zip(counts).collect();
        prop_assume!(spec.total_ships() > 0);
        prop_assume!(spec.total_cells() * 2 <= height * width);

        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = place_fleet(&mut rng, height, width, &spec, &PlacementPolicy::default()).unwrap();
        let ships = fleet.ships();
        let sparse = spec.footprint() * 100 <= 74 * height * width;
        prop_assert_eq!(fleet.adjacency_enforced(), sparse);

        prop_assert_eq!(ships.len(), spec.total_ships());
        for &ship_type in ShipType::ALL.iter() {
            let n = ships.iter().filter(|s| s.ship_type() == ship_type).count();
            prop_assert_eq!(n, spec.count(ship_type));
        }
        for (i, a) in ships.iter().enumerate() {
            prop_assert!(a.in_bounds(height, width));
            prop_assert_eq!(a.cells().len(), a.ship_type().size());
            for b in &ships[i + 1..] {
                prop_assert!(!a.overlaps(b));
                if sparse {
                    prop_assert!(!a.touches(b));
                }
            }
        }
    }
}
