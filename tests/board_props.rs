use battlesalvo::{place_fleet, Board, Coord, FleetSpec, PlacementPolicy, ShipType};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const SIZE: usize = 10;

fn random_board(rng: &mut SmallRng) -> Board {
    let spec = FleetSpec::new()
        .with(ShipType::Carrier, 1)
        .with(ShipType::Battleship, 1)
        .with(ShipType::Destroyer, 1)
        .with(ShipType::Submarine, 1);
    let fleet = place_fleet(rng, SIZE, SIZE, &spec, &PlacementPolicy::default()).unwrap();
    Board::new(SIZE, SIZE, fleet.into_ships()).unwrap()
}

fn random_salvo(rng: &mut SmallRng) -> Vec<Coord> {
    let n = rng.random_range(0..20);
    (0..n)
        .map(|_| Coord::new(rng.random_range(0..SIZE), rng.random_range(0..SIZE)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn report_damage_idempotent(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng);
        let salvo = random_salvo(&mut rng);

        let first = board.report_damage(&salvo).unwrap();
        let hits_before = board.hits().clone();
        let misses_before = board.misses().clone();
        let standing_before = board.standing_count();

        let second = board.report_damage(&salvo).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(board.standing_count(), standing_before);
        prop_assert_eq!(board.hits().count_ones(), hits_before.count_ones());
        prop_assert_eq!(board.misses().count_ones(), misses_before.count_ones());
    }

    #[test]
    fn hits_are_exactly_ship_cells(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng);
        let salvo = random_salvo(&mut rng);

        let hits = board.report_damage(&salvo).unwrap();
        for c in &salvo {
            prop_assert_eq!(hits.contains(c), board.ship_at(*c).is_some());
        }
    }

    #[test]
    fn standing_iff_unhit_cell_remains(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng);
        for _ in 0..rng.random_range(1..8) {
            let salvo = random_salvo(&mut rng);
            board.report_damage(&salvo).unwrap();
        }

        let standing: Vec<_> = board.standing_ships().cloned().collect();
        for ship in board.ships() {
            let all_hit = ship.cells().iter().all(|&c| board.hits().get(c).unwrap());
            prop_assert_eq!(standing.contains(ship), !all_hit);
        }
        prop_assert_eq!(board.all_sunk(), standing.is_empty());
    }
}
