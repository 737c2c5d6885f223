use std::collections::HashSet;

use battlesalvo::{parity_pool, seed_path, Coord, GameError, Targeting};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn coords(list: &[(usize, usize)]) -> Vec<Coord> {
    list.iter().map(|&c| Coord::from(c)).collect()
}

#[test]
fn test_parity_pool_is_checkerboard() {
    let pool = parity_pool(6, 6);
    assert_eq!(pool.len(), 18);
    assert_eq!(pool[..4], coords(&[(0, 0), (2, 0), (4, 0), (1, 1)])[..]);
    assert!(pool.iter().all(|c| (c.x + c.y) % 2 == 0));

    let odd = parity_pool(7, 7);
    assert_eq!(odd.len(), 25);
}

#[test]
fn test_seed_path_walks_toward_origin() {
    let path: Vec<_> = seed_path(10, 10).into_iter().collect();
    assert_eq!(path, coords(&[(5, 5), (4, 4), (3, 3), (2, 2), (1, 1)]));

    let path: Vec<_> = seed_path(6, 8).into_iter().collect();
    assert_eq!(path, coords(&[(4, 3), (3, 2), (2, 1)]));
}

#[test]
fn test_first_salvo_follows_seed_path() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut t = Targeting::new(10, 10);
    let salvo = t.next_salvo(&mut rng, 3).unwrap();
    assert_eq!(salvo, coords(&[(5, 5), (4, 4), (3, 3)]));
    assert_eq!(t.untaken(), 97);
    assert!(t.is_taken(Coord::new(4, 4)).unwrap());
}

#[test]
fn test_isolated_hit_queues_four_neighbours() {
    let mut t = Targeting::new(10, 10);
    t.record_hits(&[Coord::new(3, 3)]).unwrap();
    let queued: Vec<_> = t.follow_ups().copied().collect();
    assert_eq!(queued, coords(&[(2, 3), (4, 3), (3, 2), (3, 4)]));
}

#[test]
fn test_corner_hit_queues_existing_neighbours() {
    let mut t = Targeting::new(10, 10);
    t.record_hits(&[Coord::new(0, 0)]).unwrap();
    let queued: Vec<_> = t.follow_ups().copied().collect();
    assert_eq!(queued, coords(&[(1, 0), (0, 1)]));
}

#[test]
fn test_adjacent_hit_continues_line() {
    let mut t = Targeting::new(10, 10);
    t.record_hits(&[Coord::new(3, 3)]).unwrap();
    t.record_hits(&[Coord::new(4, 3)]).unwrap();
    let queued: Vec<_> = t.follow_ups().copied().collect();
    assert_eq!(queued.last(), Some(&Coord::new(5, 3)));
    assert!(!queued.contains(&Coord::new(4, 2)));
    assert!(!queued.contains(&Coord::new(4, 4)));
    assert_eq!(t.confirmed_hits().len(), 2);
}

#[test]
fn test_follow_ups_are_deduplicated() {
    let mut t = Targeting::new(10, 10);
    t.record_hits(&[Coord::new(3, 3), Coord::new(5, 3)]).unwrap();
    let queued: Vec<_> = t.follow_ups().copied().collect();
    let unique: HashSet<_> = queued.iter().collect();
    assert_eq!(unique.len(), queued.len());
    assert_eq!(queued.iter().filter(|&&c| c == Coord::new(4, 3)).count(), 1);
}

#[test]
fn test_out_of_bounds_hit_is_rejected() {
    let mut t = Targeting::new(10, 10);
    assert_eq!(
        t.record_hits(&[Coord::new(10, 2)]),
        Err(GameError::OutOfBoundsShot(Coord::new(10, 2)))
    );
    assert!(t.confirmed_hits().is_empty());
}

#[test]
fn test_follow_ups_fire_before_seeds() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut t = Targeting::new(10, 10);
    t.record_hits(&[Coord::new(7, 7)]).unwrap();
    let salvo = t.next_salvo(&mut rng, 2).unwrap();
    assert_eq!(salvo, coords(&[(6, 7), (8, 7)]));
}

#[test]
fn test_taken_candidates_are_skipped() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut t = Targeting::new(10, 10);
    assert_eq!(t.next_salvo(&mut rng, 1).unwrap(), coords(&[(5, 5)]));

    t.record_hits(&[Coord::new(4, 5)]).unwrap();
    let salvo = t.next_salvo(&mut rng, 4).unwrap();
    assert_eq!(salvo, coords(&[(3, 5), (4, 4), (4, 6), (3, 3)]));
}

#[test]
fn test_board_is_exhausted_without_repeats() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut t = Targeting::new(6, 6);
    let mut fired = HashSet::new();
    while t.untaken() > 0 {
        let salvo = t.next_salvo(&mut rng, 5).unwrap();
        assert!(!salvo.is_empty());
        for c in salvo {
            assert!(c.in_bounds(6, 6));
            assert!(fired.insert(c), "{} fired twice", c);
        }
    }
    assert_eq!(fired.len(), 36);
    assert!(t.next_salvo(&mut rng, 5).unwrap().is_empty());
}

#[test]
fn test_salvo_capped_by_untaken_cells() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut t = Targeting::new(6, 6);
    t.next_salvo(&mut rng, 34).unwrap();
    assert_eq!(t.next_salvo(&mut rng, 4).unwrap().len(), 2);
}
