//! Run with: `cargo test --test board_queries`
//!
//! Exercises the crate the way a turn-based game would: a small board with
//! obstructed cells, movement queries, placement correction, attack lines,
//! and a pixel layout for hit-testing.

use hexgrid::{Direction, Hex, PixelLayout};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

/// A wall of obstructed cells along the axial column `q == 2`, with a
/// single gap. Any step from `q <= 1` to `q >= 3` must pass through it.
fn walled_board() -> HashSet<Hex> {
    let gap = Hex::new(2, -1);
    (-4..=2)
        .map(|r| Hex::new(2, r))
        .filter(|&hex| hex != gap)
        .collect()
}

#[test]
fn movement_is_limited_by_the_wall() {
    let blocked = walled_board();
    let unit = Hex::ZERO;

    let near = unit.reachable(1, &blocked);
    assert_eq!(near.len(), 7);

    // the far side of the wall is only reachable through the gap
    let far_side = Hex::new(3, -1);
    assert!(!unit.reachable(2, &blocked).contains(&far_side));
    assert!(unit.reachable(3, &blocked).contains(&far_side));
}

#[test]
fn blocked_placement_is_corrected_to_an_adjacent_cell() {
    let mut blocked = walled_board();
    let drop_point = Hex::new(2, -1);
    blocked.insert(drop_point);

    let mut rng = StdRng::seed_from_u64(42);
    let corrected = drop_point
        .closest_valid_neighbor(&blocked, 5, &mut rng)
        .expect("the board is mostly open");
    assert!(!blocked.contains(&corrected));
    assert_eq!(corrected.distance(drop_point), 1);

    // an open drop point needs no correction
    let mut rng = StdRng::seed_from_u64(42);
    assert_eq!(Hex::ZERO.closest_valid_neighbor(&blocked, 5, &mut rng), None);
}

#[test]
fn attack_line_crosses_the_wall_cell_by_cell() {
    let shooter = Hex::ZERO;
    let target = Hex::new(4, -2);
    let line = shooter.line_to(target);

    assert_eq!(line.len() as i32, shooter.distance(target) + 1);
    assert_eq!(line[0], shooter);
    assert_eq!(*line.last().unwrap(), target);
    for (a, b) in line.iter().tuple_windows() {
        assert!(a.distance(*b) <= 1);
    }
}

#[test]
fn formation_rotates_around_its_anchor() {
    let anchor = Hex::new(1, 1);
    let formation = [anchor, anchor + Direction::Right, anchor + Direction::RightUp];

    let rotated: Vec<Hex> = formation
        .iter()
        .map(|hex| hex.rotate_around(anchor, true))
        .collect();

    // the anchor is fixed; every other member keeps its distance to it
    assert_eq!(rotated[0], anchor);
    for (before, after) in formation.iter().zip(&rotated).skip(1) {
        assert_eq!(before.distance(anchor), after.distance(anchor));
        assert_ne!(before, after);
    }
}

#[test]
fn hit_testing_through_the_pixel_layout() {
    let layout = PixelLayout {
        size: 24.0,
        spacing: (0, 0),
        origin: (400.0, 300.0),
    };

    for hex in Hex::ZERO.hex_range(4, false) {
        let pixel = layout.hex_to_pixel(hex);
        assert_eq!(layout.pixel_to_hex(pixel), hex);
        assert_eq!(layout.gui_to_hex(layout.hex_to_gui(hex)), hex);
    }
}
