//! Integration tests for the HEXFORGE board editor
//!
//! Tests the full stack: generation, brush painting, bulk transforms,
//! undo/redo, dirty tracking, and file round trips.

use hexforge_core::{
    brush_coords, flatten, flood, generate, load_board, paint, resize_implant, save_board,
    shift_levels, validate, zones,
    Board, BoardSettings, Coords, Hex, History, PaintMode, Terrain,
};
use hexforge_core::terrain::{BUILDING, ROUGH, WATER, WOODS};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn hilly_settings() -> BoardSettings {
    BoardSettings {
        width: 16,
        height: 17,
        hilliness: 6,
        woods: 5,
        lakes: 2,
        seed: Some(99),
        ..Default::default()
    }
}

fn woods_template() -> Hex {
    let mut hex = Hex::new(1);
    hex.set_terrain(Terrain::new(WOODS, 2));
    hex
}

// ============================================================================
// FULL EDITING SESSION
// ============================================================================

#[test]
fn test_generate_paint_transform_save_load() {
    let mut board = generate(&hilly_settings());
    let mut history = History::new();

    // paint a woods patch
    paint(
        &mut board,
        &mut history,
        Coords::new(8, 8),
        2,
        &woods_template(),
        PaintMode::Overwrite,
    );
    history.commit();

    // flood the lowlands
    flood(&mut board, &mut history, 1, true);
    assert!(history.is_dirty());

    let bytes = save_board(&board).unwrap();
    history.mark_saved();
    assert!(!history.is_dirty());

    let loaded = load_board(&bytes).unwrap();
    assert_eq!(loaded, board);
}

#[test]
fn test_undo_redo_inverse_over_random_session() {
    let settings = hilly_settings();
    let mut board = generate(&settings);
    let initial = board.clone();
    let mut history = History::new();
    let mut rng = ChaCha8Rng::seed_from_u64(4242);

    // a random editing session: paints and transforms interleaved
    for step in 0..20 {
        match step % 5 {
            4 => flood(&mut board, &mut history, rng.gen_range(1..3), false),
            3 => shift_levels(&mut board, &mut history, rng.gen_range(-1..=1i32)),
            _ => {
                let center = Coords::new(
                    rng.gen_range(0..board.width()),
                    rng.gen_range(0..board.height()),
                );
                let size = rng.gen_range(1..=3);
                let mode = match rng.gen_range(0..3) {
                    0 => PaintMode::Overwrite,
                    1 => PaintMode::Add,
                    _ => PaintMode::RaiseLowerLevel,
                };
                paint(&mut board, &mut history, center, size, &woods_template(), mode);
                history.commit();
            }
        }
    }

    // shift with delta 0 and floods over dry boards push nothing, so walk
    // back exactly as many steps as the history recorded
    let final_state = board.clone();
    let depth = history.depth();
    for _ in 0..depth {
        assert!(history.undo(&mut board));
    }
    assert_eq!(board, initial);

    for _ in 0..depth {
        assert!(history.redo(&mut board));
    }
    assert_eq!(board, final_state);
}

#[test]
fn test_transform_atomicity_over_generated_board() {
    let mut board = generate(&hilly_settings());
    let before = board.clone();
    let mut history = History::new();

    flatten(&mut board, &mut history);
    assert_eq!(history.depth(), 1);
    assert!(board.hexes().all(|(_, h)| h.level == 0));

    history.undo(&mut board);
    assert_eq!(board, before);
}

// ============================================================================
// BRUSH AND ZONES AGAINST A REAL BOARD
// ============================================================================

#[test]
fn test_brush_never_exceeds_unclipped_counts() {
    let board = generate(&hilly_settings());
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..200 {
        let c = Coords::new(
            rng.gen_range(-2..board.width() + 2),
            rng.gen_range(-2..board.height() + 2),
        );
        assert!(brush_coords(&board, c, 1).len() <= 1);
        assert!(brush_coords(&board, c, 2).len() <= 7);
        assert!(brush_coords(&board, c, 3).len() <= 19);
    }
}

#[test]
fn test_zone_membership_round_trips_through_file() {
    let mut board = Board::new(4, 4);
    let corner = Coords::new(0, 0);
    zones::add_zone(board.hex_mut(corner).unwrap(), 3);
    zones::add_zone(board.hex_mut(corner).unwrap(), 7);
    zones::add_zone(board.hex_mut(corner).unwrap(), 31);

    let loaded = load_board(&save_board(&board).unwrap()).unwrap();
    let mask = zones::zone_mask(loaded.hex(corner).unwrap());
    assert_eq!(zones::zones_of(mask), vec![3, 7, 31]);
}

// ============================================================================
// RESIZE AND VALIDATION
// ============================================================================

#[test]
fn test_resize_round_trip_preserves_interior() {
    let mut board = generate(&hilly_settings());
    board
        .hex_mut(Coords::new(4, 4))
        .unwrap()
        .set_terrain(Terrain::new(ROUGH, 1));

    // grow by an even western margin, then cut it back off
    let grown = resize_implant(&board, 2, 0, 0, 0, &BoardSettings::default());
    let restored = resize_implant(&grown, -2, 0, 0, 0, &BoardSettings::default());
    assert_eq!(restored, board);
}

#[test]
fn test_validator_flags_bare_building_until_ensured() {
    let mut board = generate(&BoardSettings {
        width: 8,
        height: 8,
        ..Default::default()
    });
    let c = Coords::new(2, 2);
    board
        .hex_mut(c)
        .unwrap()
        .set_terrain(Terrain::new(BUILDING, 1));

    assert!(!validate(&board).is_empty());

    board.hex_mut(c).unwrap().ensure_companions(BUILDING);
    assert!(validate(&board).is_empty());
}

#[test]
fn test_flooded_board_stays_loadable_and_valid() {
    let mut board = generate(&hilly_settings());
    let mut history = History::new();
    flood(&mut board, &mut history, 2, true);

    let loaded = load_board(&save_board(&board).unwrap()).unwrap();
    assert_eq!(loaded, board);
    assert!(validate(&loaded).is_empty());
    assert!(loaded.hexes().any(|(_, h)| h.contains_terrain(WATER)));
}
