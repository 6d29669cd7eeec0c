//! Board-wide transforms
//!
//! Every transform snapshots each cell it changes through the history
//! before mutating, then commits the whole sweep as a single edit unit:
//! one undo reverts the entire transform.

use crate::board::Board;
use crate::coords::Coords;
use crate::generate::{generate, BoardSettings};
use crate::history::History;
use crate::terrain::{
    get_terrain_type, EdgeMask, ExitKind, Exits, Terrain, TerrainTypeId, BRIDGE, BRIDGE_CF,
    BRIDGE_ELEV, WATER,
};

/// Set every hex's elevation to zero
pub fn flatten(board: &mut Board, history: &mut History) {
    let coords: Vec<Coords> = board.coords().collect();
    for c in coords {
        if board.hex(c).map_or(true, |h| h.level == 0) {
            continue;
        }
        history.begin_or_continue(board, c);
        if let Some(hex) = board.hex_mut(c) {
            hex.level = 0;
        }
    }
    history.commit();
}

/// Strip the listed terrain types from every hex that has any of them
pub fn remove_terrains(board: &mut Board, history: &mut History, types: &[TerrainTypeId]) {
    let coords: Vec<Coords> = board.coords().collect();
    for c in coords {
        let touched = board
            .hex(c)
            .map_or(false, |h| types.iter().any(|&t| h.contains_terrain(t)));
        if !touched {
            continue;
        }
        history.begin_or_continue(board, c);
        if let Some(hex) = board.hex_mut(c) {
            for &t in types {
                hex.remove_terrain(t);
            }
        }
    }
    history.commit();
}

/// Shift every hex's elevation by `delta`; no clamping
pub fn shift_levels(board: &mut Board, history: &mut History, delta: i32) {
    if delta == 0 {
        return;
    }
    let coords: Vec<Coords> = board.coords().collect();
    for c in coords {
        history.begin_or_continue(board, c);
        if let Some(hex) = board.hex_mut(c) {
            hex.level += delta;
        }
    }
    history.commit();
}

/// Flood every hex below `surface` up to that elevation
///
/// The floor rises to the surface and the difference is recorded as water
/// level, stacking on any existing water. With `remove_terrain`, flooded
/// terrain is cleared except a bridge whose deck still stands at or above
/// the surface; its deck height is rebased onto the new floor. Cells at
/// or above the surface are untouched.
pub fn flood(board: &mut Board, history: &mut History, surface: i32, remove_terrain: bool) {
    let coords: Vec<Coords> = board.coords().collect();
    for c in coords {
        if board.hex(c).map_or(true, |h| h.level >= surface) {
            continue;
        }
        history.begin_or_continue(board, c);
        if let Some(hex) = board.hex_mut(c) {
            let added = surface - hex.level;
            let prev_water = hex.terrain(WATER).map_or(0, |t| t.level);

            if remove_terrain {
                let bridge = hex.terrain(BRIDGE).copied();
                let bridge_cf = hex.terrain(BRIDGE_CF).copied();
                let deck = hex.terrain(BRIDGE_ELEV).map(|t| hex.level + t.level);
                hex.clear_terrains();

                if let (Some(bridge), Some(deck)) = (bridge, deck) {
                    if deck >= surface {
                        hex.set_terrain(bridge);
                        hex.set_terrain(Terrain::new(BRIDGE_ELEV, deck - surface));
                        if let Some(cf) = bridge_cf {
                            hex.set_terrain(cf);
                        }
                    }
                }
            }

            hex.set_terrain(Terrain::new(WATER, added + prev_water));
            hex.level += added;
        }
    }
    history.commit();
}

/// Resize the board by edge deltas and implant the old content
///
/// The new board is generated from `fill`, then every old cell is copied
/// to `(x + west, y + north + (x & 1 & west))` where that lands in
/// bounds; the parity term keeps odd columns row-aligned when the west
/// shift is odd. Returns a fresh board: replacing a board resets its
/// history, so no edit unit is produced.
pub fn resize_implant(
    old: &Board,
    west: i32,
    north: i32,
    east: i32,
    south: i32,
    fill: &BoardSettings,
) -> Board {
    let settings = BoardSettings {
        width: old.width() + west + east,
        height: old.height() + north + south,
        ..fill.clone()
    };
    let mut board = generate(&settings);
    board.roads_auto_exit = old.roads_auto_exit;
    board.tags = old.tags.clone();

    for (c, hex) in old.hexes() {
        let odd = c.x & 1 & west;
        let target = Coords::new(c.x + west, c.y + north + odd);
        if board.contains(target) {
            board.set_hex(target, hex.clone());
        }
    }
    board
}

/// Recompute auto exits for edge-bearing terrains
///
/// Idempotent normalization run by the editing flow after bulk edits.
/// Only derived (non-pinned) exit masks are recomputed: an edge bit is
/// set where the neighbor holds one of the terrain's connecting types.
/// Does nothing unless the board has `roads_auto_exit` set.
pub fn correct_exits(board: &mut Board) {
    if !board.roads_auto_exit {
        return;
    }

    let coords: Vec<Coords> = board.coords().collect();
    for c in coords {
        let auto_ids: Vec<TerrainTypeId> = match board.hex(c) {
            Some(hex) => hex
                .terrains()
                .filter(|t| {
                    get_terrain_type(t.type_id).exit_kind == ExitKind::Edges
                        && !t.exits_specified()
                })
                .map(|t| t.type_id)
                .collect(),
            None => continue,
        };

        for id in auto_ids {
            let mut mask = EdgeMask::NONE;
            for dir in 0..6u8 {
                let neighbor = c.neighbor(dir);
                let connected = board.hex(neighbor).map_or(false, |n| {
                    get_terrain_type(id).connects.iter().any(|&t| n.contains_terrain(t))
                });
                if connected {
                    mask = mask.with(dir);
                }
            }
            if let Some(hex) = board.hex_mut(c) {
                if let Some(mut terrain) = hex.terrain(id).copied() {
                    terrain.exits = Exits::Auto(mask);
                    hex.set_terrain(terrain);
                }
            }
        }
    }
}
