//! Advisory structural validation
//!
//! Findings are data, not errors: an invalid board is a normal,
//! correctable editing state. Validation never mutates and never blocks
//! an edit.

use crate::board::Board;
use crate::terrain::{Exits, BRIDGE, BUILDING, FUEL_TANK};

/// Structural problems across the whole board, human-readable
///
/// Runs the per-hex checks plus board-wide footprint consistency for
/// structures: a pinned exit bit on a building, bridge, or fuel tank must
/// point at a neighbor carrying the same terrain. An empty result means
/// the board is valid.
pub fn validate(board: &Board) -> Vec<String> {
    let mut problems = Vec::new();

    for (c, hex) in board.hexes() {
        for problem in hex.check() {
            problems.push(format!("Hex {}: {}", c, problem));
        }
    }

    for (c, hex) in board.hexes() {
        for type_id in [BUILDING, BRIDGE, FUEL_TANK] {
            let mask = match hex.terrain(type_id).map(|t| t.exits) {
                Some(Exits::Edges(mask)) => mask,
                _ => continue,
            };
            for dir in 0..6u8 {
                if !mask.has(dir) {
                    continue;
                }
                let neighbor = c.neighbor(dir);
                let connected = board
                    .hex(neighbor)
                    .map_or(false, |n| n.contains_terrain(type_id));
                if !connected {
                    problems.push(format!(
                        "Hex {}: {} exit {} leads to no matching structure",
                        c,
                        crate::terrain::get_terrain_type(type_id).name,
                        dir
                    ));
                }
            }
        }
    }

    problems
}
