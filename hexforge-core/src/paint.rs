//! Brush paint application policies

use crate::board::Board;
use crate::brush::brush_coords;
use crate::coords::Coords;
use crate::hex::Hex;
use crate::history::History;
use crate::terrain::DEPLOYMENT_ZONE;

/// How a painted template applies to a destination hex
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintMode {
    /// Replace the destination wholesale, preserving its zone membership
    Overwrite,
    /// Only fill terrain types the destination lacks
    Add,
    /// Only apply the template theme
    Retexture,
    /// Only apply the template level
    RaiseLowerLevel,
}

/// Apply `template` to every brush cell around `center`
///
/// Snapshots each touched cell into the open edit unit first. Never
/// commits: one gesture may span many paint calls, and the host commits
/// on gesture end.
pub fn paint(
    board: &mut Board,
    history: &mut History,
    center: Coords,
    brush_size: u8,
    template: &Hex,
    mode: PaintMode,
) {
    for c in brush_coords(board, center, brush_size) {
        history.begin_or_continue(board, c);
        if let Some(hex) = board.hex_mut(c) {
            apply(hex, template, mode);
        }
    }
}

fn apply(dest: &mut Hex, template: &Hex, mode: PaintMode) {
    match mode {
        PaintMode::Overwrite => {
            let zone = dest.remove_terrain(DEPLOYMENT_ZONE);
            *dest = template.clone();
            if let Some(zone) = zone {
                dest.set_terrain(zone);
            }
        }
        PaintMode::Add => {
            let missing: Vec<_> = template
                .terrains()
                .filter(|t| !dest.contains_terrain(t.type_id))
                .copied()
                .collect();
            for terrain in missing {
                dest.set_terrain(terrain);
            }
        }
        PaintMode::Retexture => {
            dest.theme = template.theme.clone();
        }
        PaintMode::RaiseLowerLevel => {
            dest.level = template.level;
        }
    }
}
