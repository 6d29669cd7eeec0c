//! Undo/redo history over atomic edit units

use crate::board::Board;
use crate::coords::Coords;
use crate::hex::Hex;
use rustc_hash::FxHashMap;

/// One atomic undo step: the pre-edit snapshot of every cell it touched
///
/// Entries form an append-only log; the index keeps each coordinate to a
/// single entry, so a cell dragged over repeatedly in one gesture is
/// snapshotted once and intermediate states never become undo targets.
#[derive(Clone, Debug, Default)]
pub struct EditUnit {
    entries: Vec<(Coords, Hex)>,
    index: FxHashMap<Coords, usize>,
}

impl EditUnit {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, c: Coords) -> bool {
        self.index.contains_key(&c)
    }

    fn record(&mut self, c: Coords, hex: Hex) {
        if !self.index.contains_key(&c) {
            self.index.insert(c, self.entries.len());
            self.entries.push((c, hex));
        }
    }
}

/// Undo/redo stacks with save-point dirty tracking
///
/// Saving does not clear history; it marks the current undo depth as the
/// saved one. `can_return_to_saved` goes false the moment an undo drops
/// below that depth and stays false until the next save, so redoing back
/// to the same depth no longer counts as clean.
#[derive(Clone, Debug)]
pub struct History {
    undo_stack: Vec<EditUnit>,
    redo_stack: Vec<EditUnit>,
    open: Option<EditUnit>,
    saved_depth: usize,
    can_return_to_saved: bool,
}

impl History {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            open: None,
            saved_depth: 0,
            can_return_to_saved: true,
        }
    }

    /// Snapshot `c` into the open edit unit, opening one if needed
    ///
    /// Call before mutating the hex at `c`. A coordinate already in the
    /// open unit is not re-snapshotted. Out-of-bounds coordinates are
    /// ignored.
    pub fn begin_or_continue(&mut self, board: &Board, c: Coords) {
        if let Some(hex) = board.hex(c) {
            self.open
                .get_or_insert_with(EditUnit::default)
                .record(c, hex.clone());
        }
    }

    /// Close the open unit and push it as one undo step
    ///
    /// Fires on gesture end. An empty or absent unit pushes nothing; a
    /// real push clears the redo stack.
    pub fn commit(&mut self) {
        if let Some(unit) = self.open.take() {
            if !unit.is_empty() {
                self.undo_stack.push(unit);
                self.redo_stack.clear();
            }
        }
    }

    /// Revert the most recent edit unit; no-op when nothing to undo
    pub fn undo(&mut self, board: &mut Board) -> bool {
        let unit = match self.undo_stack.pop() {
            Some(u) => u,
            None => return false,
        };

        let mut counter = EditUnit::default();
        for (c, old_hex) in unit.entries {
            if let Some(current) = board.hex(c) {
                counter.record(c, current.clone());
            }
            board.set_hex(c, old_hex);
        }
        self.redo_stack.push(counter);

        if self.undo_stack.len() < self.saved_depth {
            self.can_return_to_saved = false;
        }
        true
    }

    /// Re-apply the most recently undone unit; no-op when nothing to redo
    pub fn redo(&mut self, board: &mut Board) -> bool {
        let unit = match self.redo_stack.pop() {
            Some(u) => u,
            None => return false,
        };

        let mut counter = EditUnit::default();
        for (c, hex) in unit.entries {
            if let Some(current) = board.hex(c) {
                counter.record(c, current.clone());
            }
            board.set_hex(c, hex);
        }
        self.undo_stack.push(counter);
        true
    }

    /// Mark the current undo depth as the saved state
    pub fn mark_saved(&mut self) {
        self.saved_depth = self.undo_stack.len();
        self.can_return_to_saved = true;
    }

    /// Whether the board differs from its last-saved state
    pub fn is_dirty(&self) -> bool {
        !self.can_return_to_saved || self.undo_stack.len() != self.saved_depth
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Current undo stack depth
    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
