//! Offset hex coordinates with parity-dependent neighbor geometry

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hex direction indices
/// 0=N, 1=NE, 2=SE, 3=S, 4=SW, 5=NW
pub const NORTH: u8 = 0;
pub const NORTHEAST: u8 = 1;
pub const SOUTHEAST: u8 = 2;
pub const SOUTH: u8 = 3;
pub const SOUTHWEST: u8 = 4;
pub const NORTHWEST: u8 = 5;

/// Neighbor offsets (dx, dy) for even columns
pub const EVEN_COL_OFFSETS: [(i32, i32); 6] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // SE
    (0, 1),   // S
    (-1, 0),  // SW
    (-1, -1), // NW
];

/// Neighbor offsets (dx, dy) for odd columns
pub const ODD_COL_OFFSETS: [(i32, i32); 6] = [
    (0, -1), // N
    (1, 0),  // NE
    (1, 1),  // SE
    (0, 1),  // S
    (-1, 1), // SW
    (-1, 0), // NW
];

/// Board coordinates (column, row)
///
/// Odd columns sit half a hex lower than even columns, so the neighbor
/// offset pattern depends on column parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset table for this column's parity
    fn offsets(&self) -> &'static [(i32, i32); 6] {
        if self.x & 1 == 1 {
            &ODD_COL_OFFSETS
        } else {
            &EVEN_COL_OFFSETS
        }
    }

    /// Neighbor in direction (0-5)
    pub fn neighbor(&self, direction: u8) -> Coords {
        let (dx, dy) = self.offsets()[direction as usize % 6];
        Coords::new(self.x + dx, self.y + dy)
    }

    /// All six adjacent coordinates, in direction order
    pub fn neighbors(&self) -> [Coords; 6] {
        let mut result = [*self; 6];
        for (dir, slot) in result.iter_mut().enumerate() {
            *slot = self.neighbor(dir as u8);
        }
        result
    }

    /// All coordinates exactly `distance` hex-steps away
    ///
    /// Computed by expanding the neighbor set outward and de-duplicating;
    /// the center and closer rings are excluded.
    pub fn ring(&self, distance: u8) -> Vec<Coords> {
        let mut visited: FxHashSet<Coords> = FxHashSet::default();
        visited.insert(*self);
        let mut edge: Vec<Coords> = vec![*self];

        for _ in 0..distance {
            let mut next = Vec::new();
            for c in &edge {
                for n in c.neighbors() {
                    if visited.insert(n) {
                        next.push(n);
                    }
                }
            }
            edge = next;
        }
        edge
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
