//! Rectangular hex grid

use crate::coords::Coords;
use crate::hex::Hex;
use std::collections::BTreeSet;

/// A rectangular grid of hexes, row-major
///
/// Every in-bounds coordinate maps to exactly one hex; out-of-bounds access
/// returns `None` rather than fabricating cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    width: i32,
    height: i32,
    hexes: Vec<Hex>,
    pub roads_auto_exit: bool,
    pub tags: BTreeSet<String>,
}

impl Board {
    /// Create a clear board; dimensions must be positive
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            hexes: vec![Hex::default(); (width * height) as usize],
            roads_auto_exit: true,
            tags: BTreeSet::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, c: Coords) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    fn index(&self, c: Coords) -> usize {
        (c.y * self.width + c.x) as usize
    }

    pub fn hex(&self, c: Coords) -> Option<&Hex> {
        if self.contains(c) {
            Some(&self.hexes[self.index(c)])
        } else {
            None
        }
    }

    pub fn hex_mut(&mut self, c: Coords) -> Option<&mut Hex> {
        if self.contains(c) {
            let idx = self.index(c);
            Some(&mut self.hexes[idx])
        } else {
            None
        }
    }

    /// Replace the hex at `c`; out of bounds is a no-op
    pub fn set_hex(&mut self, c: Coords, hex: Hex) {
        if let Some(slot) = self.hex_mut(c) {
            *slot = hex;
        }
    }

    /// All board coordinates, row-major
    pub fn coords(&self) -> impl Iterator<Item = Coords> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coords::new(x, y)))
    }

    /// All (coordinate, hex) pairs, row-major
    pub fn hexes(&self) -> impl Iterator<Item = (Coords, &Hex)> {
        self.coords().map(move |c| (c, &self.hexes[self.index(c)]))
    }
}
