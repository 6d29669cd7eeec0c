//! Deployment zone codec
//!
//! Zone membership for a hex is packed into a single 31-bit mask on a
//! DEPLOYMENT_ZONE terrain: bit z-1 set means the hex belongs to zone z.
//! A hex either belongs to at least one zone or carries no such terrain;
//! an empty mask is never stored.

use crate::hex::Hex;
use crate::terrain::{Exits, Terrain, ZoneMask, DEPLOYMENT_ZONE};

/// Highest valid zone number
pub const MAX_ZONE: u8 = 31;

/// Current zone mask of a hex, empty if it has no zone terrain
pub fn zone_mask(hex: &Hex) -> ZoneMask {
    match hex.terrain(DEPLOYMENT_ZONE).map(|t| t.exits) {
        Some(Exits::Zones(mask)) => mask,
        _ => ZoneMask::default(),
    }
}

/// Add the hex to zone `z` (1-31)
pub fn add_zone(hex: &mut Hex, z: u8) {
    debug_assert!((1..=MAX_ZONE).contains(&z));
    let mask = zone_mask(hex).with_zone(z);
    hex.set_terrain(Terrain::with_zones(DEPLOYMENT_ZONE, mask));
}

/// Remove the hex from zone `z`; drops the terrain when no zones remain
pub fn remove_zone(hex: &mut Hex, z: u8) {
    debug_assert!((1..=MAX_ZONE).contains(&z));
    let mask = zone_mask(hex).without_zone(z);
    if mask.is_empty() {
        hex.remove_terrain(DEPLOYMENT_ZONE);
    } else {
        hex.set_terrain(Terrain::with_zones(DEPLOYMENT_ZONE, mask));
    }
}

/// Pack zone numbers into a mask
pub fn encode(zones: &[u8]) -> ZoneMask {
    zones
        .iter()
        .fold(ZoneMask::default(), |mask, &z| mask.with_zone(z))
}

/// Unpack a mask into ascending zone numbers
pub fn zones_of(mask: ZoneMask) -> Vec<u8> {
    (1..=MAX_ZONE).filter(|&z| mask.has_zone(z)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mask = encode(&[3, 7, 31]);
        assert_eq!(zones_of(mask), vec![3, 7, 31]);
        // encode is order-insensitive
        assert_eq!(encode(&[31, 3, 7]), mask);
    }

    #[test]
    fn test_add_creates_terrain() {
        let mut hex = Hex::new(0);
        assert!(!hex.contains_terrain(DEPLOYMENT_ZONE));
        add_zone(&mut hex, 5);
        assert_eq!(zones_of(zone_mask(&hex)), vec![5]);
        add_zone(&mut hex, 2);
        assert_eq!(zones_of(zone_mask(&hex)), vec![2, 5]);
    }

    #[test]
    fn test_remove_last_zone_drops_terrain() {
        let mut hex = Hex::new(0);
        add_zone(&mut hex, 5);
        add_zone(&mut hex, 9);
        remove_zone(&mut hex, 5);
        assert!(hex.contains_terrain(DEPLOYMENT_ZONE));
        remove_zone(&mut hex, 9);
        assert!(!hex.contains_terrain(DEPLOYMENT_ZONE));
    }

    #[test]
    fn test_remove_absent_zone_is_noop() {
        let mut hex = Hex::new(0);
        add_zone(&mut hex, 4);
        remove_zone(&mut hex, 7);
        assert_eq!(zones_of(zone_mask(&hex)), vec![4]);
    }
}
