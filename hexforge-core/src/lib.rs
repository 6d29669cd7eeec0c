//! HEXFORGE Core - hex map editing engine
//!
//! This crate provides the editing core for HEXFORGE:
//! - Board geometry (offset hex grid, parity-dependent neighbors)
//! - Terrain types and the per-hex terrain stack
//! - Deployment zone encoding
//! - Brush selection and paint policies
//! - Atomic undo/redo with save-point dirty tracking
//! - Board transforms (flood, flatten, level shift, resize-implant)
//! - Structural validation and board file serialization

pub mod board;
pub mod brush;
pub mod coords;
pub mod generate;
pub mod hex;
pub mod history;
pub mod io;
pub mod paint;
pub mod terrain;
pub mod transform;
pub mod validate;
pub mod zones;

// Re-exports for convenient access
pub use board::Board;
pub use brush::brush_coords;
pub use coords::Coords;
pub use generate::{generate, BoardSettings};
pub use hex::Hex;
pub use history::{EditUnit, History};
pub use io::{load_board, save_board, LoadError, SaveError};
pub use paint::{paint, PaintMode};
pub use terrain::{
    get_terrain_type, terrain_id_to_index, EdgeMask, Exits, Terrain, TerrainTypeId, ZoneMask,
    TERRAIN_TYPES,
};
pub use transform::{
    correct_exits, flatten, flood, remove_terrains, resize_implant, shift_levels,
};
pub use validate::validate;
pub use zones::{add_zone, encode, remove_zone, zones_of};
